//! pocket-domain
//!
//! Pure domain models (Entry, MonthKey, salary classification, snapshots).
//! No I/O, no storage, no logging. Only data types and core enums.

pub mod common;
pub mod entry;
pub mod month;
pub mod salary;
pub mod snapshot;

pub use common::*;
pub use entry::*;
pub use month::*;
pub use salary::*;
pub use snapshot::*;
