//! pocket-services
//!
//! Aggregation, averaging, salary detection and projection services.
//! Depends on pocket-domain. No terminal I/O and no direct file access;
//! persistence is reached only through the [`storage::EntryRepository`] seam.

pub mod aggregate_service;
pub mod average_service;
pub mod error;
pub mod grouping_service;
pub mod projection_service;
pub mod salary_service;
pub mod storage;
pub mod summary_service;
pub mod time;

pub use aggregate_service::*;
pub use average_service::*;
pub use error::CoreError;
pub use grouping_service::*;
pub use projection_service::*;
pub use salary_service::*;
pub use summary_service::*;
pub use time::{Clock, FixedClock, SystemClock};
