//! pocket-config
//!
//! Persistent user preferences: salary labels, declared salary, category
//! lists and report windows. Owns the Config data structure plus disk
//! persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
