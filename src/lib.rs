#![doc(test(attr(deny(warnings))))]

//! Pocket Core turns raw expense, income and savings entries into monthly
//! totals, category breakdowns, averages and a salary-aware twelve-month
//! projection.

pub mod errors;
pub mod tracker;
pub mod utils;

pub use errors::PocketError;
pub use tracker::{Dashboard, FinanceTracker};

pub use pocket_config as config;
pub use pocket_domain as domain;
pub use pocket_services as services;
pub use pocket_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pocket Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
