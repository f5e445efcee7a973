#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use pocket_core::{
    config::Config,
    services::{storage::InMemoryRepository, FixedClock},
    FinanceTracker,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates a tracker backed by JSON files in a unique temporary directory.
pub fn json_tracker(today: NaiveDate) -> (FinanceTracker, std::path::PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let tracker = FinanceTracker::open(base.clone())
        .expect("open tracker")
        .with_clock(Box::new(FixedClock::on(today)));
    (tracker, base)
}

/// Creates a tracker that keeps entries in memory.
pub fn memory_tracker(today: NaiveDate) -> FinanceTracker {
    FinanceTracker::new(Box::new(InMemoryRepository::new()), Config::default())
        .with_clock(Box::new(FixedClock::on(today)))
}
