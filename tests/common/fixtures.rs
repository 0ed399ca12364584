//! Deterministic clocks and throwaway storage

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use recipe_book::{ClockTicker, Database, ManualClock, SqliteSlot};
use tempfile::TempDir;

/// Display text of [`fixed_clock`]
pub const FIXED_DISPLAY: &str = "5, March 2024 - 9:7:3";

/// A clock stopped at 2024-03-05 09:07:03
pub fn fixed_clock() -> Arc<ManualClock> {
    let naive = NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(9, 7, 3))
        .expect("valid fixed time");
    Arc::new(ManualClock::at_naive(naive))
}

/// Ticker over [`fixed_clock`]; needs a tokio runtime
pub fn fixed_ticker() -> ClockTicker {
    ClockTicker::spawn(fixed_clock(), Duration::from_secs(1))
}

/// A database file inside a fresh temp directory
pub struct TestStore {
    pub dir: TempDir,
    pub db: Database,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db = Database::open(dir.path().join("recipe-book.db")).expect("Failed to open database");
        Self { dir, db }
    }

    pub fn slot(&self) -> SqliteSlot {
        SqliteSlot::new(self.db.connection())
    }

    /// Open the same file again through a new connection
    pub fn reopen(&self) -> SqliteSlot {
        let db = Database::open(self.dir.path().join("recipe-book.db"))
            .expect("Failed to reopen database");
        SqliteSlot::new(db.connection())
    }
}
