//! Shared test utilities for creating test environments.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::Tracker;
use std::path::Path;
use tempfile::TempDir;

pub(crate) const TEST_PIN: &str = "4321";

/// Test environment with a temporary data home. Holds the TempDir to keep
/// the directory alive for the duration of the test.
pub(crate) struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    pub(crate) fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub(crate) fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Opens a tracker on this environment's home and gets it past the PIN
    /// gate, creating the test PIN on first use.
    pub(crate) async fn unlocked_tracker(&self) -> Tracker {
        let mut tracker = Tracker::open(self.home()).await.unwrap();
        if tracker.is_pin_configured() {
            tracker.unlock(TEST_PIN).await.unwrap();
        } else {
            tracker.create_pin(TEST_PIN, TEST_PIN).await.unwrap();
        }
        tracker
    }
}
