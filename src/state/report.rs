//! Shutdown report structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ShutdownReason;

/// Snapshot of the latch taken from the main execution path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShutdownReport {
    pub shutdown_requested: bool,
    /// Signal name, e.g. `SIGTERM`
    pub signal: Option<String>,
    pub signal_number: Option<i32>,
    /// When the main path read the latch, not when the signal arrived
    pub observed_at: DateTime<Utc>,
}

impl ShutdownReport {
    /// Create a report stamped with the current time
    pub fn new(shutdown_requested: bool, reason: Option<ShutdownReason>) -> Self {
        Self {
            shutdown_requested,
            signal: reason.map(|r| r.signal_name()),
            signal_number: reason.map(|r| r.signal_number()),
            observed_at: Utc::now(),
        }
    }

    /// Render the report as a single JSON line
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
