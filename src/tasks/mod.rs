//! Background tasks module
//! 
//! This module contains the watcher that observes the shutdown latch.

pub mod shutdown_watch;

// Re-export main functions
pub use shutdown_watch::{wait_for_shutdown, DEFAULT_POLL_INTERVAL};
