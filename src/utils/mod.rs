//! Utility functions module
//! 
//! This module contains the signal registration used by the entry point.

pub mod signals;

// Re-export main functions
pub use signals::{install, is_shutdown_requested, request_shutdown, shutdown_reason};
