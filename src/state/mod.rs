//! State management module
//! 
//! This module contains the shutdown latch and the types used to report it.

pub mod latch;
pub mod reason;
pub mod report;

// Re-export main types
pub use latch::ShutdownLatch;
pub use reason::ShutdownReason;
pub use report::ShutdownReport;
