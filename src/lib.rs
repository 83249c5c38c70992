//! Kill Switch - A process-wide shutdown latch
//! 
//! This library installs SIGINT and SIGTERM handlers that trip a single
//! atomic latch, and provides the main-path tools to observe and report it.

pub mod config;
pub mod error;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::SignalError;
pub use state::{ShutdownLatch, ShutdownReason, ShutdownReport};
pub use tasks::wait_for_shutdown;
pub use utils::signals::{install, is_shutdown_requested, request_shutdown, shutdown_reason};
