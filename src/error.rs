//! Error types for signal registration

use thiserror::Error;

use crate::state::ShutdownReason;

/// Errors raised while arming the shutdown latch
#[derive(Debug, Error)]
pub enum SignalError {
    /// The OS refused to install a handler.
    #[error("Failed to register handler for {signal}: {source}")]
    Registration {
        signal: ShutdownReason,
        #[source]
        source: std::io::Error,
    },

    /// `install` was called more than once.
    #[error("Signal handlers are already installed")]
    AlreadyInstalled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn registration_error_names_signal_and_keeps_source() {
        let err = SignalError::Registration {
            signal: ShutdownReason::Terminate,
            source: std::io::Error::other("denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("SIGTERM"));
        assert!(msg.contains("denied"));
        assert!(err.source().is_some());
    }

    #[test]
    fn already_installed_display() {
        assert_eq!(
            SignalError::AlreadyInstalled.to_string(),
            "Signal handlers are already installed"
        );
    }
}
