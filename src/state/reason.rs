//! Reason a shutdown was requested

use std::fmt;

use signal_hook::consts::{SIGINT, SIGTERM};

/// The signal that tripped the shutdown latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// Interrupt from the terminal (SIGINT)
    Interrupt,
    /// Generic termination request (SIGTERM)
    Terminate,
    /// Any other signal number recorded through `request_shutdown`
    Other(i32),
}

impl ShutdownReason {
    /// Map a raw signal number to a reason
    pub fn from_signal(signum: i32) -> Self {
        match signum {
            SIGINT => Self::Interrupt,
            SIGTERM => Self::Terminate,
            other => Self::Other(other),
        }
    }

    /// Raw signal number for this reason
    pub fn signal_number(&self) -> i32 {
        match self {
            Self::Interrupt => SIGINT,
            Self::Terminate => SIGTERM,
            Self::Other(signum) => *signum,
        }
    }

    /// Conventional signal name, e.g. `SIGINT`
    pub fn signal_name(&self) -> String {
        match self {
            Self::Interrupt => "SIGINT".to_string(),
            Self::Terminate => "SIGTERM".to_string(),
            Self::Other(signum) => format!("signal {}", signum),
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.signal_name(), self.signal_number())
    }
}
