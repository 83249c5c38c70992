//! Signal handling for the shutdown latch

use std::sync::atomic::{AtomicBool, Ordering};

use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::SigId;
use tracing::debug;

use crate::{
    error::SignalError,
    state::{ShutdownLatch, ShutdownReason},
};

/// Signals that trip the latch; every other signal keeps its default disposition
pub const SHUTDOWN_SIGNALS: [i32; 2] = [SIGINT, SIGTERM];

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Register SIGINT and SIGTERM handlers that trip the global latch.
///
/// Call once during startup. A second call returns
/// [`SignalError::AlreadyInstalled`] and leaves the handlers untouched.
pub fn install() -> Result<(), SignalError> {
    install_signals(&SHUTDOWN_SIGNALS)
}

fn install_signals(signals: &[i32]) -> Result<(), SignalError> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return Err(SignalError::AlreadyInstalled);
    }

    let mut registered = Vec::with_capacity(signals.len());
    for &signal in signals {
        match register_latch(signal) {
            Ok(id) => registered.push(id),
            Err(e) => {
                // Roll back so no signal is half-handled
                for id in registered {
                    signal_hook::low_level::unregister(id);
                }
                INSTALLED.store(false, Ordering::SeqCst);
                return Err(e);
            }
        }
    }

    debug!("Registered shutdown handlers for {:?}", signals);
    Ok(())
}

fn register_latch(signal: i32) -> Result<SigId, SignalError> {
    // SAFETY: the action only performs atomic operations on a static latch,
    // which is async-signal-safe.
    unsafe {
        signal_hook::low_level::register(signal, move || {
            ShutdownLatch::global().trigger(signal);
        })
    }
    .map_err(|source| SignalError::Registration {
        signal: ShutdownReason::from_signal(signal),
        source,
    })
}

/// Check if shutdown was requested
pub fn is_shutdown_requested() -> bool {
    ShutdownLatch::global().is_triggered()
}

/// The signal that requested shutdown, if any
pub fn shutdown_reason() -> Option<ShutdownReason> {
    ShutdownLatch::global().reason()
}

/// Trip the global latch as if `signum` had been delivered
pub fn request_shutdown(signum: i32) {
    ShutdownLatch::global().trigger(signum);
}
