//! Real SIGTERM delivery to an installed latch.
#![cfg(unix)]

use kill_switch::{install, is_shutdown_requested, shutdown_reason, ShutdownReason};
use signal_hook::consts::SIGTERM;
use signal_hook::low_level::raise;

#[test]
fn terminate_trips_installed_latch() {
    install().expect("failed to install handlers");
    assert!(!is_shutdown_requested());

    raise(SIGTERM).expect("failed to raise SIGTERM");
    assert!(is_shutdown_requested());
    assert_eq!(shutdown_reason(), Some(ShutdownReason::Terminate));

    raise(SIGTERM).expect("failed to raise SIGTERM");
    assert!(is_shutdown_requested());
}
