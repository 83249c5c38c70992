//! Process-wide shutdown latch
//!
//! The latch is written from signal handlers, so every operation here is a
//! single lock-free atomic access and never allocates.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use super::{ShutdownReason, ShutdownReport};

/// Marker stored in `reason` while no signal has been recorded
const NO_SIGNAL: i32 = 0;

/// The process-lifetime latch tripped by SIGINT/SIGTERM
static GLOBAL_LATCH: ShutdownLatch = ShutdownLatch::new();

/// Single-transition shutdown flag with the signal that tripped it
#[derive(Debug)]
pub struct ShutdownLatch {
    /// False until a shutdown is requested, never reset
    triggered: AtomicBool,
    /// First signal number recorded, `NO_SIGNAL` until then
    reason: AtomicI32,
}

impl ShutdownLatch {
    /// Create an untripped latch
    pub const fn new() -> Self {
        Self {
            triggered: AtomicBool::new(false),
            reason: AtomicI32::new(NO_SIGNAL),
        }
    }

    /// The latch observed by `is_shutdown_requested` and the installed handlers
    pub fn global() -> &'static ShutdownLatch {
        &GLOBAL_LATCH
    }

    /// Trip the latch on behalf of `signum`.
    ///
    /// Async-signal-safe. The first recorded signal wins; later calls only
    /// re-store `true`.
    pub fn trigger(&self, signum: i32) {
        let _ = self
            .reason
            .compare_exchange(NO_SIGNAL, signum, Ordering::AcqRel, Ordering::Acquire);
        // Publishes the reason stored above to readers that observe the flag
        self.triggered.store(true, Ordering::Release);
    }

    /// Whether a shutdown has been requested
    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::Acquire)
    }

    /// The signal that tripped the latch, if it has been tripped
    pub fn reason(&self) -> Option<ShutdownReason> {
        if !self.is_triggered() {
            return None;
        }
        match self.reason.load(Ordering::Acquire) {
            NO_SIGNAL => None,
            signum => Some(ShutdownReason::from_signal(signum)),
        }
    }

    /// Snapshot the latch for reporting. Not for use inside a signal handler.
    pub fn report(&self) -> ShutdownReport {
        ShutdownReport::new(self.is_triggered(), self.reason())
    }
}

impl Default for ShutdownLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signal_hook::consts::{SIGINT, SIGTERM};

    #[test]
    fn new_latch_is_not_triggered() {
        let latch = ShutdownLatch::new();
        assert!(!latch.is_triggered());
        assert_eq!(latch.reason(), None);
    }

    #[test]
    fn trigger_sets_flag_and_reason() {
        let latch = ShutdownLatch::new();
        latch.trigger(SIGINT);
        assert!(latch.is_triggered());
        assert_eq!(latch.reason(), Some(ShutdownReason::Interrupt));
    }

    #[test]
    fn first_signal_wins() {
        let latch = ShutdownLatch::new();
        latch.trigger(SIGTERM);
        latch.trigger(SIGINT);
        latch.trigger(SIGINT);
        assert!(latch.is_triggered());
        assert_eq!(latch.reason(), Some(ShutdownReason::Terminate));
    }

    #[test]
    fn trigger_without_signal_number_has_no_reason() {
        let latch = ShutdownLatch::new();
        latch.trigger(NO_SIGNAL);
        assert!(latch.is_triggered());
        assert_eq!(latch.reason(), None);

        // A later real signal can still fill in the reason
        latch.trigger(SIGTERM);
        assert_eq!(latch.reason(), Some(ShutdownReason::Terminate));
    }

    #[test]
    fn trigger_is_visible_across_threads() {
        let latch = std::sync::Arc::new(ShutdownLatch::new());
        let writer = std::sync::Arc::clone(&latch);
        std::thread::spawn(move || writer.trigger(SIGTERM))
            .join()
            .unwrap();
        assert!(latch.is_triggered());
        assert_eq!(latch.reason(), Some(ShutdownReason::Terminate));
    }

    #[test]
    fn report_reflects_latch() {
        let latch = ShutdownLatch::new();
        assert!(!latch.report().shutdown_requested);

        latch.trigger(SIGINT);
        let report = latch.report();
        assert!(report.shutdown_requested);
        assert_eq!(report.signal.as_deref(), Some("SIGINT"));
        assert_eq!(report.signal_number, Some(SIGINT));
    }
}
