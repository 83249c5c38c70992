//! Main-path watcher for the shutdown latch

use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::state::{ShutdownLatch, ShutdownReason};

/// Default polling period used by the entry point
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Poll `latch` until it is tripped, then report the signal.
///
/// The diagnostic line is written here rather than in the signal handler,
/// since the handler must not take the locks that output requires.
pub async fn wait_for_shutdown(
    latch: &ShutdownLatch,
    poll_interval: Duration,
) -> Option<ShutdownReason> {
    debug!("Watching shutdown latch every {:?}", poll_interval);

    let mut ticker = interval(poll_interval.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if latch.is_triggered() {
            break;
        }
    }

    let reason = latch.reason();
    match reason {
        Some(reason) => info!("Received signal: {}", reason.signal_number()),
        None => info!("Shutdown requested without a signal"),
    }
    reason
}
