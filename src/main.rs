//! Kill Switch - A process-wide shutdown latch
//! 
//! This is the main entry point for the kill-switch application.

use std::io::IsTerminal;
use tracing::{error, info};

use kill_switch::{
    config::Config,
    state::ShutdownLatch,
    tasks::wait_for_shutdown,
    utils::install,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("kill_switch={}", config.log_level()))
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    // An unregistered handler silently defeats the latch, so this is fatal
    if let Err(e) = install() {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Shutdown latch armed for SIGINT and SIGTERM");

    let latch = ShutdownLatch::global();
    if config.wait {
        wait_for_shutdown(latch, config.poll_interval()).await;
    }

    if config.json {
        println!("{}", latch.report().to_json()?);
    }

    info!("Exiting");
    Ok(())
}
