//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::tasks::DEFAULT_POLL_INTERVAL;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "kill-switch")]
#[command(about = "Arm a shutdown latch tripped by SIGINT and SIGTERM")]
#[command(version)]
pub struct Config {
    /// Block until SIGINT or SIGTERM arrives instead of exiting after setup
    #[arg(short, long)]
    pub wait: bool,

    /// Print a JSON shutdown report on exit
    #[arg(long)]
    pub json: bool,

    /// How often the latch is polled while waiting, in milliseconds
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_millis() as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Latch polling period
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
