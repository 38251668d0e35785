//! Tracing setup: plain progress lines on stdout.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
pub fn init(default_level: Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = default_level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,calmerge={0},calmerge_core={0}", level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_level(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
