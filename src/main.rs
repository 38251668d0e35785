mod commands;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calmerge")]
#[command(about = "Merge calendar feeds into one deduplicated .ics file")]
#[command(version)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all feeds and write the merged calendar
    Merge {
        /// Config file (defaults to ~/.config/calmerge/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Feed URL to merge; repeat for several. Replaces configured feeds.
        #[arg(short, long = "feed", value_name = "URL")]
        feeds: Vec<String>,

        /// Title keyword to exclude; repeat for several. Replaces configured keywords.
        #[arg(short, long = "exclude", value_name = "KEYWORD")]
        excludes: Vec<String>,

        /// Where to write the merged calendar
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Per-feed request timeout in seconds
        #[arg(short, long, value_name = "SECS")]
        timeout: Option<u64>,
    },
    /// Write a commented default config file
    Init {
        /// Config file to create (defaults to ~/.config/calmerge/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the config path and effective settings
    Config {
        /// Config file (defaults to ~/.config/calmerge/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(logging::level_for(cli.verbose, cli.quiet))?;

    match cli.command {
        Commands::Merge {
            config,
            feeds,
            excludes,
            output,
            timeout,
        } => {
            let overrides = commands::merge::Overrides {
                feeds,
                excludes,
                output,
                timeout,
            };
            commands::merge::run(config.as_deref(), overrides).await
        }
        Commands::Init { config, force } => commands::init::run(config.as_deref(), force),
        Commands::Config { config } => commands::config::run(config.as_deref()),
    }
}
