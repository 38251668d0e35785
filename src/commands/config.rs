use std::path::Path;

use anyhow::Result;
use calmerge_core::MergeConfig;
use owo_colors::OwoColorize;

pub fn run(config_path: Option<&Path>) -> Result<()> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => MergeConfig::config_path().map_err(|e| anyhow::anyhow!(e))?,
    };
    let config = if path.exists() {
        MergeConfig::load(Some(&path)).map_err(|e| anyhow::anyhow!(e))?
    } else {
        MergeConfig::default()
    };

    println!("{}", "Paths".bold());
    if path.exists() {
        println!("  Config:   {}", path.display());
    } else {
        println!("  Config:   {} {}", path.display(), "(not found, using defaults)".dimmed());
    }
    println!("  Output:   {}", config.output.display());

    println!("\n{}", "Feeds".bold());
    if config.feeds.is_empty() {
        println!("  {}", "none".dimmed());
    }
    for feed in &config.feeds {
        println!("  {}", feed);
    }

    println!("\n{}", "Excluded keywords".bold());
    let filter = config.keyword_filter();
    if filter.is_empty() {
        println!("  {}", "none".dimmed());
    }
    for keyword in filter.keywords() {
        println!("  {}", keyword);
    }

    println!("\n{}", "Calendar".bold());
    println!("  PRODID:   {}", config.product_id);
    if let Some(ref name) = config.calendar_name {
        println!("  Name:     {}", name);
    }
    println!("  Timeout:  {}s", config.timeout_secs);

    Ok(())
}
