use std::path::Path;

use anyhow::Result;
use calmerge_core::MergeConfig;
use owo_colors::OwoColorize;

pub fn run(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => MergeConfig::config_path().map_err(|e| anyhow::anyhow!(e))?,
    };

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}\n\
            Use `calmerge init --force` to overwrite it.",
            path.display()
        );
    }

    MergeConfig::create_default_config(&path).map_err(|e| anyhow::anyhow!(e))?;

    println!("Created {}", path.display().to_string().green());
    println!("\nAdd your feeds and keywords, then run `calmerge merge`.");

    Ok(())
}
