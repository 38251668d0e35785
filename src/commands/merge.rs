use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calmerge_core::{HttpFetcher, MergeConfig, merge_feeds};
use owo_colors::OwoColorize;

use crate::render::Render;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub feeds: Vec<String>,
    pub excludes: Vec<String>,
    pub output: Option<PathBuf>,
    pub timeout: Option<u64>,
}

impl Overrides {
    pub fn apply(self, config: &mut MergeConfig) {
        if !self.feeds.is_empty() {
            config.feeds = self.feeds;
        }
        if !self.excludes.is_empty() {
            config.exclude_keywords = self.excludes;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
    }
}

pub async fn run(config_path: Option<&Path>, overrides: Overrides) -> Result<()> {
    let mut config = MergeConfig::load(config_path).map_err(|e| anyhow::anyhow!(e))?;
    overrides.apply(&mut config);

    if config.feeds.is_empty() {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => MergeConfig::config_path().map_err(|e| anyhow::anyhow!(e))?,
        };
        anyhow::bail!(
            "No feeds configured.\n\n\
            Add feeds to {} (create it with `calmerge init`),\n\
            or pass them directly:\n  \
            calmerge merge --feed https://example.org/timetable.ics",
            path.display()
        );
    }
    if config.timeout_secs == 0 {
        anyhow::bail!("--timeout must be greater than 0");
    }

    let fetcher = HttpFetcher::new(config.timeout()).context("Failed to create HTTP client")?;
    let filter = config.keyword_filter();

    let outcome = merge_feeds(&fetcher, &config.feeds, &filter, config.metadata()).await;

    outcome
        .calendar
        .write_to(&config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    println!("\n{}", outcome.report.render());
    println!(
        "Calendar saved to {}",
        config.output.display().to_string().bold()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = MergeConfig {
            feeds: vec!["https://a.example.org/a.ics".into()],
            exclude_keywords: vec!["englisch".into()],
            ..MergeConfig::default()
        };

        Overrides {
            feeds: vec!["https://b.example.org/b.ics".into()],
            excludes: vec![],
            output: Some(PathBuf::from("out.ics")),
            timeout: Some(5),
        }
        .apply(&mut config);

        assert_eq!(config.feeds, vec!["https://b.example.org/b.ics".to_string()]);
        assert_eq!(config.exclude_keywords, vec!["englisch".to_string()]);
        assert_eq!(config.output, PathBuf::from("out.ics"));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = MergeConfig::default();
        let before = config.clone();

        Overrides::default().apply(&mut config);

        assert_eq!(config, before);
    }

    #[tokio::test]
    async fn test_run_without_feeds_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "exclude_keywords = [\"englisch\"]\n").unwrap();

        let err = run(Some(&path), Overrides::default()).await.unwrap_err();
        assert!(err.to_string().contains("No feeds configured"));
    }
}
