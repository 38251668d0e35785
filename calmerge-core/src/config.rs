//! calmerge configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarMetadata;
use crate::error::{CalMergeError, CalMergeResult};
use crate::filter::KeywordFilter;

static DEFAULT_OUTPUT: &str = "merged_calendar.ics";
static DEFAULT_PRODUCT_ID: &str = "-//calmerge//Merged Calendar//EN";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_product_id() -> String {
    DEFAULT_PRODUCT_ID.to_string()
}

/// Configuration at ~/.config/calmerge/config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
    /// Feed URLs, merged in this order.
    #[serde(default)]
    pub feeds: Vec<String>,

    /// Events whose title contains one of these (case-insensitive) are dropped.
    #[serde(default)]
    pub exclude_keywords: Vec<String>,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_product_id")]
    pub product_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_name: Option<String>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        MergeConfig {
            feeds: Vec::new(),
            exclude_keywords: Vec::new(),
            output: default_output(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            product_id: default_product_id(),
            calendar_name: None,
        }
    }
}

impl MergeConfig {
    pub fn config_path() -> CalMergeResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalMergeError::Config("Could not determine config directory".into()))?
            .join("calmerge");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config at `path`, or at the default location when `None`.
    ///
    /// A missing default file means "all defaults"; a missing file that was
    /// asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> CalMergeResult<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path()?, false),
        };

        if !path.exists() {
            if explicit {
                return Err(CalMergeError::Config(format!(
                    "Config file not found at {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            CalMergeError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        Self::from_toml(&contents).map_err(|e| match e {
            CalMergeError::Config(msg) => {
                CalMergeError::Config(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    pub fn from_toml(contents: &str) -> CalMergeResult<Self> {
        let config: MergeConfig =
            toml::from_str(contents).map_err(|e| CalMergeError::Config(e.to_string()))?;

        if config.timeout_secs == 0 {
            return Err(CalMergeError::Config("timeout_secs must be greater than 0".into()));
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn keyword_filter(&self) -> KeywordFilter {
        KeywordFilter::new(self.exclude_keywords.iter().cloned())
    }

    pub fn metadata(&self) -> CalendarMetadata {
        CalendarMetadata {
            product_id: self.product_id.clone(),
            name: self.calendar_name.clone(),
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalMergeResult<()> {
        let contents = format!(
            "\
# calmerge configuration

# Calendar feeds to merge, in order (http, https or webcal):
# feeds = [
#     \"https://example.org/timetable/group-a.ics\",
#     \"webcal://example.org/timetable/group-b.ics\",
# ]

# Drop events whose title contains any of these (case-insensitive):
# exclude_keywords = [\"englisch\", \"thermodynamik\"]

# Where the merged calendar is written:
# output = \"{}\"

# Per-feed request timeout in seconds:
# timeout_secs = {}

# PRODID of the merged calendar:
# product_id = \"{}\"

# Display name (X-WR-CALNAME) of the merged calendar:
# calendar_name = \"Timetable\"
",
            DEFAULT_OUTPUT, DEFAULT_TIMEOUT_SECS, DEFAULT_PRODUCT_ID
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalMergeError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalMergeError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
