//! Top-level application configuration.
//!
//! Configuration is stored in `repofolio.yaml` (or the file passed with
//! `--config`) and includes:
//! - Location of the catalog document
//! - Issue cap and date format used when drawing
//! - Page title and an optional initial sort order
//!
//! A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::error::{RepofolioError, Result};
use crate::query::SortOrder;
use crate::render::view::DEFAULT_DATE_FORMAT;
use crate::render::{DEFAULT_PAGE_TITLE, RenderOptions};
use crate::types::{DEFAULT_DATA_PATH, DEFAULT_ISSUE_CAP};

pub const DEFAULT_CONFIG_PATH: &str = "repofolio.yaml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog document to load (default: github_projects.json)
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Issues shown per project before "Show More" (default: 5)
    #[serde(default = "default_issue_cap")]
    pub issue_cap: usize,

    /// strftime pattern for creation dates (default: %-m/%-d/%Y)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_page_title")]
    pub page_title: String,

    /// Sort order applied right after loading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<String>,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_issue_cap() -> usize {
    DEFAULT_ISSUE_CAP
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_page_title() -> String {
    DEFAULT_PAGE_TITLE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            issue_cap: default_issue_cap(),
            date_format: default_date_format(),
            page_title: default_page_title(),
            default_sort: None,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or the default location.
    ///
    /// Only an explicitly requested file has to exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        if !path.exists() {
            if required {
                return Err(RepofolioError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// Parse and validate YAML configuration.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml_ng::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.issue_cap == 0 {
            return Err(RepofolioError::Config(
                "issue_cap must be at least 1".to_string(),
            ));
        }

        let sample = Timestamp::UNIX_EPOCH.to_zoned(TimeZone::UTC);
        if let Err(e) = jiff::fmt::strtime::format(&self.date_format, &sample) {
            return Err(RepofolioError::Config(format!(
                "invalid date_format '{}': {e}",
                self.date_format
            )));
        }

        self.initial_sort()?;
        Ok(())
    }

    /// The configured initial sort order, if any.
    pub fn initial_sort(&self) -> Result<Option<SortOrder>> {
        self.default_sort
            .as_deref()
            .map(str::parse::<SortOrder>)
            .transpose()
            .map_err(|e| RepofolioError::Config(e.to_string()))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            issue_cap: self.issue_cap,
            date_format: self.date_format.clone(),
        }
    }
}
