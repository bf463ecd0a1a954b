//! Catalog record types.
//!
//! A catalog is the `{ "repository": [...] }` document produced by `ingest`
//! and consumed by the loader. Two issue layouts exist in the wild: a single
//! `issues` list, and an older split into `issues_with_links` and
//! `issues_without_links`. Both deserialize into the same
//! [`RepositoryRecord`], with the split lists concatenated (links first).

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

/// Default location of the catalog document, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "github_projects.json";

/// Default location of the skipped-repository report written by `ingest`.
pub const DEFAULT_SKIPPED_PATH: &str = "skipped_repos.json";

/// Number of issues shown before the list has to be expanded.
pub const DEFAULT_ISSUE_CAP: usize = 5;

pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_TITLE: &str = "No title";

/// Top-level catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub repository: Vec<RepositoryRecord>,
}

/// A link extracted from an issue body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLink {
    pub url: String,
    pub text: String,
}

/// One issue shown under a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<IssueLink>,
    #[serde(default)]
    pub description: Option<String>,
}

impl IssueRecord {
    /// Title to display, falling back when absent or empty.
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(NO_TITLE)
    }

    /// Description, only when it has content.
    pub fn display_description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }
}

/// Creation time as written in the catalog.
///
/// The raw text is preserved; [`CreatedAt::timestamp`] interprets it as an
/// RFC 3339 timestamp or a bare `YYYY-MM-DD` date at UTC midnight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatedAt(String);

impl CreatedAt {
    pub fn new(raw: impl Into<String>) -> Self {
        CreatedAt(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn timestamp(&self) -> Option<Timestamp> {
        let raw = self.0.trim();
        if let Ok(ts) = raw.parse::<Timestamp>() {
            return Some(ts);
        }
        let date: Date = raw.parse().ok()?;
        date.to_zoned(TimeZone::UTC).ok().map(|z| z.timestamp())
    }
}

/// One repository entry of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRepositoryRecord")]
pub struct RepositoryRecord {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub created_at: CreatedAt,
    pub issues: Vec<IssueRecord>,
}

impl RepositoryRecord {
    /// Description to display, falling back when absent or empty.
    pub fn display_description(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(NO_DESCRIPTION)
    }
}

/// Wire shape accepting both issue layouts.
#[derive(Deserialize)]
struct RawRepositoryRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    created_at: CreatedAt,
    #[serde(default, deserialize_with = "null_as_default")]
    issues: Vec<IssueRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    issues_with_links: Vec<IssueRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    issues_without_links: Vec<IssueRecord>,
}

impl From<RawRepositoryRecord> for RepositoryRecord {
    fn from(raw: RawRepositoryRecord) -> Self {
        let mut issues = raw.issues;
        issues.extend(raw.issues_with_links);
        issues.extend(raw.issues_without_links);
        RepositoryRecord {
            name: raw.name,
            url: raw.url,
            description: raw.description,
            created_at: raw.created_at,
            issues,
        }
    }
}

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
