//! Build a catalog from a saved GitHub API export.
//!
//! The export is a repository listing (the JSON array returned by
//! `GET /users/{user}/repos`) plus, optionally, one issue listing per
//! repository (`GET /repos/{owner}/{repo}/issues?state=all`) stored as
//! `<issues_dir>/<repo name>.json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::{RepofolioError, Result};
use crate::types::{Catalog, CreatedAt, IssueLink, IssueRecord, NO_TITLE, RepositoryRecord};

/// Fallback description for exported repositories and issues.
const NO_EXPORT_DESCRIPTION: &str = "No description";

static MARKDOWN_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(.*?)\]\((.*?)\)").expect("markdown link regex should be valid")
});

/// Report of repositories that ended up without issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkippedRepositories {
    pub skipped_repositories: Vec<String>,
}

/// Where to read an export from.
#[derive(Debug, Clone)]
pub struct IngestSource {
    pub repos_path: PathBuf,
    pub issues_dir: Option<PathBuf>,
    pub include_issues: bool,
}

/// Extract `[text](url)` links from a markdown body, in order.
pub fn extract_markdown_links(body: &str) -> Vec<IssueLink> {
    MARKDOWN_LINK_RE
        .captures_iter(body)
        .map(|c| IssueLink {
            text: c[1].to_string(),
            url: c[2].to_string(),
        })
        .collect()
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Convert one GitHub issue object into an issue record.
pub fn issue_from_github(issue: &Value) -> IssueRecord {
    let title = str_field(issue, "title").unwrap_or(NO_TITLE);
    let number = match issue.get("number") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => "No number".to_string(),
    };
    let body = str_field(issue, "body");

    IssueRecord {
        title: Some(format!("{title} #{number}")),
        links: body.map(extract_markdown_links).unwrap_or_default(),
        description: Some(
            body.filter(|b| !b.is_empty())
                .and_then(|b| b.split('\n').next())
                .unwrap_or(NO_EXPORT_DESCRIPTION)
                .to_string(),
        ),
    }
}

/// Order issues for display: those with links first, then the rest.
pub fn partition_issues(issues: &[Value]) -> Vec<IssueRecord> {
    let (mut with_links, without_links): (Vec<_>, Vec<_>) = issues
        .iter()
        .map(issue_from_github)
        .partition(|issue| !issue.links.is_empty());
    with_links.extend(without_links);
    with_links
}

/// Convert one GitHub repository object. Returns `None` when it has no
/// usable name.
pub fn repository_from_github(repo: &Value, issues: Vec<IssueRecord>) -> Option<RepositoryRecord> {
    let name = str_field(repo, "name")?;
    Some(RepositoryRecord {
        name: name.to_string(),
        url: str_field(repo, "html_url").unwrap_or("#").to_string(),
        description: match repo.get("description") {
            None => Some(NO_EXPORT_DESCRIPTION.to_string()),
            Some(value) => value.as_str().map(str::to_string),
        },
        created_at: CreatedAt::new(str_field(repo, "created_at").unwrap_or_default()),
        issues,
    })
}

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        RepofolioError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read {}: {e}", path.display()),
        ))
    })?;
    Ok(serde_json::from_str(&content)?)
}

fn read_issues(issues_dir: &Path, repo_name: &str) -> Result<Vec<Value>> {
    let path = issues_dir.join(format!("{repo_name}.json"));
    if !path.exists() {
        return Ok(Vec::new());
    }
    match read_json(&path)? {
        Value::Array(items) => Ok(items),
        _ => Err(RepofolioError::Other(format!(
            "{} is not a JSON array of issues",
            path.display()
        ))),
    }
}

/// Build a catalog from already-parsed export data.
///
/// `issues_for` is asked for the raw issues of each named repository; it is
/// only called when issues are included.
pub fn build_catalog<F>(
    repos: &[Value],
    include_issues: bool,
    mut issues_for: F,
) -> Result<(Catalog, SkippedRepositories)>
where
    F: FnMut(&str) -> Result<Vec<Value>>,
{
    let mut catalog = Catalog::default();
    let mut skipped = SkippedRepositories::default();

    for repo in repos {
        let Some(name) = str_field(repo, "name") else {
            continue;
        };

        let issues = if include_issues {
            partition_issues(&issues_for(name)?)
        } else {
            Vec::new()
        };

        if include_issues && issues.is_empty() {
            skipped.skipped_repositories.push(name.to_string());
        }

        if let Some(record) = repository_from_github(repo, issues) {
            catalog.repository.push(record);
        }
    }

    Ok((catalog, skipped))
}

/// Read an export from disk and build the catalog.
pub fn ingest(source: &IngestSource) -> Result<(Catalog, SkippedRepositories)> {
    let repos = match read_json(&source.repos_path)? {
        Value::Array(items) => items,
        _ => {
            return Err(RepofolioError::Other(format!(
                "{} is not a JSON array of repositories",
                source.repos_path.display()
            )));
        }
    };

    let include_issues = source.include_issues && source.issues_dir.is_some();
    if source.include_issues && source.issues_dir.is_none() {
        tracing::warn!("--include-issues given without an issues directory; skipping issues");
    }

    let (catalog, skipped) = build_catalog(&repos, include_issues, |name| match &source.issues_dir {
        Some(dir) => read_issues(dir, name),
        None => Ok(Vec::new()),
    })?;

    tracing::info!(
        "ingested {} repositories ({} without issues)",
        catalog.repository.len(),
        skipped.skipped_repositories.len()
    );
    Ok((catalog, skipped))
}
