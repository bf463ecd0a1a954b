//! Substring search over repository names and descriptions.

use crate::types::RepositoryRecord;

/// Whether `repo` matches `query` (already lowercased).
fn matches_lowercase(repo: &RepositoryRecord, query: &str) -> bool {
    if repo.name.to_lowercase().contains(query) {
        return true;
    }
    repo.description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(query))
}

/// Whether a repository's name or description contains `query`, ignoring case.
///
/// Repositories without a description are matched on name only.
pub fn repository_matches(repo: &RepositoryRecord, query: &str) -> bool {
    matches_lowercase(repo, &query.to_lowercase())
}

/// Filter repositories by a case-insensitive substring query.
///
/// The input order is preserved and the input is left untouched. An empty
/// query keeps every repository.
pub fn filter_repositories(repos: &[RepositoryRecord], query: &str) -> Vec<RepositoryRecord> {
    let query = query.to_lowercase();
    repos
        .iter()
        .filter(|repo| matches_lowercase(repo, &query))
        .cloned()
        .collect()
}
