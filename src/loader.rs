//! Catalog loading.

use std::path::Path;

use serde_json::Value;

use crate::error::{RepofolioError, Result};
use crate::types::RepositoryRecord;

/// Parse a catalog document and return its repository list.
///
/// The document must be a JSON object with a `repository` array; anything
/// else in it is ignored.
pub fn parse_catalog(content: &str) -> Result<Vec<RepositoryRecord>> {
    let mut document: Value = serde_json::from_str(content)?;
    let list = document
        .get_mut("repository")
        .map(Value::take)
        .filter(Value::is_array)
        .ok_or(RepofolioError::MissingRepositoryField)?;
    Ok(serde_json::from_value(list)?)
}

/// Read and parse the catalog at `path`.
///
/// Any failure is reported as [`RepofolioError::LoadFailure`].
pub async fn load_catalog(path: &Path) -> Result<Vec<RepositoryRecord>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| RepofolioError::load_failure(path, e.into()))?;
    parse_catalog(&content).map_err(|e| RepofolioError::load_failure(path, e))
}
