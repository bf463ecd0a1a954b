use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepofolioError {
    #[error("failed to load catalog from {}: {source}", .path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: Box<RepofolioError>,
    },

    #[error("catalog document has no 'repository' list")]
    MissingRepositoryField,

    #[error("invalid sort order '{0}' (expected one of: {expected})", expected = crate::query::SortOrder::ALL_STRINGS.join(", "))]
    InvalidSortOrder(String),

    #[error("invalid event '{0}'")]
    InvalidEvent(String),

    #[error("no project at position {0}")]
    ToggleOutOfRange(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl RepofolioError {
    pub fn invalid_sort_order(value: String) -> Self {
        RepofolioError::InvalidSortOrder(value)
    }

    /// Wrap an error raised while reading or parsing the catalog at `path`.
    pub fn load_failure(path: impl Into<PathBuf>, source: RepofolioError) -> Self {
        RepofolioError::LoadFailure {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, RepofolioError>;
