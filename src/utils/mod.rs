use std::fs;
use std::path::Path;

use crate::error::{RepofolioError, Result};

/// Ensure the parent directory of a path exists, creating it if necessary.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            RepofolioError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create directory at {}: {}", parent.display(), e),
            ))
        })?;
    }
    Ok(())
}
