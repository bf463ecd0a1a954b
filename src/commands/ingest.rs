use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::ingest::{IngestSource, ingest};
use crate::utils::ensure_parent_dir;

pub struct IngestOptions {
    pub source: IngestSource,
    pub output: PathBuf,
    pub skipped: PathBuf,
}

/// Build the catalog document from a saved GitHub export
pub fn cmd_ingest(options: IngestOptions) -> Result<()> {
    let (catalog, skipped) = ingest(&options.source)?;

    ensure_parent_dir(&options.output)?;
    fs::write(&options.output, serde_json::to_string_pretty(&catalog)?)?;

    ensure_parent_dir(&options.skipped)?;
    fs::write(&options.skipped, serde_json::to_string_pretty(&skipped)?)?;

    println!(
        "Wrote {} repositories to {}",
        catalog.repository.len(),
        options.output.display()
    );
    if !skipped.skipped_repositories.is_empty() {
        println!(
            "{} repositories without issues listed in {}",
            skipped.skipped_repositories.len(),
            options.skipped.display()
        );
    }
    Ok(())
}
