use std::fs;
use std::path::PathBuf;

use crate::commands::{ViewOptions, open_browser};
use crate::error::Result;

pub struct RenderCommandOptions<'a> {
    pub view: ViewOptions<'a>,
    /// 1-based positions whose toggle control is activated, in order
    pub expand: Vec<usize>,
    pub output: Option<PathBuf>,
    /// Emit only the `#project-list` element instead of a full page
    pub fragment: bool,
}

/// Render the catalog to HTML
pub async fn cmd_render(options: RenderCommandOptions<'_>) -> Result<()> {
    let (config, mut browser) = open_browser(&options.view).await?;

    for position in &options.expand {
        browser.toggle(*position)?;
    }

    let html = if options.fragment {
        format!("{}\n", browser.list_element().to_html())
    } else {
        browser.page(&config.page_title)
    };

    match &options.output {
        Some(path) => {
            crate::utils::ensure_parent_dir(path)?;
            fs::write(path, html)?;
            tracing::info!("wrote {}", path.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}
