mod browse;
mod ingest;
mod ls;
mod render;

pub use browse::cmd_browse;
pub use ingest::{IngestOptions, cmd_ingest};
pub use ls::cmd_ls;
pub use render::{RenderCommandOptions, cmd_render};

use std::path::Path;

use crate::browser::Browser;
use crate::config::Config;
use crate::error::Result;
use crate::query::SortOrder;

/// Options shared by every command that shows the catalog.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions<'a> {
    pub config_path: Option<&'a Path>,
    pub data_path: Option<&'a Path>,
    pub sort: Option<SortOrder>,
    pub search: Option<&'a str>,
}

/// Load configuration and the catalog, then apply the initial sort and
/// search. A catalog that fails to load yields an empty browser.
pub(crate) async fn open_browser(options: &ViewOptions<'_>) -> Result<(Config, Browser)> {
    let config = Config::load(options.config_path)?;
    let mut browser = Browser::new(config.render_options());

    let data_path = options.data_path.unwrap_or(config.data_path.as_path());
    if browser.load(data_path).await {
        if let Some(order) = options.sort.or(config.initial_sort()?) {
            browser.sort_by(order);
        }
        if let Some(query) = options.search {
            browser.search(query);
        }
    }

    Ok((config, browser))
}
