#[macro_use]
mod macros;

pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod ingest;
pub mod loader;
pub mod logging;
pub mod query;
pub mod render;
pub mod types;
pub mod utils;

pub use browser::{Browser, BrowserAction, BrowserState, reduce_browser_state};
pub use config::Config;
pub use error::{RepofolioError, Result};
pub use events::BrowserEvent;
pub use loader::{load_catalog, parse_catalog};
pub use query::{SortOrder, filter_repositories, sort_repositories_by};
pub use render::{ProjectView, RenderOptions};
pub use types::{Catalog, CreatedAt, IssueLink, IssueRecord, RepositoryRecord};
