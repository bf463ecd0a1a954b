//! The browser controller.
//!
//! [`Browser`] owns the shared repository collection and the drawn view, and
//! is the only thing that changes them. Loading, sorting, searching and
//! toggling all go through it.

pub mod model;

use std::path::Path;

use tracing::{error, info};

use crate::error::{RepofolioError, Result};
use crate::events::BrowserEvent;
use crate::loader::load_catalog;
use crate::query::SortOrder;
use crate::render::{Element, PageControls, ProjectView, RenderOptions, project_list, render_page};
use crate::types::RepositoryRecord;

pub use model::{BrowserAction, BrowserState, ViewSource, reduce_browser_state};

#[derive(Debug, Default)]
pub struct Browser {
    state: BrowserState,
    options: RenderOptions,
}

impl Browser {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            state: BrowserState::default(),
            options,
        }
    }

    fn apply(&mut self, action: BrowserAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce_browser_state(state, action, &self.options);
    }

    /// Load the catalog at `path` and draw it.
    ///
    /// A failed load is logged and leaves the browser empty; it is never
    /// shown in the view. Returns whether the load succeeded.
    pub async fn load(&mut self, path: &Path) -> bool {
        match load_catalog(path).await {
            Ok(repositories) => {
                info!(
                    "loaded {} repositories from {}",
                    repositories.len(),
                    path.display()
                );
                self.apply(BrowserAction::Loaded(repositories));
                true
            }
            Err(e) => {
                error!("{e}");
                false
            }
        }
    }

    /// Replace the collection with already-parsed records and draw them.
    pub fn load_records(&mut self, repositories: Vec<RepositoryRecord>) {
        self.apply(BrowserAction::Loaded(repositories));
    }

    /// Reorder the collection by the selector value `token` and redraw.
    ///
    /// Unknown tokens leave the order unchanged but still redraw.
    pub fn sort(&mut self, token: &str) {
        self.apply(BrowserAction::ChangeSort(token.to_string()));
    }

    pub fn sort_by(&mut self, order: SortOrder) {
        self.sort(&order.to_string());
    }

    /// Draw the repositories matching `query`; the collection is untouched.
    pub fn search(&mut self, query: &str) {
        self.apply(BrowserAction::UpdateSearch(query.to_string()));
    }

    /// Activate the toggle control of the project at 1-based `position`.
    ///
    /// Projects without a toggle control are left as they are.
    pub fn toggle(&mut self, position: usize) -> Result<()> {
        if position == 0 || position > self.state.view.len() {
            return Err(RepofolioError::ToggleOutOfRange(position));
        }
        self.apply(BrowserAction::ToggleIssues(position - 1));
        Ok(())
    }

    /// Route a UI event to the matching operation.
    pub fn dispatch(&mut self, event: BrowserEvent) -> Result<()> {
        match event {
            BrowserEvent::SortChanged(value) => self.sort(&value),
            BrowserEvent::SearchInput(value) => self.search(&value),
            BrowserEvent::ToggleActivated(position) => self.toggle(position)?,
        }
        Ok(())
    }

    pub fn repositories(&self) -> &[RepositoryRecord] {
        &self.state.repositories
    }

    pub fn view(&self) -> &[ProjectView] {
        &self.state.view
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The `#project-list` element for the current view.
    pub fn list_element(&self) -> Element {
        project_list(&self.state.view, &self.options)
    }

    /// A complete HTML page for the current view.
    pub fn page(&self, title: &str) -> String {
        let controls = PageControls {
            title,
            sort: self.state.sort,
            search: self.state.search_query(),
        };
        render_page(&self.state.view, &self.options, &controls)
    }
}
