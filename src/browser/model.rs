//! Browser state and its reducer.
//!
//! State (the shared repository collection plus the drawn view) is kept apart
//! from the effects that produce actions, so every transition can be tested
//! without touching the filesystem.

use std::str::FromStr;

use crate::query::{SortOrder, filter_repositories, sort_repositories_by};
use crate::render::{ProjectView, RenderOptions, build_view};
use crate::types::RepositoryRecord;

/// What the drawn view was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewSource {
    /// The whole collection in its current order.
    #[default]
    Full,
    /// The subset matching a search query, in collection order.
    Search(String),
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    /// All repositories, in the current sort order
    pub repositories: Vec<RepositoryRecord>,
    /// Last sort order applied to the collection
    pub sort: Option<SortOrder>,
    /// Currently drawn projects
    pub view: Vec<ProjectView>,
    pub source: ViewSource,
}

impl BrowserState {
    pub fn search_query(&self) -> Option<&str> {
        match &self.source {
            ViewSource::Full => None,
            ViewSource::Search(q) => Some(q.as_str()),
        }
    }
}

/// All possible actions on the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    /// Replace the collection with freshly loaded records and draw it
    Loaded(Vec<RepositoryRecord>),
    /// Sort selector changed; carries the selector's raw value
    ChangeSort(String),
    /// Search field changed; carries the field's raw value
    UpdateSearch(String),
    /// Toggle control of the project at this 0-based view index
    ToggleIssues(usize),
}

/// Pure function: apply action to state (reducer pattern)
///
/// Every action except `ToggleIssues` ends in a full redraw, which discards
/// any expand/collapse state of the previous view.
pub fn reduce_browser_state(
    mut state: BrowserState,
    action: BrowserAction,
    options: &RenderOptions,
) -> BrowserState {
    match action {
        BrowserAction::Loaded(repositories) => {
            state.repositories = repositories;
            state.sort = None;
            redraw_full(&mut state, options);
        }
        BrowserAction::ChangeSort(value) => {
            match SortOrder::from_str(&value) {
                Ok(order) => {
                    sort_repositories_by(&mut state.repositories, order);
                    state.sort = Some(order);
                }
                Err(_) => {
                    tracing::debug!("ignoring unknown sort order '{value}'");
                }
            }
            redraw_full(&mut state, options);
        }
        BrowserAction::UpdateSearch(query) => {
            let filtered = filter_repositories(&state.repositories, &query);
            state.view = build_view(&filtered, options);
            state.source = ViewSource::Search(query);
        }
        BrowserAction::ToggleIssues(index) => match state.view.get_mut(index) {
            Some(project) => {
                if !project.issue_list.toggle() {
                    tracing::debug!(
                        "project '{}' has no toggle control",
                        project.repository.name
                    );
                }
            }
            None => tracing::debug!("no project at view index {index}"),
        },
    }
    state
}

fn redraw_full(state: &mut BrowserState, options: &RenderOptions) {
    state.view = build_view(&state.repositories, options);
    state.source = ViewSource::Full;
}
