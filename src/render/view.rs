//! Rendered view state.
//!
//! A view is rebuilt from scratch on every redraw; nothing is carried over
//! from the previous one, so every issue list starts collapsed.

use crate::types::{DEFAULT_ISSUE_CAP, IssueRecord, RepositoryRecord};

pub const SHOW_MORE: &str = "Show More";
pub const SHOW_LESS: &str = "Show Less";

/// Default strftime pattern for the creation date line.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Knobs that affect how records are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Issues shown before the list has to be expanded.
    pub issue_cap: usize,
    pub date_format: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            issue_cap: DEFAULT_ISSUE_CAP,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Expand/collapse state of one repository's issue list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueListView {
    pub total: usize,
    pub cap: usize,
    pub expanded: bool,
}

impl IssueListView {
    pub fn new(total: usize, cap: usize) -> Self {
        Self {
            total,
            cap,
            expanded: false,
        }
    }

    /// Whether an issues container is drawn at all.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Whether the list is long enough to need a toggle control.
    pub fn has_toggle(&self) -> bool {
        self.total > self.cap
    }

    pub fn visible_count(&self) -> usize {
        if self.expanded {
            self.total
        } else {
            self.total.min(self.cap)
        }
    }

    /// Label of the toggle control, if there is one.
    pub fn toggle_label(&self) -> Option<&'static str> {
        if !self.has_toggle() {
            None
        } else if self.expanded {
            Some(SHOW_LESS)
        } else {
            Some(SHOW_MORE)
        }
    }

    /// Flip the expanded flag. Returns false when there is no toggle.
    pub fn toggle(&mut self) -> bool {
        if !self.has_toggle() {
            return false;
        }
        self.expanded = !self.expanded;
        true
    }
}

/// One drawn repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectView {
    pub repository: RepositoryRecord,
    pub issue_list: IssueListView,
}

impl ProjectView {
    pub fn new(repository: RepositoryRecord, cap: usize) -> Self {
        let issue_list = IssueListView::new(repository.issues.len(), cap);
        Self {
            repository,
            issue_list,
        }
    }

    pub fn visible_issues(&self) -> &[IssueRecord] {
        &self.repository.issues[..self.issue_list.visible_count()]
    }
}

/// Rebuild the view for `records`, in input order, all collapsed.
pub fn build_view(records: &[RepositoryRecord], options: &RenderOptions) -> Vec<ProjectView> {
    records
        .iter()
        .map(|repo| ProjectView::new(repo.clone(), options.issue_cap))
        .collect()
}
