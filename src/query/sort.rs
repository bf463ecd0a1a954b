//! Sort orders for the repository list.
//!
//! Sorting happens in place on the shared collection; the browser redraws
//! afterwards. All sorts are stable, so applying the same order twice is a
//! no-op.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use unicase::UniCase;

use crate::types::RepositoryRecord;

/// Sort order selectable from the page's sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    DateNewest,
    DateOldest,
    AlphabeticalAsc,
    AlphabeticalDesc,
}

impl SortOrder {
    /// All valid string representations of this enum, in selector order.
    pub const ALL_STRINGS: &[&str] = &[
        "date-newest",
        "date-oldest",
        "alphabetical-asc",
        "alphabetical-desc",
    ];

    pub const ALL: [SortOrder; 4] = [
        SortOrder::DateNewest,
        SortOrder::DateOldest,
        SortOrder::AlphabeticalAsc,
        SortOrder::AlphabeticalDesc,
    ];

    /// Human label shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::DateNewest => "Newest first",
            SortOrder::DateOldest => "Oldest first",
            SortOrder::AlphabeticalAsc => "Name (A-Z)",
            SortOrder::AlphabeticalDesc => "Name (Z-A)",
        }
    }
}

enum_display_fromstr!(
    SortOrder,
    crate::error::RepofolioError::invalid_sort_order,
    {
        DateNewest => "date-newest",
        DateOldest => "date-oldest",
        AlphabeticalAsc => "alphabetical-asc",
        AlphabeticalDesc => "alphabetical-desc",
    }
);

thread_local! {
    /// Root-locale collator; `None` if the compiled collation data is unusable.
    static NAME_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Compare names the way a human-facing list expects.
///
/// Uses Unicode collation: punctuation before digits before letters,
/// accents ignored until the base letters tie, lowercase ahead of uppercase
/// when names differ only in case. Falls back to case-insensitive code point
/// order when no collator is available.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => UniCase::new(a).cmp(&UniCase::new(b)),
        })
        .then_with(|| b.cmp(a))
}

/// Sort by creation date, newest first. Undated records go last.
pub fn sort_by_date_newest(repos: &mut [RepositoryRecord]) {
    repos.sort_by(|a, b| {
        match (a.created_at.timestamp(), b.created_at.timestamp()) {
            (Some(ta), Some(tb)) => tb.cmp(&ta),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

/// Sort by creation date, oldest first. Undated records go last.
pub fn sort_by_date_oldest(repos: &mut [RepositoryRecord]) {
    repos.sort_by(|a, b| {
        match (a.created_at.timestamp(), b.created_at.timestamp()) {
            (Some(ta), Some(tb)) => ta.cmp(&tb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

/// Sort by name, A to Z
pub fn sort_by_name_asc(repos: &mut [RepositoryRecord]) {
    repos.sort_by(|a, b| compare_names(&a.name, &b.name));
}

/// Sort by name, Z to A
pub fn sort_by_name_desc(repos: &mut [RepositoryRecord]) {
    repos.sort_by(|a, b| compare_names(&b.name, &a.name));
}

/// Sort repositories by the specified order
pub fn sort_repositories_by(repos: &mut [RepositoryRecord], order: SortOrder) {
    match order {
        SortOrder::DateNewest => sort_by_date_newest(repos),
        SortOrder::DateOldest => sort_by_date_oldest(repos),
        SortOrder::AlphabeticalAsc => sort_by_name_asc(repos),
        SortOrder::AlphabeticalDesc => sort_by_name_desc(repos),
    }
}
