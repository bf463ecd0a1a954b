//! List transforms: sorting the shared collection and filtering views of it.

pub mod search;
pub mod sort;

pub use search::{filter_repositories, repository_matches};
pub use sort::{SortOrder, compare_names, sort_repositories_by};
