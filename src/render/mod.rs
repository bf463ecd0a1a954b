//! HTML rendering of the project list.

pub mod html;
pub mod issue;
pub mod page;
pub mod project;
pub mod view;

pub use html::{Element, Node};
pub use issue::issue_element;
pub use page::{DEFAULT_PAGE_TITLE, PageControls, render_page};
pub use project::{format_created_date, project_element, project_list};
pub use view::{IssueListView, ProjectView, RenderOptions, build_view};
