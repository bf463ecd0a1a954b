//! Display fragments for repositories and the list that holds them.

use jiff::tz::TimeZone;

use crate::render::html::Element;
use crate::render::issue::issue_element;
use crate::render::view::{ProjectView, RenderOptions};
use crate::types::CreatedAt;

/// Text shown when a creation date cannot be interpreted.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a creation date (UTC) with a strftime pattern.
///
/// Falls back to the raw catalog text when the pattern itself is unusable.
pub fn format_created_date(created_at: &CreatedAt, pattern: &str) -> String {
    let Some(ts) = created_at.timestamp() else {
        return INVALID_DATE.to_string();
    };
    let zoned = ts.to_zoned(TimeZone::UTC);
    jiff::fmt::strtime::format(pattern, &zoned).unwrap_or_else(|e| {
        tracing::debug!("date format '{pattern}' failed: {e}");
        created_at.as_str().to_string()
    })
}

/// Build the `div.project` container for one drawn repository.
///
/// `position` is the 1-based place of the project in the current view; it is
/// stamped on the toggle control so events can address it.
pub fn project_element(position: usize, project: &ProjectView, options: &RenderOptions) -> Element {
    let repo = &project.repository;

    let mut el = Element::new("div")
        .class("project")
        .child(Element::new("h2").child(Element::external_link(&repo.url, &repo.name)))
        .child(Element::new("p").class("project-date").text(format!(
            "Created on: {}",
            format_created_date(&repo.created_at, &options.date_format)
        )))
        .child(
            Element::new("p")
                .class("project-description")
                .text(repo.display_description()),
        );

    if project.issue_list.is_empty() {
        return el;
    }

    if let Some(label) = project.issue_list.toggle_label() {
        el = el.child(
            Element::new("button")
                .class("toggle-button")
                .attr("type", "button")
                .attr("data-project", position.to_string())
                .attr("aria-expanded", project.issue_list.expanded.to_string())
                .text(label),
        );
    }

    el.child(
        Element::new("div")
            .class("issues-container")
            .children(project.visible_issues().iter().map(issue_element)),
    )
}

/// Build the `#project-list` container holding every drawn project in order.
pub fn project_list(view: &[ProjectView], options: &RenderOptions) -> Element {
    Element::new("div").attr("id", "project-list").children(
        view.iter()
            .enumerate()
            .map(|(i, project)| project_element(i + 1, project, options)),
    )
}
