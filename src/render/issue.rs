//! Display fragment for a single issue.

use crate::render::html::Element;
use crate::types::IssueRecord;

/// Build the `div.issue` fragment for one issue.
///
/// Links win over the description: an issue with links shows only its links,
/// an issue without links shows its description, and an issue with neither
/// shows just the title.
pub fn issue_element(issue: &IssueRecord) -> Element {
    let mut el = Element::new("div").class("issue").child(
        Element::new("p")
            .class("issue-title")
            .text(issue.display_title()),
    );

    if !issue.links.is_empty() {
        el = el.child(
            Element::new("div").class("issue-links").children(
                issue
                    .links
                    .iter()
                    .map(|link| Element::external_link(&link.url, &link.text)),
            ),
        );
    } else if let Some(description) = issue.display_description() {
        el = el.child(Element::new("p").text(description));
    }

    el
}
