//! Host page around the project list.
//!
//! The page carries the controls the list is wired to: `select#sort`,
//! `input#search` and the `#project-list` container.

use crate::query::SortOrder;
use crate::render::html::Element;
use crate::render::project::project_list;
use crate::render::view::{ProjectView, RenderOptions};

pub const DEFAULT_PAGE_TITLE: &str = "GitHub Projects";

/// Control values reflected in the page.
#[derive(Debug, Clone, Default)]
pub struct PageControls<'a> {
    pub title: &'a str,
    pub sort: Option<SortOrder>,
    pub search: Option<&'a str>,
}

fn sort_selector(selected: Option<SortOrder>) -> Element {
    Element::new("select")
        .attr("id", "sort")
        .children(SortOrder::ALL.iter().map(|order| {
            let option = Element::new("option").attr("value", order.to_string());
            let option = if Some(*order) == selected {
                option.attr("selected", "selected")
            } else {
                option
            };
            option.text(order.label())
        }))
}

fn search_field(query: Option<&str>) -> Element {
    Element::new("input")
        .attr("type", "search")
        .attr("id", "search")
        .attr("placeholder", "Search projects...")
        .attr("value", query.unwrap_or_default())
}

/// Render a complete HTML document for the current view.
pub fn render_page(view: &[ProjectView], options: &RenderOptions, controls: &PageControls) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(Element::new("title").text(controls.title))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", "styles.css"),
        );

    let body = Element::new("body")
        .child(Element::new("h1").text(controls.title))
        .child(
            Element::new("div")
                .class("controls")
                .child(sort_selector(controls.sort))
                .child(search_field(controls.search)),
        )
        .child(project_list(view, options));

    let html = Element::new("html")
        .attr("lang", "en")
        .child(head)
        .child(body);

    format!("<!DOCTYPE html>\n{}\n", html.to_html())
}
