//! Terminal rendering of the current view.

use owo_colors::OwoColorize;
use serde_json::{Value, json};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::render::{ProjectView, RenderOptions, format_created_date};

/// Format a project for single-line display
pub fn format_project_line(position: usize, project: &ProjectView, options: &RenderOptions) -> String {
    let repo = &project.repository;
    let date = format_created_date(&repo.created_at, &options.date_format);
    format!(
        "{} {} {} - {}",
        format!("{position:>3}.").dimmed(),
        repo.name.cyan().bold(),
        format!("({date})").dimmed(),
        repo.display_description()
    )
}

/// Multi-line listing of the whole view: one line per project followed by
/// its visible issues and, when present, the toggle label.
pub fn format_view(view: &[ProjectView], options: &RenderOptions) -> String {
    if view.is_empty() {
        return "No projects to show.".dimmed().to_string();
    }

    let mut lines = Vec::new();
    for (i, project) in view.iter().enumerate() {
        lines.push(format_project_line(i + 1, project, options));
        for issue in project.visible_issues() {
            lines.push(format!("       - {}", issue.display_title()));
            for link in &issue.links {
                lines.push(format!("           {} {}", link.text, link.url.dimmed()));
            }
        }
        if let Some(label) = project.issue_list.toggle_label() {
            let hidden = project.issue_list.total - project.issue_list.visible_count();
            let hint = if hidden > 0 {
                format!("[{label}] ({hidden} more, toggle {})", i + 1)
            } else {
                format!("[{label}] (toggle {})", i + 1)
            };
            lines.push(format!("       {}", hint.yellow()));
        }
    }
    lines.join("\n")
}

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Issues")]
    issues: usize,
    #[tabled(rename = "Description")]
    description: String,
}

/// Table of the view for `ls`.
pub fn format_view_table(view: &[ProjectView], options: &RenderOptions) -> String {
    let rows: Vec<ProjectRow> = view
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let repo = &project.repository;
            ProjectRow {
                position: i + 1,
                name: repo.name.clone(),
                created: format_created_date(&repo.created_at, &options.date_format),
                issues: repo.issues.len(),
                description: repo.display_description().to_string(),
            }
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// JSON array of the drawn repositories, in view order.
pub fn view_to_json(view: &[ProjectView]) -> Value {
    json!(
        view.iter()
            .map(|project| &project.repository)
            .collect::<Vec<_>>()
    )
}
