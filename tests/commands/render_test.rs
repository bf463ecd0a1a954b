use crate::common::{RepofolioTest, issues, sample_catalog};
use serde_json::json;

// ============================================================================
// Render command tests
// ============================================================================

#[test]
fn test_render_page_contract() {
    let rf = RepofolioTest::new();
    rf.write_catalog(sample_catalog());

    let page = rf.run_success(&["render"]);
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(r#"<div id="project-list">"#));
    assert!(page.contains(r#"<select id="sort">"#));
    assert!(page.contains(r#"id="search""#));

    for class in [
        "project",
        "project-date",
        "project-description",
        "issues-container",
        "issue",
        "issue-title",
        "issue-links",
        "toggle-button",
    ] {
        assert!(
            page.contains(&format!(r#"class="{class}""#)),
            "missing class {class}"
        );
    }
}

#[test]
fn test_render_collapsed_and_expanded() {
    let rf = RepofolioTest::new();
    rf.write_catalog(sample_catalog());

    let collapsed = rf.run_success(&["render", "--fragment"]);
    assert!(collapsed.contains("beta issue 4"));
    assert!(!collapsed.contains("beta issue 5"));
    assert!(collapsed.contains(">Show More</button>"));

    let expanded = rf.run_success(&["render", "--fragment", "--expand", "1"]);
    assert!(expanded.contains("beta issue 5"));
    assert!(expanded.contains(">Show Less</button>"));

    let twice = rf.run_success(&["render", "--fragment", "-e", "1", "-e", "1"]);
    assert!(!twice.contains("beta issue 5"));
    assert!(twice.contains(">Show More</button>"));
}

#[test]
fn test_render_description_fallback_and_split_issues() {
    let rf = RepofolioTest::new();
    rf.write_catalog(sample_catalog());

    let html = rf.run_success(&["render", "--fragment"]);
    assert!(html.contains("No description available"));

    let linked = html.find("Linked").expect("linked issue rendered");
    let plain = html.find("Plain").expect("plain issue rendered");
    assert!(linked < plain);
    assert!(html.contains(r#"<a href="https://example.com/doc" target="_blank">doc</a>"#));
    assert!(html.contains("<p>no links here</p>"));
}

#[test]
fn test_render_sort_and_search() {
    let rf = RepofolioTest::new();
    rf.write_catalog(sample_catalog());

    let html = rf.run_success(&["render", "--fragment", "--sort", "alphabetical-asc"]);
    let alpha = html.find(">Alpha Project</a>").unwrap();
    let beta = html.find(">Beta</a>").unwrap();
    let zeta = html.find(">Zeta</a>").unwrap();
    assert!(alpha < beta && beta < zeta);

    let html = rf.run_success(&["render", "--fragment", "--search", "ALPHA"]);
    assert!(html.contains(">Alpha Project</a>"));
    assert!(!html.contains(">Beta</a>"));
    assert!(!html.contains(">Zeta</a>"));
}

#[test]
fn test_render_to_file() {
    let rf = RepofolioTest::new();
    rf.write_catalog(sample_catalog());

    rf.run_success(&["render", "--output", "site/index.html"]);
    let page = rf.read_file("site/index.html").expect("page written");
    assert!(page.contains("<title>GitHub Projects</title>"));
}

#[test]
fn test_render_uses_config() {
    let rf = RepofolioTest::new();
    rf.write_file(
        "data/projects.json",
        &json!({ "repository": [{
            "name": "solo",
            "url": "#",
            "created_at": "2024-03-09T00:00:00Z",
            "issues": issues("solo issue", 3)
        }]})
        .to_string(),
    );
    rf.write_file(
        "repofolio.yaml",
        "data_path: data/projects.json\nissue_cap: 2\ndate_format: \"%Y-%m-%d\"\npage_title: Portfolio\n",
    );

    let page = rf.run_success(&["render"]);
    assert!(page.contains("<title>Portfolio</title>"));
    assert!(page.contains("Created on: 2024-03-09"));
    assert!(page.contains("solo issue 1"));
    assert!(!page.contains("solo issue 2"));
    assert!(page.contains(">Show More</button>"));
}

#[test]
fn test_render_missing_catalog_renders_empty_list() {
    let rf = RepofolioTest::new();

    let output = rf.run(&["render", "--fragment"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), r#"<div id="project-list"></div>"#);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load catalog"));
}

#[test]
fn test_render_rejects_unknown_sort() {
    let rf = RepofolioTest::new();
    rf.write_catalog(sample_catalog());

    let stderr = rf.run_failure(&["render", "--sort", "stars"]);
    assert!(stderr.contains("Invalid sort order"));
}

#[test]
fn test_render_expand_out_of_range() {
    let rf = RepofolioTest::new();
    rf.write_catalog(sample_catalog());

    let stderr = rf.run_failure(&["render", "--expand", "9"]);
    assert!(stderr.contains("no project at position 9"));
}

#[test]
fn test_render_record_with_null_fields() {
    let rf = RepofolioTest::new();
    rf.write_catalog(json!([
        { "name": "dated", "url": "#", "created_at": "2024-01-01T00:00:00Z" },
        { "name": "undated", "url": null, "description": null, "created_at": null }
    ]));

    let html = rf.run_success(&["render", "--fragment"]);
    assert!(html.contains(">dated</a>"));
    assert!(html.contains(">undated</a>"));
    assert!(html.contains("Created on: Invalid Date"));
}
