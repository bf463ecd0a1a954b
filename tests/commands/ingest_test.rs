use crate::common::RepofolioTest;
use serde_json::{Value, json};

// ============================================================================
// Ingest command tests
// ============================================================================

fn write_export(rf: &RepofolioTest) {
    rf.write_file(
        "export/repos.json",
        &json!([
            {
                "name": "tracker",
                "html_url": "https://github.com/someone/tracker",
                "description": "Issue tracker",
                "created_at": "2021-04-02T10:00:00Z"
            },
            {
                "name": "quiet",
                "html_url": "https://github.com/someone/quiet",
                "description": null,
                "created_at": "2020-01-01T00:00:00Z"
            }
        ])
        .to_string(),
    );
    rf.write_file(
        "export/issues/tracker.json",
        &json!([
            { "title": "Plain bug", "number": 1, "body": "Crashes on start\nmore detail" },
            { "title": "Docs", "number": 2, "body": "See [guide](https://example.com/guide)" }
        ])
        .to_string(),
    );
}

fn read_json(rf: &RepofolioTest, path: &str) -> Value {
    let content = rf
        .read_file(path)
        .unwrap_or_else(|| panic!("{path} should exist"));
    serde_json::from_str(&content).expect("valid JSON")
}

#[test]
fn test_ingest_with_issues() {
    let rf = RepofolioTest::new();
    write_export(&rf);

    let output = rf.run_success(&[
        "ingest",
        "--repos",
        "export/repos.json",
        "--issues-dir",
        "export/issues",
        "--include-issues",
    ]);
    assert!(output.contains("Wrote 2 repositories to github_projects.json"));

    let catalog = read_json(&rf, "github_projects.json");
    let repos = catalog["repository"].as_array().unwrap();
    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0]["name"], "tracker");
    assert_eq!(repos[0]["url"], "https://github.com/someone/tracker");

    let issues = repos[0]["issues"].as_array().unwrap();
    assert_eq!(issues[0]["title"], "Docs #2");
    assert_eq!(issues[0]["links"][0]["url"], "https://example.com/guide");
    assert_eq!(issues[1]["title"], "Plain bug #1");
    assert_eq!(issues[1]["description"], "Crashes on start");

    let skipped = read_json(&rf, "skipped_repos.json");
    assert_eq!(skipped, json!({ "skipped_repositories": ["quiet"] }));
}

#[test]
fn test_ingest_without_issues() {
    let rf = RepofolioTest::new();
    write_export(&rf);

    rf.run_success(&["ingest", "--repos", "export/repos.json", "-o", "out/catalog.json"]);

    let catalog = read_json(&rf, "out/catalog.json");
    for repo in catalog["repository"].as_array().unwrap() {
        assert!(repo["issues"].as_array().unwrap().is_empty());
    }
    let skipped = read_json(&rf, "skipped_repos.json");
    assert_eq!(skipped, json!({ "skipped_repositories": [] }));
}

#[test]
fn test_ingested_catalog_renders() {
    let rf = RepofolioTest::new();
    write_export(&rf);

    rf.run_success(&[
        "ingest",
        "--repos",
        "export/repos.json",
        "--issues-dir",
        "export/issues",
        "--include-issues",
    ]);

    let html = rf.run_success(&["render", "--fragment", "--sort", "date-oldest"]);
    let quiet = html.find(">quiet</a>").unwrap();
    let tracker = html.find(">tracker</a>").unwrap();
    assert!(quiet < tracker);
    assert!(html.contains("Created on: 4/2/2021"));
    assert!(html.contains("No description available"));
    assert!(html.contains(r#"<a href="https://example.com/guide" target="_blank">guide</a>"#));
}

#[test]
fn test_ingest_missing_export_fails() {
    let rf = RepofolioTest::new();
    let stderr = rf.run_failure(&["ingest", "--repos", "nope.json"]);
    assert!(stderr.contains("nope.json"));
}
