use crate::common::{RepofolioTest, sample_catalog};
use serde_json::{Value, json};

// ============================================================================
// List command tests
// ============================================================================

fn json_names(output: &str) -> Vec<String> {
    let value: Value = serde_json::from_str(output).expect("ls --json should print JSON");
    value
        .as_array()
        .expect("array of repositories")
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_ls_empty_when_catalog_missing() {
    let rf = RepofolioTest::new();
    let output = rf.run_success(&["ls"]);
    assert!(output.trim().is_empty());
}

#[test]
fn test_ls_table() {
    let rf = RepofolioTest::new();
    rf.write_catalog(sample_catalog());

    let output = rf.run_success(&["ls"]);
    assert!(output.contains("Name"));
    assert!(output.contains("Alpha Project"));
    assert!(output.contains("Beta"));
    assert!(output.contains("Zeta"));
    assert!(output.contains("1/1/2023"));
}

#[test]
fn test_ls_json_keeps_load_order() {
    let rf = RepofolioTest::new();
    rf.write_catalog(sample_catalog());

    let output = rf.run_success(&["ls", "--json"]);
    assert_eq!(json_names(&output), vec!["Beta", "Alpha Project", "Zeta"]);
}

#[test]
fn test_ls_sort_orders() {
    let rf = RepofolioTest::new();
    rf.write_catalog(json!([
        { "name": "Beta", "url": "#", "created_at": "2023-01-01" },
        { "name": "Alpha", "url": "#", "created_at": "2024-01-01" }
    ]));

    let asc = rf.run_success(&["ls", "--json", "--sort", "alphabetical-asc"]);
    assert_eq!(json_names(&asc), vec!["Alpha", "Beta"]);

    let desc = rf.run_success(&["ls", "--json", "--sort", "alphabetical-desc"]);
    assert_eq!(json_names(&desc), vec!["Beta", "Alpha"]);

    let newest = rf.run_success(&["ls", "--json", "--sort", "date-newest"]);
    assert_eq!(json_names(&newest), vec!["Alpha", "Beta"]);

    let oldest = rf.run_success(&["ls", "--json", "--sort", "date-oldest"]);
    assert_eq!(json_names(&oldest), vec!["Beta", "Alpha"]);
}

#[test]
fn test_ls_search_matches_name_or_description() {
    let rf = RepofolioTest::new();
    rf.write_catalog(sample_catalog());

    let output = rf.run_success(&["ls", "--json", "--search", "letter"]);
    assert_eq!(json_names(&output), vec!["Beta"]);

    let output = rf.run_success(&["ls", "--json", "-q", "alpha"]);
    assert_eq!(json_names(&output), vec!["Alpha Project"]);

    let output = rf.run_success(&["ls", "--json", "-q", "nothing-matches-this"]);
    assert!(json_names(&output).is_empty());
}

#[test]
fn test_ls_default_sort_from_config() {
    let rf = RepofolioTest::new();
    rf.write_catalog(sample_catalog());
    rf.write_file("custom.yaml", "default_sort: date-oldest\n");

    let output = rf.run_success(&["--config", "custom.yaml", "ls", "--json"]);
    assert_eq!(json_names(&output), vec!["Zeta", "Beta", "Alpha Project"]);

    // An explicit --sort wins over the configured one.
    let output = rf.run_success(&[
        "--config",
        "custom.yaml",
        "ls",
        "--json",
        "--sort",
        "alphabetical-asc",
    ]);
    assert_eq!(json_names(&output), vec!["Alpha Project", "Beta", "Zeta"]);
}

#[test]
fn test_ls_invalid_config() {
    let rf = RepofolioTest::new();
    rf.write_file("repofolio.yaml", "issue_cap: 0\n");

    let stderr = rf.run_failure(&["ls"]);
    assert!(stderr.contains("issue_cap must be at least 1"));
}
