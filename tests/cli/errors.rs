use crate::support::wgraph;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_graph_source_is_usage_error() {
    wgraph()
        .args(["stats"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--input <file> or --demo <name>"));
}

#[test]
fn test_unknown_demo_exit_code_3() {
    wgraph()
        .args(["stats", "--demo", "atlantis"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown demo graph: atlantis"));
}

#[test]
fn test_unknown_demo_json_envelope() {
    wgraph()
        .args(["--format", "json", "bfs", "A", "--demo", "atlantis"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"unknown_demo\""))
        .stderr(predicate::str::contains("\"code\":3"));
}

#[test]
fn test_missing_input_file_exit_code_1() {
    let dir = tempdir().unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["stats", "--input", "nope.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_input_and_demo_conflict() {
    wgraph()
        .args(["stats", "--input", "edges.txt", "--demo", "cities"])
        .assert()
        .code(2);
}

#[test]
fn test_quiet_suppresses_error_message() {
    wgraph()
        .args(["--quiet", "stats", "--demo", "atlantis"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
