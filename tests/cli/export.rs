use crate::support::{stdout_json, wgraph};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_export_dedup_traffic() {
    let dir = tempdir().unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["export", "edges_undirected.txt", "--dedup", "--demo", "traffic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exported 7 edges"));

    let content = fs::read_to_string(dir.path().join("edges_undirected.txt")).unwrap();
    assert_eq!(
        content,
        "A B 2.0\nA C 3.0\nB D 1.0\nC E 4.0\nD F 5.0\nE F 2.0\nG H 6.0\n"
    );
}

#[test]
fn test_export_without_dedup_writes_both_directions() {
    let dir = tempdir().unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["export", "edges.txt", "--demo", "traffic"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("edges.txt")).unwrap();
    assert_eq!(content.lines().count(), 14);
    assert!(content.contains("B A 2.0\n"));
}

#[test]
fn test_export_no_weights() {
    let dir = tempdir().unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["export", "edges.txt", "--no-weights", "--demo", "cyclic"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("edges.txt")).unwrap();
    assert_eq!(content, "1 2\n2 3\n3 1\n");
}

#[test]
fn test_export_then_reload_as_undirected() {
    let dir = tempdir().unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["export", "cities.txt", "--dedup", "--demo", "cities"])
        .assert()
        .success();

    wgraph()
        .current_dir(dir.path())
        .args(["dijkstra", "A", "--to", "F", "--undirected", "--input", "cities.txt"])
        .assert()
        .success()
        .stdout("A → C → B → D → E → F (13.0)\n");
}

#[test]
fn test_export_failure_is_a_warning() {
    let dir = tempdir().unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["export", "missing/dir/edges.txt", "--demo", "traffic"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: failed to export"));

    assert!(!dir.path().join("missing").exists());
}

#[test]
fn test_export_failure_json_status() {
    let dir = tempdir().unwrap();

    let output = wgraph()
        .current_dir(dir.path())
        .args(["--format", "json", "export", "missing/edges.txt", "--demo", "traffic"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "failed");
    assert_eq!(json["error"]["type"], "export_error");
}

#[test]
fn test_export_json_summary() {
    let dir = tempdir().unwrap();

    let output = wgraph()
        .current_dir(dir.path())
        .args(["--format", "json", "export", "out.txt", "--dedup", "--demo", "spain"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["status"], "exported");
    assert_eq!(json["lines"], 7);
}
