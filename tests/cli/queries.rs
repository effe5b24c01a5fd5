use crate::support::{stdout_json, wgraph};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_stats_traffic() {
    wgraph()
        .args(["stats", "--demo", "traffic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vertices: 8\n"))
        .stdout(predicate::str::contains("edges: 14\n"))
        .stdout(predicate::str::contains("total weight: 46.0\n"))
        .stdout(predicate::str::contains("most connected: A (out 2, in 2)"));
}

#[test]
fn test_stats_json() {
    let output = wgraph()
        .args(["--format", "json", "stats", "--demo", "cyclic"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["vertices"], 3);
    assert_eq!(json["edges"], 3);
    assert_eq!(json["density"], 0.5);
    assert_eq!(json["most_connected"]["vertex"], "1");
}

#[test]
fn test_show_structure() {
    wgraph()
        .args(["show", "--demo", "cyclic"])
        .assert()
        .success()
        .stdout("1: [2(1.0)]\n2: [3(1.0)]\n3: [1(1.0)]\n");
}

#[test]
fn test_show_json() {
    let output = wgraph()
        .args(["--format", "json", "show", "--demo", "cyclic"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["vertices"][0]["vertex"], "1");
    assert_eq!(json["vertices"][0]["neighbors"][0]["vertex"], "2");
}

#[test]
fn test_degree_directed_demo() {
    // H has one-way H->A, two-way G-H, and one-way B->H
    wgraph()
        .args(["degree", "H", "--demo", "traffic-directed"])
        .assert()
        .success()
        .stdout("H: out 2, in 2\n");
}

#[test]
fn test_degree_unknown_vertex_is_zero() {
    wgraph()
        .args(["degree", "Q", "--demo", "traffic"])
        .assert()
        .success()
        .stdout("Q: out 0, in 0\n");
}

#[test]
fn test_neighbors_in_insertion_order() {
    wgraph()
        .args(["neighbors", "A", "--demo", "traffic-directed"])
        .assert()
        .success()
        .stdout("G 1.0\nB 2.0\nC 3.0\n");
}

#[test]
fn test_neighbors_unknown_vertex() {
    wgraph()
        .args(["neighbors", "Q", "--demo", "traffic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Q has no neighbors"));
}

#[test]
fn test_has_edge_respects_direction() {
    wgraph()
        .args(["has-edge", "C", "D", "--demo", "traffic-directed"])
        .assert()
        .success()
        .stdout("C -> D: yes\n");

    wgraph()
        .args(["has-edge", "D", "C", "--demo", "traffic-directed"])
        .assert()
        .success()
        .stdout("D -> C: no\n");
}

#[test]
fn test_input_file_with_comments_and_bad_lines() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("edges.txt"),
        "# streets\n\nA B 2.5\nlonely\nB C heavy\n",
    )
    .unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["neighbors", "B", "--input", "edges.txt"])
        .assert()
        .success()
        .stdout("C 1.0\n");
}
