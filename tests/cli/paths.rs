use crate::support::{stdout_json, wgraph};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_dijkstra_city_distances() {
    wgraph()
        .args(["dijkstra", "A", "--demo", "cities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A: 0.0 (A)\n"))
        .stdout(predicate::str::contains("B: 3.0 (A → C → B)\n"))
        .stdout(predicate::str::contains("C: 2.0 (A → C)\n"))
        .stdout(predicate::str::contains("D: 8.0 (A → C → B → D)\n"))
        .stdout(predicate::str::contains("E: 10.0 (A → C → B → D → E)\n"))
        .stdout(predicate::str::contains("F: 13.0 (A → C → B → D → E → F)\n"));
}

#[test]
fn test_dijkstra_single_target() {
    wgraph()
        .args(["dijkstra", "A", "--to", "F", "--demo", "cities"])
        .assert()
        .success()
        .stdout("A → C → B → D → E → F (13.0)\n");
}

#[test]
fn test_dijkstra_unreachable_is_infinite() {
    wgraph()
        .args(["dijkstra", "A", "--demo", "traffic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("G: ∞\n"))
        .stdout(predicate::str::contains("H: ∞\n"));
}

#[test]
fn test_dijkstra_json_uses_null_for_unreachable() {
    let output = wgraph()
        .args(["--format", "json", "dijkstra", "A", "--demo", "traffic"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["source"], "A");
    let entries = json["distances"].as_array().unwrap();
    let g = entries.iter().find(|e| e["vertex"] == "G").unwrap();
    assert!(g["distance"].is_null());
    assert_eq!(g["path"], serde_json::json!([]));

    let f = entries.iter().find(|e| e["vertex"] == "F").unwrap();
    assert_eq!(f["distance"], 8.0);
}

#[test]
fn test_dijkstra_spain_from_madrid() {
    wgraph()
        .args(["dijkstra", "Madrid", "--to", "Zaragoza", "--demo", "spain"])
        .assert()
        .success()
        .stdout("Madrid → Zaragoza (320.0)\n");
}

#[test]
fn test_dijkstra_negative_weight_is_data_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("edges.txt"), "A B 2.0\nB C -1.0\n").unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["dijkstra", "A", "--input", "edges.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative edge weight"));
}

#[test]
fn test_dijkstra_negative_weight_json_envelope() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("edges.txt"), "A B -4\n").unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["--format", "json", "dijkstra", "A", "--input", "edges.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"negative_weight\""));
}

#[test]
fn test_dijkstra_from_input_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("roads.txt"),
        "# one-way roads\n1 2 10\n2 3 5\n1 3 50\n",
    )
    .unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["dijkstra", "1", "--to", "3", "--input", "roads.txt"])
        .assert()
        .success()
        .stdout("1 → 2 → 3 (15.0)\n");
}
