use crate::support::wgraph;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_file_in_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("wgraph.toml"),
        "[graph]\nundirected = true\ndefault_weight = 2.5\n",
    )
    .unwrap();
    fs::write(dir.path().join("edges.txt"), "A B\n").unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["neighbors", "B", "--input", "edges.txt"])
        .assert()
        .success()
        .stdout("A 2.5\n");
}

#[test]
fn test_directed_flag_overrides_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("wgraph.toml"), "[graph]\nundirected = true\n").unwrap();
    fs::write(dir.path().join("edges.txt"), "A B\n").unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["has-edge", "B", "A", "--directed", "--input", "edges.txt"])
        .assert()
        .success()
        .stdout("B -> A: no\n");
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("custom.toml"),
        "[export]\ndeduplicate_undirected = true\ninclude_weights = false\n",
    )
    .unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["--config", "custom.toml", "export", "out.txt", "--demo", "traversal"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert_eq!(content, "A B\nA C\nB D\nB E\nC F\nE G\n");
}

#[test]
fn test_negative_weights_allowed_when_configured() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("wgraph.toml"),
        "[dijkstra]\nreject_negative_weights = false\n",
    )
    .unwrap();
    fs::write(dir.path().join("edges.txt"), "A B 2.0\nB C -1.0\n").unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["dijkstra", "A", "--to", "C", "--input", "edges.txt"])
        .assert()
        .success()
        .stdout("A → B → C (1.0)\n");
}

#[test]
fn test_invalid_config_exit_code_3() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("wgraph.toml"), "[graph\nundirected = ").unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["stats", "--demo", "cities"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_non_finite_default_weight_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("wgraph.toml"), "[graph]\ndefault_weight = nan\n").unwrap();

    wgraph()
        .current_dir(dir.path())
        .args(["stats", "--demo", "cities"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}
