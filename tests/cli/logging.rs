use crate::support::wgraph;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_verbose_logs_phases_to_stderr() {
    wgraph()
        .args(["--verbose", "stats", "--demo", "cities"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("load_graph"))
        .stdout(predicate::str::contains("parse_args").not());
}

#[test]
fn test_default_level_is_quiet() {
    wgraph()
        .env_remove("RUST_LOG")
        .env_remove("WGRAPH_LOG")
        .args(["stats", "--demo", "cities"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_emits_json_lines() {
    wgraph()
        .env_remove("RUST_LOG")
        .env_remove("WGRAPH_LOG")
        .args(["--log-json", "--log-level", "debug", "stats", "--demo", "cities"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}

#[test]
fn test_bad_input_line_warns() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("edges.txt"), "A B\nlonely\n").unwrap();

    wgraph()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("WGRAPH_LOG")
        .args(["stats", "--input", "edges.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("missing vertex, line skipped"));
}

#[test]
fn test_wgraph_log_env_overrides_flags() {
    wgraph()
        .env_remove("RUST_LOG")
        .env("WGRAPH_LOG", "wgraph=debug")
        .args(["stats", "--demo", "cities"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
