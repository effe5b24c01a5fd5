use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;

/// Get a Command for wgraph
pub fn wgraph() -> Command {
    cargo_bin_cmd!("wgraph")
}

/// Parse stdout of a `--format json` run
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
