use crate::support::{stdout_json, wgraph};
use predicates::prelude::*;

// ============================================================================
// BFS
// ============================================================================

#[test]
fn test_bfs_order_on_traversal_demo() {
    wgraph()
        .args(["bfs", "A", "--demo", "traversal"])
        .assert()
        .success()
        .stdout("A → B → C → D → E → F → G\n");
}

#[test]
fn test_bfs_shortest_path() {
    wgraph()
        .args(["bfs", "A", "--to", "G", "--demo", "traversal"])
        .assert()
        .success()
        .stdout("A → B → E → G\n");
}

#[test]
fn test_bfs_path_json() {
    let output = wgraph()
        .args(["--format", "json", "bfs", "A", "--to", "G", "--demo", "traversal"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "E", "G"]));
    assert_eq!(json["hops"], 3);
}

#[test]
fn test_bfs_unreachable_target_is_not_an_error() {
    wgraph()
        .args(["bfs", "A", "--to", "H", "--demo", "traffic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from A to H"));
}

#[test]
fn test_bfs_unknown_start_visits_only_itself() {
    wgraph()
        .args(["bfs", "Z", "--demo", "traversal"])
        .assert()
        .success()
        .stdout("Z\n");
}

// ============================================================================
// DFS
// ============================================================================

#[test]
fn test_dfs_recursive_order() {
    wgraph()
        .args(["dfs", "A", "--demo", "traversal"])
        .assert()
        .success()
        .stdout("A → B → D → E → G → C → F\n");
}

#[test]
fn test_dfs_iterative_matches_recursive() {
    wgraph()
        .args(["dfs", "A", "--iterative", "--demo", "traversal"])
        .assert()
        .success()
        .stdout("A → B → D → E → G → C → F\n");
}

#[test]
fn test_dfs_json_reports_strategy() {
    let output = wgraph()
        .args(["--format", "json", "dfs", "A", "--iterative", "--demo", "traversal"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["strategy"], "iterative");
    assert_eq!(json["order"].as_array().unwrap().len(), 7);
}

// ============================================================================
// Cycle detection
// ============================================================================

#[test]
fn test_cycle_on_directed_triangle() {
    wgraph()
        .args(["cycle", "--demo", "cyclic"])
        .assert()
        .success()
        .stdout("cycle found\n");
}

#[test]
fn test_cycle_counts_undirected_edges_by_default() {
    wgraph()
        .args(["cycle", "--demo", "traversal"])
        .assert()
        .success()
        .stdout("cycle found\n");
}

#[test]
fn test_cycle_undirected_aware_on_tree() {
    wgraph()
        .args(["cycle", "--undirected-aware", "--demo", "traversal"])
        .assert()
        .success()
        .stdout("no cycle\n");
}

#[test]
fn test_cycle_undirected_aware_json() {
    let output = wgraph()
        .args(["--format", "json", "cycle", "--undirected-aware", "--demo", "cities"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["has_cycle"], true);
    assert_eq!(json["mode"], "undirected");
}
