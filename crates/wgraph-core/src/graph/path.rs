//! Path reconstruction utilities for graph traversal

use std::collections::BTreeMap;

/// Walk `parents` back from `end` to `start` and return the path in
/// forward order.
///
/// Returns an empty path when the chain of parents does not reach `start`,
/// and `[start]` when `start == end`.
pub fn reconstruct_path<V: Ord + Clone>(parents: &BTreeMap<V, V>, start: &V, end: &V) -> Vec<V> {
    let mut path = vec![end.clone()];
    let mut current = end;

    while current != start {
        match parents.get(current) {
            Some(parent) => {
                // A parent chain longer than the map has looped
                if path.len() > parents.len() {
                    return Vec::new();
                }
                path.push(parent.clone());
                current = parent;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}
