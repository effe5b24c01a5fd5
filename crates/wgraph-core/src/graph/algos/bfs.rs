use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::graph::path::reconstruct_path;
use crate::graph::GraphProvider;

/// State tracked during a breadth-first search
struct BfsState<'a, V> {
    visited: BTreeSet<&'a V>,
    parents: BTreeMap<V, V>,
    queue: VecDeque<&'a V>,
}

impl<'a, V: Ord + Clone> BfsState<'a, V> {
    fn new(start: &'a V) -> Self {
        let mut state = Self {
            visited: BTreeSet::new(),
            parents: BTreeMap::new(),
            queue: VecDeque::new(),
        };
        state.visited.insert(start);
        state.queue.push_back(start);
        state
    }

    /// Mark unvisited neighbors of `current`, record their parent and
    /// enqueue them in list order
    fn expand<P>(&mut self, provider: &'a P, current: &'a V)
    where
        P: GraphProvider<V> + ?Sized,
    {
        for neighbor in provider.neighbors(current) {
            if self.visited.insert(&neighbor.vertex) {
                self.parents
                    .insert(neighbor.vertex.clone(), current.clone());
                self.queue.push_back(&neighbor.vertex);
            }
        }
    }
}

/// Breadth-first visitation order from `start`
///
/// An unknown start vertex has no neighbors, so the order is just `[start]`.
#[tracing::instrument(skip(provider, start))]
pub fn bfs_order<P, V>(provider: &P, start: &V) -> Vec<V>
where
    P: GraphProvider<V> + ?Sized,
    V: Ord + Clone,
{
    let mut state = BfsState::new(start);
    let mut order = Vec::new();

    while let Some(current) = state.queue.pop_front() {
        order.push(current.clone());
        state.expand(provider, current);
    }

    tracing::debug!(visited = order.len(), "bfs_order");
    order
}

/// Shortest path by edge count from `start` to `end`
///
/// The search stops as soon as `end` is dequeued. Ties between equally
/// short paths go to the first-discovered parent, i.e. neighbor list order.
/// Returns an empty path when `end` is unreachable.
#[tracing::instrument(skip(provider, start, end))]
pub fn bfs_path<P, V>(provider: &P, start: &V, end: &V) -> Vec<V>
where
    P: GraphProvider<V> + ?Sized,
    V: Ord + Clone,
{
    let mut state = BfsState::new(start);

    while let Some(current) = state.queue.pop_front() {
        if current == end {
            let path = reconstruct_path(&state.parents, start, end);
            tracing::debug!(hops = path.len().saturating_sub(1), "bfs_path_found");
            return path;
        }
        state.expand(provider, current);
    }

    tracing::debug!(visited = state.visited.len(), "bfs_path_unreachable");
    Vec::new()
}
