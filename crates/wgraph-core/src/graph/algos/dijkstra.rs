use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::fmt::Display;
use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::path::reconstruct_path;
use crate::graph::GraphProvider;
use crate::trace_time;

/// Frontier entry for the Dijkstra heap.
///
/// Ordered by distance, then by vertex, so entries with equal distance stay
/// distinct and pop in a stable order. Wrapped in `Reverse` for a min-heap.
#[derive(Debug, Clone)]
pub struct HeapEntry<V> {
    pub distance: f64,
    pub vertex: V,
}

impl<V: Ord> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord> Eq for HeapEntry<V> {}

impl<V: Ord> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Single-source shortest path result
#[derive(Debug, Clone)]
pub struct ShortestPaths<V> {
    pub source: V,
    /// Best distance per known vertex; `f64::INFINITY` when unreachable
    pub distances: BTreeMap<V, f64>,
    /// Predecessor on the best path, for every reached vertex but the source
    pub previous: BTreeMap<V, V>,
}

impl<V: Ord + Clone> ShortestPaths<V> {
    /// Distance to `vertex`; `None` if the vertex was not in the graph
    pub fn distance(&self, vertex: &V) -> Option<f64> {
        self.distances.get(vertex).copied()
    }

    /// Best path from the source to `end`; empty when unreachable
    pub fn path_to(&self, end: &V) -> Vec<V> {
        reconstruct_path(&self.previous, &self.source, end)
    }

    /// Vertices with a finite distance, ascending
    pub fn reachable(&self) -> impl Iterator<Item = (&V, f64)> + '_ {
        self.distances
            .iter()
            .filter(|(_, d)| d.is_finite())
            .map(|(v, d)| (v, *d))
    }
}

/// Dijkstra's single-source shortest paths.
///
/// Every known vertex starts at infinity and the source at zero. The
/// frontier is a binary heap with lazy deletion: improved distances are
/// pushed as new entries and stale pops are discarded by comparing against
/// the distance map. Each vertex is expanded at most once.
///
/// Edge weights must be non-negative. This function does not check; with
/// negative weights it still terminates but the distances are not
/// meaningful. Use [`dijkstra_checked`] to reject such graphs.
#[tracing::instrument(skip(provider, source))]
pub fn dijkstra<P, V>(provider: &P, source: &V) -> ShortestPaths<V>
where
    P: GraphProvider<V> + ?Sized,
    V: Ord + Clone,
{
    let start = Instant::now();

    let mut distances: BTreeMap<V, f64> = provider
        .vertices()
        .map(|v| (v.clone(), f64::INFINITY))
        .collect();
    let mut previous: BTreeMap<V, V> = BTreeMap::new();
    let mut settled: BTreeSet<V> = BTreeSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<V>>> = BinaryHeap::new();
    let mut stale_pops = 0usize;

    distances.insert(source.clone(), 0.0);
    heap.push(Reverse(HeapEntry {
        distance: 0.0,
        vertex: source.clone(),
    }));

    while let Some(Reverse(HeapEntry { distance, vertex })) = heap.pop() {
        let best = distances.get(&vertex).copied().unwrap_or(f64::INFINITY);
        if distance > best || settled.contains(&vertex) {
            stale_pops += 1;
            continue;
        }

        for neighbor in provider.neighbors(&vertex) {
            let candidate = distance + neighbor.weight;
            let current = distances
                .get(&neighbor.vertex)
                .copied()
                .unwrap_or(f64::INFINITY);

            if candidate < current {
                distances.insert(neighbor.vertex.clone(), candidate);
                previous.insert(neighbor.vertex.clone(), vertex.clone());
                heap.push(Reverse(HeapEntry {
                    distance: candidate,
                    vertex: neighbor.vertex.clone(),
                }));
            }
        }

        settled.insert(vertex);
    }

    trace_time!(start, "dijkstra", settled = settled.len(), stale_pops = stale_pops);

    ShortestPaths {
        source: source.clone(),
        distances,
        previous,
    }
}

/// [`dijkstra`] with the non-negative weight precondition enforced.
///
/// Returns [`GraphError::NegativeWeight`] for the first negative edge found
/// (vertices in enumeration order, neighbors in list order).
pub fn dijkstra_checked<P, V>(provider: &P, source: &V) -> Result<ShortestPaths<V>>
where
    P: GraphProvider<V> + ?Sized,
    V: Ord + Clone + Display,
{
    for from in provider.vertices() {
        if let Some(edge) = provider.neighbors(from).iter().find(|n| n.weight < 0.0) {
            tracing::warn!(from = %from, to = %edge.vertex, weight = edge.weight, "negative_weight");
            return Err(GraphError::NegativeWeight {
                from: from.to_string(),
                to: edge.vertex.to_string(),
                weight: edge.weight,
            });
        }
    }

    Ok(dijkstra(provider, source))
}
