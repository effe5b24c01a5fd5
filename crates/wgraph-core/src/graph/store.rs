//! Adjacency-list storage for weighted graphs

use std::borrow::Borrow;
use std::collections::BTreeMap;

use serde::Serialize;

/// Weight given to edges that have none
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// How an edge is inserted into the store
///
/// The store itself is always directed: an undirected edge becomes two
/// directed entries with the same weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeKind {
    #[default]
    Directed,
    Undirected,
}

impl EdgeKind {
    pub fn is_directed(self) -> bool {
        self == EdgeKind::Directed
    }
}

/// One entry of a vertex's neighbor list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor<V> {
    pub vertex: V,
    pub weight: f64,
}

/// Weighted graph over totally ordered vertex labels
///
/// Every vertex that appears as an edge endpoint is a key of the map, even
/// when its neighbor list is empty. Neighbor lists keep insertion order;
/// multi-edges and self-loops are retained.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: BTreeMap<V, Vec<Neighbor<V>>>,
}

impl<V: Ord> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<V: Ord + Clone> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(from, to, weight)` triples, all of one kind
    pub fn from_edges<I>(edges: I, kind: EdgeKind) -> Self
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight, kind);
        }
        graph
    }

    /// Insert `vertex` with an empty neighbor list if it is not present
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Append an edge; an undirected edge is also appended in reverse
    pub fn add_edge(&mut self, from: V, to: V, weight: f64, kind: EdgeKind) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        if let Some(list) = self.adjacency.get_mut(&from) {
            list.push(Neighbor {
                vertex: to.clone(),
                weight,
            });
        }

        if !kind.is_directed() {
            if let Some(list) = self.adjacency.get_mut(&to) {
                list.push(Neighbor {
                    vertex: from,
                    weight,
                });
            }
        }
    }

    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency.contains_key(vertex)
    }

    /// True if `to` appears anywhere in `from`'s neighbor list
    pub fn has_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.neighbors(from)
            .iter()
            .any(|n| Borrow::<Q>::borrow(&n.vertex) == to)
    }

    /// Neighbor list of `vertex`; empty for unknown vertices
    pub fn neighbors<Q>(&self, vertex: &Q) -> &[Neighbor<V>]
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency
            .get(vertex)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn out_degree<Q>(&self, vertex: &Q) -> usize
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.neighbors(vertex).len()
    }

    /// Number of entries, over all neighbor lists, that target `vertex`
    pub fn in_degree<Q>(&self, vertex: &Q) -> usize
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency
            .values()
            .flatten()
            .filter(|n| Borrow::<Q>::borrow(&n.vertex) == vertex)
            .count()
    }

    /// Vertices in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Every stored directed entry as `(from, neighbor)`, vertices ascending
    /// and neighbors in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&V, &Neighbor<V>)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(from, list)| list.iter().map(move |n| (from, n)))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed entries; an undirected edge counts twice
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
