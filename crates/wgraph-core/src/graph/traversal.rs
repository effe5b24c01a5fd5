use crate::graph::store::{Graph, Neighbor};

/// Trait for providing graph adjacency to the traversal algorithms
pub trait GraphProvider<V> {
    /// Outgoing entries of `vertex` in insertion order; empty if unknown
    fn neighbors(&self, vertex: &V) -> &[Neighbor<V>];

    /// Every known vertex, in the provider's enumeration order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;
}

impl<V: Ord + Clone> GraphProvider<V> for Graph<V> {
    fn neighbors(&self, vertex: &V) -> &[Neighbor<V>] {
        Graph::neighbors(self, vertex)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(Graph::vertices(self))
    }
}
