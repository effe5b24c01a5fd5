use std::fmt::Display;

use serde::Serialize;

use crate::graph::store::Graph;

/// Summary numbers for a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub vertices: usize,
    /// Directed entries; an undirected edge counts twice
    pub edges: usize,
    pub density: f64,
    pub total_weight: f64,
    pub most_connected: Option<VertexDegree>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexDegree {
    pub vertex: String,
    pub out_degree: usize,
    pub in_degree: usize,
}

impl VertexDegree {
    pub fn total(&self) -> usize {
        self.out_degree + self.in_degree
    }
}

impl GraphStats {
    pub fn compute<V>(graph: &Graph<V>) -> Self
    where
        V: Ord + Clone + Display,
    {
        let vertices = graph.vertex_count();
        let edges = graph.edge_count();

        let density = if vertices < 2 {
            0.0
        } else {
            edges as f64 / (vertices as f64 * (vertices as f64 - 1.0))
        };

        let total_weight = graph.edges().map(|(_, n)| n.weight).sum();

        let mut most_connected: Option<VertexDegree> = None;
        for vertex in graph.vertices() {
            let candidate = VertexDegree {
                vertex: vertex.to_string(),
                out_degree: graph.out_degree(vertex),
                in_degree: graph.in_degree(vertex),
            };
            // Strictly greater, so the first vertex in ascending order wins ties
            let replace = match &most_connected {
                Some(best) => candidate.total() > best.total(),
                None => true,
            };
            if replace {
                most_connected = Some(candidate);
            }
        }

        Self {
            vertices,
            edges,
            density,
            total_weight,
            most_connected,
        }
    }
}
