//! Built-in demo networks

use std::fmt;
use std::str::FromStr;

use crate::error::GraphError;
use crate::graph::store::{EdgeKind, Graph};

/// A named demo network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoGraph {
    /// Undirected street map with a detached `G-H` component
    Traffic,
    /// Street map with one-way streets added on top of two-way ones
    TrafficDirected,
    /// Unit-weight tree used for traversal order
    Traversal,
    /// Directed triangle `1 -> 2 -> 3 -> 1`
    Cyclic,
    /// Six-city road network used for shortest paths
    Cities,
    /// Distances between Spanish cities in km
    Spain,
}

const TWO_WAY_STREETS: [(&str, &str, f64); 7] = [
    ("A", "B", 2.0),
    ("A", "C", 3.0),
    ("B", "D", 1.0),
    ("C", "E", 4.0),
    ("D", "F", 5.0),
    ("E", "F", 2.0),
    ("G", "H", 6.0),
];

const ONE_WAY_STREETS: [(&str, &str, f64); 5] = [
    ("A", "G", 1.0),
    ("B", "H", 3.0),
    ("C", "D", 2.0),
    ("F", "E", 4.0),
    ("H", "A", 5.0),
];

impl DemoGraph {
    pub const ALL: [DemoGraph; 6] = [
        DemoGraph::Traffic,
        DemoGraph::TrafficDirected,
        DemoGraph::Traversal,
        DemoGraph::Cyclic,
        DemoGraph::Cities,
        DemoGraph::Spain,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DemoGraph::Traffic => "traffic",
            DemoGraph::TrafficDirected => "traffic-directed",
            DemoGraph::Traversal => "traversal",
            DemoGraph::Cyclic => "cyclic",
            DemoGraph::Cities => "cities",
            DemoGraph::Spain => "spain",
        }
    }

    pub fn build(self) -> Graph<String> {
        match self {
            DemoGraph::Traffic => owned(&TWO_WAY_STREETS, EdgeKind::Undirected),
            DemoGraph::TrafficDirected => {
                let mut graph = owned(&ONE_WAY_STREETS, EdgeKind::Directed);
                for &(from, to, weight) in &TWO_WAY_STREETS {
                    graph.add_edge(from.to_string(), to.to_string(), weight, EdgeKind::Undirected);
                }
                graph
            }
            DemoGraph::Traversal => owned(
                &[
                    ("A", "B", 1.0),
                    ("A", "C", 1.0),
                    ("B", "D", 1.0),
                    ("B", "E", 1.0),
                    ("C", "F", 1.0),
                    ("E", "G", 1.0),
                ],
                EdgeKind::Undirected,
            ),
            DemoGraph::Cyclic => owned(
                &[("1", "2", 1.0), ("2", "3", 1.0), ("3", "1", 1.0)],
                EdgeKind::Directed,
            ),
            DemoGraph::Cities => owned(
                &[
                    ("A", "B", 4.0),
                    ("A", "C", 2.0),
                    ("B", "C", 1.0),
                    ("B", "D", 5.0),
                    ("C", "D", 8.0),
                    ("C", "E", 10.0),
                    ("D", "E", 2.0),
                    ("D", "F", 6.0),
                    ("E", "F", 3.0),
                ],
                EdgeKind::Undirected,
            ),
            DemoGraph::Spain => owned(
                &[
                    ("Madrid", "Barcelona", 620.0),
                    ("Madrid", "Valencia", 350.0),
                    ("Barcelona", "Valencia", 350.0),
                    ("Barcelona", "Zaragoza", 300.0),
                    ("Valencia", "Sevilla", 650.0),
                    ("Sevilla", "Madrid", 530.0),
                    ("Zaragoza", "Madrid", 320.0),
                ],
                EdgeKind::Undirected,
            ),
        }
    }
}

fn owned(edges: &[(&str, &str, f64)], kind: EdgeKind) -> Graph<String> {
    Graph::from_edges(
        edges
            .iter()
            .map(|&(from, to, weight)| (from.to_string(), to.to_string(), weight)),
        kind,
    )
}

impl FromStr for DemoGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoGraph::ALL
            .into_iter()
            .find(|demo| demo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GraphError::UnknownDemo(s.to_string()))
    }
}

impl fmt::Display for DemoGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
