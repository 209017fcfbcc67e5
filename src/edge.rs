use std::fmt::{Debug, Display};

use crate::Node;

/// An edge between two dense node indices.
/// Whether it is directed is decided by the [`AlgorithmGraph`](crate::repr::AlgorithmGraph) it stems from.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// Entry of a weighted adjacency list: the head of an edge and the weight the
/// caller's extractor assigned to it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeightedNeighbor {
    pub node: Node,
    pub weight: f64,
}

/// An edge together with its extracted weight
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeightedEdge {
    pub edge: Edge,
    pub weight: f64,
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.edge, self.weight)
    }
}
