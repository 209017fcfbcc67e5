use crate::edge::{Edge, WeightedEdge, WeightedNeighbor};

use super::*;

/// Weighted successor lists built from the edge enumeration of a [`GraphView`].
///
/// Each weight is extracted exactly once per edge. Undirected edges are stored in both
/// directions (self-loops once), parallel edges are kept.
#[derive(Debug, Clone)]
pub struct WeightedAdjacency {
    out_nbs: SlicedBuffer<WeightedNeighbor>,
}

impl WeightedAdjacency {
    /// Builds the weighted lists for the index assignment `ids`.
    /// Edges with an endpoint unknown to `ids` are skipped.
    pub fn from_edges<G, F>(graph: &G, ids: &IndexMap<G::NodeId>, mut weight: F) -> Self
    where
        G: GraphView,
        F: FnMut(&G::Attrs, &G::NodeId, &G::NodeId) -> f64,
    {
        let directed = graph.is_directed();
        let mut pairs = Vec::new();
        let mut unknown = 0usize;

        for (from, to, attrs) in graph.edges() {
            let (Some(u), Some(v)) = (ids.index_of(from), ids.index_of(to)) else {
                unknown += 1;
                continue;
            };

            let w = weight(attrs, from, to);
            pairs.push((u, WeightedNeighbor { node: v, weight: w }));
            if !directed && u != v {
                pairs.push((v, WeightedNeighbor { node: u, weight: w }));
            }
        }

        if unknown > 0 {
            warn!(unknown, "skipped edges with endpoints that are not nodes of the graph");
        }

        Self {
            out_nbs: SlicedBuffer::from_pairs(ids.len(), pairs),
        }
    }

    /// Returns the number of nodes
    pub fn len(&self) -> usize {
        self.out_nbs.len()
    }

    /// Returns *true* if there are no nodes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the weighted successors of `u`
    pub fn neighbors_of(&self, u: Node) -> &[WeightedNeighbor] {
        &self.out_nbs[u]
    }

    /// Returns an iterator over all stored (directed) edges, grouped by tail
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.out_nbs.slices().enumerate().flat_map(|(u, nbs)| {
            nbs.iter().map(move |nb| WeightedEdge {
                edge: Edge(u as Node, nb.node),
                weight: nb.weight,
            })
        })
    }

    /// Returns the number of stored (directed) edges
    pub fn number_of_entries(&self) -> usize {
        self.out_nbs.number_of_entries()
    }
}
