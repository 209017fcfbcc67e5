/*!
# Graph Algorithms

This module provides a suite of classical **graph algorithms** that run on any graph
implementing [`GraphView`]. All algorithms are re-exported at the top level of this module,
so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversals, shortest paths, spanning trees, centralities, components,
orderings, core decomposition and link prediction.

Every algorithm is a small configurable struct (see e.g. [`PageRank`] or [`Dijkstra`]).
The most common configurations are also available as methods on the graph itself via
[`GraphAlgorithms`].
*/

mod astar;
mod bellman_ford;
mod connectivity;
mod degree;
mod dijkstra;
mod kcore;
mod link_prediction;
mod mst;
mod pagerank;
mod path;
mod topological;
mod traversal;

use crate::{
    edge::{Edge, WeightedEdge, WeightedNeighbor},
    error::{AlgoError, Result},
    node::*,
    ops::{AttributeMap, GraphView},
    repr::{AdjacencyList, AlgorithmGraph, Neighborhoods, WeightedAdjacency},
    utils::{IndexMap, NodeScores, Probability},
};
use itertools::Itertools;

pub use astar::*;
pub use bellman_ford::*;
pub use connectivity::*;
pub use degree::*;
pub use dijkstra::*;
pub use kcore::*;
pub use link_prediction::*;
pub use mst::*;
pub use pagerank::*;
pub use path::*;
pub use topological::*;
pub use traversal::*;

/// Provides the algorithms of this module with their default configuration directly as
/// methods on every [`GraphView`].
///
/// Weighted algorithms read the `"weight"` attribute (edges without it weigh `1.0`).
pub trait GraphAlgorithms: GraphView + Sized {
    /// Nodes reachable from `start` in BFS order; see [`Bfs`]
    fn bfs(&self, start: &Self::NodeId) -> Vec<Self::NodeId> {
        Bfs::new().traverse(self, start)
    }

    /// Nodes reachable from `start` in DFS preorder; see [`Dfs`]
    fn dfs(&self, start: &Self::NodeId) -> Vec<Self::NodeId> {
        Dfs::new().traverse(self, start)
    }

    /// Cheapest path from `start` to `end`; see [`Dijkstra`]
    fn shortest_path(
        &self,
        start: &Self::NodeId,
        end: &Self::NodeId,
    ) -> Result<Option<PathResult<Self::NodeId>>>
    where
        Self::Attrs: AttributeMap,
    {
        Dijkstra::new().find_path(self, start, end)
    }

    /// Minimum spanning tree of an undirected graph; see [`Prim`]
    fn minimum_spanning_tree(&self) -> Result<Option<MstResult<Self::NodeId>>>
    where
        Self::Attrs: AttributeMap,
    {
        Prim::new().find_mst(self)
    }

    /// PageRank with damping `0.85`; see [`PageRank`]
    fn pagerank(&self) -> Result<NodeScores<Self::NodeId, f64>> {
        PageRank::new().compute(self)
    }

    /// Unnormalized degree of every node; see [`DegreeCentrality`]
    fn degree_centrality(&self, mode: DegreeMode) -> NodeScores<Self::NodeId, f64> {
        DegreeCentrality::new().mode(mode).compute(self)
    }

    /// Strongly connected components of a directed graph; see [`StronglyConnected`]
    fn strongly_connected_components(&self) -> Result<Vec<Vec<Self::NodeId>>> {
        StronglyConnected::new().find_components(self)
    }

    /// Topological order of a directed acyclic graph; see [`TopologicalSort`]
    fn topological_sort(&self) -> Result<Vec<Self::NodeId>> {
        TopologicalSort::new().sort(self)
    }

    /// Core number of every node; see [`KCore`]
    fn core_numbers(&self) -> NodeScores<Self::NodeId, NumNodes> {
        KCore::new().compute(self)
    }
}

impl<G> GraphAlgorithms for G where G: GraphView + Sized {}
