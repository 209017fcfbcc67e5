/*!
# Minimum Spanning Trees

Prim's algorithm with a lazy binary heap: every key improvement pushes a new entry and
entries of nodes already in the tree are skipped on extraction. The tree grows from the
first node of the graph.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use ordered_float::OrderedFloat;
use tracing::debug;

use super::*;

/// An edge of a spanning tree, oriented away from the root
#[derive(Debug, Clone, PartialEq)]
pub struct MstEdge<I> {
    pub from: I,
    pub to: I,
    pub weight: f64,
}

/// Edges of a minimum spanning tree in the order they were added, plus their total weight
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult<I> {
    pub edges: Vec<MstEdge<I>>,
    pub total_weight: f64,
}

impl<I> MstResult<I> {
    /// Returns the number of tree edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Prim's algorithm parameterized by an edge weight strategy.
///
/// Only undirected graphs are accepted. Graphs with zero or one node have an empty tree
/// of weight `0`.
#[derive(Debug, Clone, Default)]
pub struct Prim<W = AttributeWeight> {
    weight: W,
}

impl Prim {
    /// Creates an instance that reads weights from the `"weight"` attribute (default `1.0`)
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W> Prim<W> {
    /// Replaces the weight strategy
    pub fn set_weight(&mut self, weight: W) {
        self.weight = weight;
    }

    /// Replaces the weight strategy, possibly changing its type
    pub fn weight<W2>(self, weight: W2) -> Prim<W2> {
        Prim { weight }
    }

    /// Computes a minimum spanning tree.
    ///
    /// Returns `Ok(None)` if the graph is disconnected.
    ///
    /// # Errors
    /// [`AlgoError::InvalidArgument`] if the graph is directed.
    pub fn find_mst<G>(&self, graph: &G) -> Result<Option<MstResult<G::NodeId>>>
    where
        G: GraphView,
        W: EdgeWeight<G::NodeId, G::Attrs>,
    {
        if graph.is_directed() {
            return Err(AlgoError::requires_undirected("Prim's algorithm"));
        }

        let ids = IndexMap::from_graph(graph);
        if ids.len() <= 1 {
            return Ok(Some(MstResult {
                edges: Vec::new(),
                total_weight: 0.0,
            }));
        }

        let adj = WeightedAdjacency::from_edges(graph, &ids, |attrs, from, to| {
            self.weight.weight(attrs, from, to)
        });

        let tree = grow_tree(&adj, 0);
        if tree.len() + 1 != ids.len() {
            debug!(
                nodes = ids.len(),
                tree_edges = tree.len(),
                "graph is disconnected, no spanning tree"
            );
            return Ok(None);
        }

        let total_weight = tree.iter().map(|e| e.weight).sum();
        let edges = tree
            .into_iter()
            .map(|WeightedEdge { edge: Edge(u, v), weight }| MstEdge {
                from: ids.ids()[u as usize].clone(),
                to: ids.ids()[v as usize].clone(),
                weight,
            })
            .collect();

        Ok(Some(MstResult {
            edges,
            total_weight,
        }))
    }
}

/// Grows a minimum spanning tree of the component of `root`.
/// Returns the tree edges `(parent, child)` in insertion order.
fn grow_tree(adj: &WeightedAdjacency, root: Node) -> Vec<WeightedEdge> {
    let n = adj.len();
    let mut in_tree = NodeBitSet::new(n as NumNodes);
    let mut key = vec![f64::INFINITY; n];
    let mut tree = Vec::with_capacity(n.saturating_sub(1));

    // entries: (key, node, parent); the root is its own parent
    let mut heap = BinaryHeap::new();
    key[root as usize] = 0.0;
    heap.push((Reverse(OrderedFloat(0.0)), Reverse(root), root));

    while let Some((Reverse(OrderedFloat(weight)), Reverse(u), parent)) = heap.pop() {
        if in_tree.set_bit(u) {
            continue;
        }

        if u != parent {
            tree.push(WeightedEdge {
                edge: Edge(parent, u),
                weight,
            });
        }

        for &WeightedNeighbor { node: v, weight } in adj.neighbors_of(u) {
            if !in_tree.get_bit(v) && weight < key[v as usize] {
                key[v as usize] = weight;
                heap.push((Reverse(OrderedFloat(weight)), Reverse(v), u));
            }
        }
    }

    tree
}
