/*!
# Dense Graph Representations

Every algorithm first converts the caller's [`GraphView`] into one of the index-based
snapshots of this module and then runs purely on [`Node`] indices:

- [`AlgorithmGraph`]: successor lists (and optionally predecessor lists) in CSR form,
- [`WeightedAdjacency`]: successor lists annotated with extracted edge weights,
- [`Neighborhoods`]: sorted, duplicate-free undirected neighbor sets.

Snapshots hold no reference to the external graph; later changes to it never affect a
snapshot that was already built.
*/

use std::{hash::Hash, ops::Range};

use tracing::{debug, warn};

use crate::{
    edge::NumEdges,
    node::*,
    ops::GraphView,
    utils::{IndexMap, sliced_buffer::SlicedBuffer},
};

mod neighborhood;
mod weighted;

pub use neighborhood::*;
pub use weighted::*;

/// Read access to index-based adjacency lists
pub trait AdjacencyList {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of nodes as `usize`
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }

    /// Returns a range over all nodes
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over all nodes
    fn vertices(&self) -> Range<Node> {
        self.vertices_range()
    }

    /// Returns an empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns the (out-)neighbors of `u` in adjacency order
    fn neighbors_of(&self, u: Node) -> &[Node];

    /// Returns the number of (out-)neighbors of `u`
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).len() as NumNodes
    }
}

/// Integer-indexed snapshot of a [`GraphView`].
///
/// Indices follow the `nodes()` order of the source graph. Parallel edges are kept as
/// repeated adjacency entries. Predecessor lists are derived by transposing the successor
/// lists, never by querying `predecessors()` of the source graph, which keeps both
/// directions consistent with each other.
#[derive(Debug, Clone)]
pub struct AlgorithmGraph<I> {
    ids: IndexMap<I>,
    directed: bool,
    out_nbs: SlicedBuffer<Node>,
    in_nbs: Option<SlicedBuffer<Node>>,
    number_of_edges: NumEdges,
}

impl<I> AlgorithmGraph<I>
where
    I: Clone + Eq + Hash,
{
    /// Builds the snapshot in `O(n + m)`.
    ///
    /// Successor entries naming an identifier that `nodes()` does not list are skipped.
    /// If `with_predecessors` is set, predecessor lists are built as well.
    pub fn new<G>(graph: &G, with_predecessors: bool) -> Self
    where
        G: GraphView<NodeId = I>,
    {
        let ids = IndexMap::from_graph(graph);
        let n = ids.len();

        let mut buffer = Vec::new();
        let mut offsets = Vec::with_capacity(n + 1);
        let mut unknown = 0usize;
        let mut loops = 0usize;

        offsets.push(0);
        for (u, id) in ids.ids().iter().enumerate() {
            for succ in graph.successors(id) {
                match ids.index_of(succ) {
                    Some(v) => {
                        loops += (v as usize == u) as usize;
                        buffer.push(v);
                    }
                    None => unknown += 1,
                }
            }
            offsets.push(buffer.len());
        }

        if unknown > 0 {
            warn!(unknown, "skipped successors that are not nodes of the graph");
        }

        let directed = graph.is_directed();
        let number_of_edges = (if directed {
            buffer.len()
        } else {
            (buffer.len() + loops) / 2
        }) as NumEdges;

        let out_nbs = SlicedBuffer::new(buffer, offsets);
        let in_nbs = with_predecessors.then(|| {
            if directed {
                out_nbs.transposed()
            } else {
                out_nbs.clone()
            }
        });

        debug!(
            nodes = n,
            edges = number_of_edges,
            directed,
            with_predecessors,
            "built algorithm graph"
        );

        Self {
            ids,
            directed,
            out_nbs,
            in_nbs,
            number_of_edges,
        }
    }

    /// Returns *true* if the source graph is directed
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of edges of the source graph (undirected edges count once)
    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    /// Returns *true* if predecessor lists were built
    pub fn has_predecessors(&self) -> bool {
        self.in_nbs.is_some()
    }

    /// Returns the predecessors of `u`.
    ///
    /// # Panics
    /// Panics if the graph was built without predecessor lists.
    pub fn in_neighbors_of(&self, u: Node) -> &[Node] {
        match &self.in_nbs {
            Some(in_nbs) => &in_nbs[u],
            None => panic!("algorithm graph was built without predecessors"),
        }
    }

    /// Returns the number of predecessors of `u`.
    ///
    /// # Panics
    /// Panics if the graph was built without predecessor lists.
    pub fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_neighbors_of(u).len() as NumNodes
    }

    /// Returns the predecessor lists if they were built
    pub fn in_buffer(&self) -> Option<&SlicedBuffer<Node>> {
        self.in_nbs.as_ref()
    }

    /// Returns the successor lists
    pub fn out_buffer(&self) -> &SlicedBuffer<Node> {
        &self.out_nbs
    }

    /// Returns the mapping between identifiers and indices
    pub fn ids(&self) -> &IndexMap<I> {
        &self.ids
    }

    /// Consumes the snapshot and returns the mapping between identifiers and indices
    pub fn into_ids(self) -> IndexMap<I> {
        self.ids
    }

    /// Returns the index of `id` if it is a node of the graph
    pub fn index_of(&self, id: &I) -> Option<Node> {
        self.ids.index_of(id)
    }

    /// Returns the identifier of node `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn id_of(&self, u: Node) -> &I {
        &self.ids.ids()[u as usize]
    }
}

impl<I> AdjacencyList for AlgorithmGraph<I> {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }

    fn neighbors_of(&self, u: Node) -> &[Node] {
        &self.out_nbs[u]
    }
}
