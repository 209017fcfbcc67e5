/*!
# Traversals

Breadth-first and depth-first search over dense indices. Both share
[`TraversalSearch`], which is generic over its frontier: a [`VecDeque`] yields BFS order,
a [`Vec`] yields DFS order. [`Bfs`] and [`Dfs`] run the searches on a [`GraphView`] and
translate the visiting order back to identifiers.
*/

use std::collections::VecDeque;

use super::*;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` stores the nodes that are still to be visited. The implementation
/// determines the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer {
    /// *true* if nodes are marked visited when they enter the frontier, *false* if they
    /// are marked when they leave it
    const MARKS_ON_PUSH: bool;

    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    const MARKS_ON_PUSH: bool = true;

    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    const MARKS_ON_PUSH: bool = false;

    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) and a bitset of visited nodes. Each
/// node reachable from the start is yielded exactly once.
///
/// A queue marks nodes as soon as they are enqueued. A stack marks nodes when they are
/// popped and pushes the unvisited neighbors in reverse adjacency order, so the
/// resulting order equals that of a recursive DFS scanning neighbors from left to right.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        if S::MARKS_ON_PUSH {
            visited.set_bit(start);
        }

        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Returns *true* if `u` was already visited (or, for BFS, discovered)
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if S::MARKS_ON_PUSH {
            let u = self.sequencer.pop()?;
            for &v in self.graph.neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.sequencer.push(v);
                }
            }
            return Some(u);
        }

        loop {
            let u = self.sequencer.pop()?;
            if self.visited.set_bit(u) {
                // pushed more than once before its first visit
                continue;
            }

            for &v in self.graph.neighbors_of(u).iter().rev() {
                if !self.visited.get_bit(v) {
                    self.sequencer.push(v);
                }
            }
            return Some(u);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.len() - self.visited.cardinality() as usize;
        if S::MARKS_ON_PUSH {
            (self.sequencer.cardinality(), Some(self.sequencer.cardinality() + remaining))
        } else {
            (0, Some(remaining))
        }
    }
}

/// Provides BFS and DFS directly on dense adjacency lists
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

/// Breadth-first traversal of a [`GraphView`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl Bfs {
    pub fn new() -> Self {
        Self
    }

    /// Returns the nodes reachable from `start` in BFS order, starting with `start`.
    /// An unknown start yields an empty list.
    pub fn traverse<G>(&self, graph: &G, start: &G::NodeId) -> Vec<G::NodeId>
    where
        G: GraphView,
    {
        let ag = AlgorithmGraph::new(graph, false);
        match ag.index_of(start) {
            Some(s) => ag.ids().ids_of(ag.bfs(s)),
            None => Vec::new(),
        }
    }
}

/// Depth-first traversal of a [`GraphView`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Dfs;

impl Dfs {
    pub fn new() -> Self {
        Self
    }

    /// Returns the nodes reachable from `start` in DFS preorder, starting with `start`.
    /// An unknown start yields an empty list.
    pub fn traverse<G>(&self, graph: &G, start: &G::NodeId) -> Vec<G::NodeId>
    where
        G: GraphView,
    {
        let ag = AlgorithmGraph::new(graph, false);
        match ag.index_of(start) {
            Some(s) => ag.ids().ids_of(ag.dfs(s)),
            None => Vec::new(),
        }
    }
}
