/*!
# Topological Ordering

Kahn's algorithm with a FIFO queue: nodes without incoming edges are seeded in index
order, and a node is enqueued as soon as its last incoming edge is removed. Among all
valid orders this yields the one that prefers nodes discovered earlier.
*/

use std::collections::VecDeque;

use tracing::debug;

use super::*;

/// Iterator implementing topological ordering over a directed graph.
///
/// - Initializes the queue with all nodes of in-degree 0 in increasing index order.
/// - Repeatedly dequeues a node, decreasing the in-degrees of its successors,
///   and enqueues successors whose in-degree drops to 0.
///
/// If the graph contains a cycle, iteration terminates early: no node on (or behind) a
/// cycle is ever emitted. Parallel edges are counted once per copy; a self-loop keeps
/// its node from ever being emitted.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Constructs a new topological search on the given directed graph,
    /// initializing in-degree counts and collecting the initial set of
    /// zero in-degree nodes.
    pub fn new(graph: &'a G) -> Self {
        let mut in_degs: Vec<NumNodes> = vec![0; graph.len()];
        for u in graph.vertices() {
            for &v in graph.neighbors_of(u) {
                // u -> v
                in_degs[v as usize] += 1;
            }
        }

        let queue = graph
            .vertices()
            .filter(|&u| in_degs[u as usize] == 0)
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    /// Returns the next node in topological order, if available.
    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for &v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

/// Topological sort of a directed graph
#[derive(Debug, Clone, Copy, Default)]
pub struct TopologicalSort;

impl TopologicalSort {
    pub fn new() -> Self {
        Self
    }

    /// Returns all nodes such that for every edge `u -> v`, `u` is listed before `v`.
    ///
    /// # Errors
    /// - [`AlgoError::InvalidArgument`] if the graph is undirected.
    /// - [`AlgoError::CycleDetected`] if the graph contains a directed cycle
    ///   (self-loops included).
    pub fn sort<G>(&self, graph: &G) -> Result<Vec<G::NodeId>>
    where
        G: GraphView,
    {
        if !graph.is_directed() {
            return Err(AlgoError::requires_directed("Topological sort"));
        }

        let ag = AlgorithmGraph::new(graph, false);
        let order = TopoSearch::new(&ag).collect_vec();

        if order.len() != ag.len() {
            debug!(
                processed = order.len(),
                total = ag.len(),
                "cycle detected during topological sort"
            );
            return Err(AlgoError::CycleDetected {
                processed: order.len(),
                total: ag.len(),
            });
        }

        Ok(ag.ids().ids_of(order))
    }
}
