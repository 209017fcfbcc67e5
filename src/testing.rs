//! Minimal in-memory [`GraphView`] used by the unit tests of this crate.

use std::cell::Cell;

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::ops::GraphView;

pub(crate) type TestAttrs = FxHashMap<String, f64>;

/// Edge-list backed graph with `String` identifiers and numeric attributes.
///
/// Nodes are reported in the order they were first mentioned, edges in
/// insertion order. Parallel edges are kept.
#[derive(Debug, Clone, Default)]
pub(crate) struct TestGraph {
    directed: bool,
    nodes: Vec<String>,
    edges: Vec<(String, String, TestAttrs)>,
}

impl TestGraph {
    pub(crate) fn directed() -> Self {
        Self {
            directed: true,
            ..Default::default()
        }
    }

    pub(crate) fn undirected() -> Self {
        Self::default()
    }

    pub(crate) fn add_node(&mut self, id: &str) {
        if !self.nodes.iter().any(|u| u == id) {
            self.nodes.push(id.to_string());
        }
    }

    pub(crate) fn add_edge_with(&mut self, from: &str, to: &str, attrs: TestAttrs) {
        self.add_node(from);
        self.add_node(to);
        self.edges.push((from.to_string(), to.to_string(), attrs));
    }

    pub(crate) fn node(mut self, id: &str) -> Self {
        self.add_node(id);
        self
    }

    /// Adds an edge without attributes
    pub(crate) fn edge(mut self, from: &str, to: &str) -> Self {
        self.add_edge_with(from, to, TestAttrs::default());
        self
    }

    pub(crate) fn weighted_edge(self, from: &str, to: &str, weight: f64) -> Self {
        self.attr_edge(from, to, &[("weight", weight)])
    }

    pub(crate) fn attr_edge(mut self, from: &str, to: &str, attrs: &[(&str, f64)]) -> Self {
        let attrs = attrs.iter().map(|&(k, v)| (k.to_string(), v)).collect();
        self.add_edge_with(from, to, attrs);
        self
    }

    pub(crate) fn edges_from(self, edges: &[(&str, &str)]) -> Self {
        edges
            .iter()
            .fold(self, |graph, &(from, to)| graph.edge(from, to))
    }

    /// Path `ids[0] - ids[1] - ...` with `weights[i]` on the i-th edge
    pub(crate) fn path(self, ids: &[&str], weights: &[f64]) -> Self {
        assert_eq!(ids.len(), weights.len() + 1);
        ids.iter()
            .tuple_windows()
            .zip(weights)
            .fold(self, |graph, ((from, to), &w)| {
                graph.weighted_edge(from, to, w)
            })
    }

    /// Cycle over `ids`, closing the last node back to the first
    pub(crate) fn cycle(self, ids: &[&str]) -> Self {
        ids.iter()
            .circular_tuple_windows()
            .fold(self, |graph, (from, to)| graph.edge(from, to))
    }

    /// Edges from `center` to every leaf
    pub(crate) fn star(self, center: &str, leaves: &[&str]) -> Self {
        leaves
            .iter()
            .fold(self.node(center), |graph, leaf| graph.edge(center, leaf))
    }

    /// All edges `ids[i] -> ids[j]` for `i != j` (`i < j` if undirected)
    pub(crate) fn complete(self, ids: &[&str]) -> Self {
        let directed = self.directed;
        ids.iter()
            .tuple_combinations()
            .fold(self, |graph, (a, b)| {
                let graph = graph.edge(a, b);
                if directed { graph.edge(b, a) } else { graph }
            })
    }

    pub(crate) fn id(s: &str) -> String {
        s.to_string()
    }
}

impl GraphView for TestGraph {
    type NodeId = String;
    type Attrs = TestAttrs;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn nodes(&self) -> impl Iterator<Item = &String> {
        self.nodes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = (&String, &String, &TestAttrs)> {
        self.edges.iter().map(|(u, v, a)| (u, v, a))
    }

    fn has_node(&self, id: &String) -> bool {
        self.nodes.contains(id)
    }

    fn successors(&self, id: &String) -> impl Iterator<Item = &String> {
        let id = id.clone();
        self.edges.iter().filter_map(move |(u, v, _)| {
            if *u == id {
                Some(v)
            } else if !self.directed && *v == id {
                Some(u)
            } else {
                None
            }
        })
    }

    fn predecessors(&self, id: &String) -> impl Iterator<Item = &String> {
        let id = id.clone();
        self.edges.iter().filter_map(move |(u, v, _)| {
            if *v == id {
                Some(u)
            } else if !self.directed && *u == id {
                Some(v)
            } else {
                None
            }
        })
    }
}

/// Wraps a [`TestGraph`] and counts the calls to `successors` and `predecessors`.
pub(crate) struct CountingGraph<'a> {
    inner: &'a TestGraph,
    adjacency_queries: Cell<usize>,
}

impl<'a> CountingGraph<'a> {
    pub(crate) fn new(inner: &'a TestGraph) -> Self {
        Self {
            inner,
            adjacency_queries: Cell::new(0),
        }
    }

    pub(crate) fn adjacency_queries(&self) -> usize {
        self.adjacency_queries.get()
    }
}

impl GraphView for CountingGraph<'_> {
    type NodeId = String;
    type Attrs = TestAttrs;

    fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }

    fn nodes(&self) -> impl Iterator<Item = &String> {
        self.inner.nodes()
    }

    fn edges(&self) -> impl Iterator<Item = (&String, &String, &TestAttrs)> {
        self.inner.edges()
    }

    fn has_node(&self, id: &String) -> bool {
        self.inner.has_node(id)
    }

    fn successors(&self, id: &String) -> impl Iterator<Item = &String> {
        self.adjacency_queries.set(self.adjacency_queries.get() + 1);
        self.inner.successors(id)
    }

    fn predecessors(&self, id: &String) -> impl Iterator<Item = &String> {
        self.adjacency_queries.set(self.adjacency_queries.get() + 1);
        self.inner.predecessors(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_shapes() {
        let g = TestGraph::directed().path(&["A", "B", "C"], &[1.0, 2.0]);
        assert_eq!(g.nodes().collect_vec(), ["A", "B", "C"]);
        assert_eq!(g.successors(&TestGraph::id("A")).collect_vec(), ["B"]);
        assert_eq!(g.predecessors(&TestGraph::id("A")).count(), 0);

        let g = TestGraph::undirected().cycle(&["A", "B", "C"]);
        assert_eq!(g.edges().count(), 3);
        assert_eq!(g.successors(&TestGraph::id("A")).collect_vec(), ["B", "C"]);

        let counted = CountingGraph::new(&g);
        assert_eq!(counted.successors(&TestGraph::id("B")).count(), 2);
        assert_eq!(counted.predecessors(&TestGraph::id("B")).count(), 2);
        assert_eq!(counted.adjacency_queries(), 2);

        let g = TestGraph::directed().complete(&["A", "B", "C"]);
        assert_eq!(g.edges().count(), 6);

        let g = TestGraph::undirected().edge("A", "A");
        assert_eq!(g.successors(&TestGraph::id("A")).count(), 1);
    }
}
