//! Shared fixtures for the integration tests: an edge-list graph and proptest strategies.

#![allow(dead_code)]

use std::collections::HashMap;

use lgraphs::ops::GraphView;
use proptest::prelude::*;

pub type Attrs = HashMap<String, f64>;

/// Graph over `u32` identifiers backed by a plain edge list
#[derive(Debug, Clone)]
pub struct EdgeListGraph {
    pub directed: bool,
    pub nodes: Vec<u32>,
    pub edges: Vec<(u32, u32, Attrs)>,
}

impl EdgeListGraph {
    /// Nodes `0..n` and the given weighted edges; endpoints must be below `n`
    pub fn new(directed: bool, n: u32, edges: Vec<(u32, u32, f64)>) -> Self {
        Self {
            directed,
            nodes: (0..n).collect(),
            edges: edges
                .into_iter()
                .map(|(u, v, w)| (u, v, Attrs::from([("weight".to_string(), w)])))
                .collect(),
        }
    }

    /// Edges as `(from, to)` pairs
    pub fn pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edges.iter().map(|&(u, v, _)| (u, v))
    }
}

impl GraphView for EdgeListGraph {
    type NodeId = u32;
    type Attrs = Attrs;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn nodes(&self) -> impl Iterator<Item = &u32> {
        self.nodes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = (&u32, &u32, &Attrs)> {
        self.edges.iter().map(|(u, v, a)| (u, v, a))
    }

    fn has_node(&self, id: &u32) -> bool {
        (*id as usize) < self.nodes.len()
    }

    fn successors(&self, id: &u32) -> impl Iterator<Item = &u32> {
        let id = *id;
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

    fn predecessors(&self, id: &u32) -> impl Iterator<Item = &u32> {
        let id = *id;
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

prop_compose! {
    /// Random graph with up to `max_n` nodes and non-negative integral weights
    pub fn arb_graph(directed: bool, max_n: u32)
        (n in 1..=max_n)
        (edges in prop::collection::vec((0..n, 0..n, 0u32..10), 0..(3 * n as usize)), n in Just(n))
        -> EdgeListGraph
    {
        let edges = edges.into_iter().map(|(u, v, w)| (u, v, w as f64)).collect();
        EdgeListGraph::new(directed, n, edges)
    }
}

prop_compose! {
    /// Random DAG: edges always point from the smaller to the larger node
    pub fn arb_dag(max_n: u32)
        (n in 1..=max_n)
        (edges in prop::collection::vec((0..n, 0..n), 0..(3 * n as usize)), n in Just(n))
        -> EdgeListGraph
    {
        let edges = edges
            .into_iter()
            .filter(|(u, v)| u != v)
            .map(|(u, v)| (u.min(v), u.max(v), 1.0))
            .collect();
        EdgeListGraph::new(true, n, edges)
    }
}
