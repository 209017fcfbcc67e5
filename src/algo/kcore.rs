/*!
# K-Core Decomposition

The `k`-core of a graph is its maximal subgraph in which every node has at least `k`
neighbors. The core number of a node is the largest `k` such that the node belongs to the
`k`-core.

We compute all core numbers by peeling in `O(n + m)` using the bin sort of Batagelj and
Zaversnik: nodes are kept in an array sorted by their current degree, with the start of
every degree bucket recorded separately. Removing a minimum-degree node and lowering the
degree of a neighbor are then both constant-time swaps.

Cores are defined on the undirected view of a graph: for directed graphs, the neighbors of
a node are the union of its successors and predecessors. Parallel edges and self-loops do
not count.
*/

use super::*;

/// Computes the core number of every node
#[derive(Debug, Clone, Copy, Default)]
pub struct KCore;

impl KCore {
    pub fn new() -> Self {
        Self
    }

    /// Returns the core number of every node; isolated nodes have core number `0`.
    pub fn compute<G>(&self, graph: &G) -> NodeScores<G::NodeId, NumNodes>
    where
        G: GraphView,
    {
        let ag = AlgorithmGraph::new(graph, graph.is_directed());
        let cores = core_numbers(&Neighborhoods::undirected(&ag));
        NodeScores::new(ag.into_ids(), cores)
    }
}

/// Core numbers of an adjacency list whose neighborhoods are free of duplicates and
/// self-loops.
pub fn core_numbers<G>(graph: &G) -> Vec<NumNodes>
where
    G: AdjacencyList,
{
    let n = graph.len();
    if n == 0 {
        return Vec::new();
    }

    let mut degrees = graph.vertices().map(|u| graph.degree_of(u)).collect_vec();
    let max_degree = degrees.iter().copied().max().unwrap_or(0) as usize;

    // bin_start[d] is the position of the first node with degree d in `order`
    let mut bin_start = vec![0usize; max_degree + 2];
    for &d in &degrees {
        bin_start[d as usize + 1] += 1;
    }
    for d in 1..bin_start.len() {
        bin_start[d] += bin_start[d - 1];
    }

    // nodes sorted by degree, ties in index order
    let mut order = vec![0 as Node; n];
    let mut position = vec![0usize; n];
    {
        let mut next = bin_start.clone();
        for u in graph.vertices() {
            let d = degrees[u as usize] as usize;
            order[next[d]] = u;
            position[u as usize] = next[d];
            next[d] += 1;
        }
    }

    for i in 0..n {
        let u = order[i];
        let du = degrees[u as usize];

        for &v in graph.neighbors_of(u) {
            let dv = degrees[v as usize];
            if dv <= du {
                // already peeled or peeled at the same level
                continue;
            }

            // swap v with the first node of its bucket and shrink the bucket by one
            let pos_v = position[v as usize];
            let pos_w = bin_start[dv as usize];
            let w = order[pos_w];
            if v != w {
                order.swap(pos_v, pos_w);
                position[v as usize] = pos_w;
                position[w as usize] = pos_v;
            }
            bin_start[dv as usize] += 1;
            degrees[v as usize] -= 1;
        }
    }

    degrees
}
