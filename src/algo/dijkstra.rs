/*!
# Dijkstra's Algorithm

Single-pair shortest paths for non-negative edge weights.

The frontier is a binary min-heap of `(priority, node)` entries with ties broken by the
smaller node index. Improving a tentative distance pushes a fresh entry instead of
updating the old one; entries of already settled nodes are skipped on extraction (lazy
deletion). The search stops as soon as the target is settled.

The engine is shared with [`AStar`](super::AStar), which only adds a heuristic term to
the priority.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use ordered_float::OrderedFloat;
use tracing::trace;

use super::*;

/// Dijkstra's algorithm parameterized by an edge weight strategy.
///
/// # Examples
/// ```
/// use lgraphs::algo::*;
/// # use lgraphs::ops::GraphView;
/// # fn run<G: GraphView<NodeId = String>>(graph: &G) -> lgraphs::error::Result<()>
/// # where G::Attrs: lgraphs::ops::AttributeMap {
/// let path = Dijkstra::new().find_path(graph, &"A".to_string(), &"C".to_string())?;
/// if let Some(path) = path {
///     println!("{:?} costs {}", path.nodes, path.cost);
/// }
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dijkstra<W = AttributeWeight> {
    weight: W,
}

impl Dijkstra {
    /// Creates a search that reads weights from the `"weight"` attribute (default `1.0`)
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W> Dijkstra<W> {
    /// Replaces the weight strategy
    pub fn set_weight(&mut self, weight: W) {
        self.weight = weight;
    }

    /// Replaces the weight strategy, possibly changing its type
    pub fn weight<W2>(self, weight: W2) -> Dijkstra<W2> {
        Dijkstra { weight }
    }

    /// Computes a cheapest path from `start` to `end`.
    ///
    /// Returns `Ok(None)` if either endpoint is unknown or `end` is unreachable.
    ///
    /// # Errors
    /// [`AlgoError::NegativeWeight`] as soon as a negative edge is examined.
    pub fn find_path<G>(
        &self,
        graph: &G,
        start: &G::NodeId,
        end: &G::NodeId,
    ) -> Result<Option<PathResult<G::NodeId>>>
    where
        G: GraphView,
        W: EdgeWeight<G::NodeId, G::Attrs>,
    {
        shortest_path(graph, &self.weight, start, end, |_, _| 0.0)
    }
}

/// Runs the best-first search shared by Dijkstra and A* on the external graph.
/// `heuristic(node, goal)` is added to the tentative distance of every pushed entry.
pub(crate) fn shortest_path<G, W, H>(
    graph: &G,
    weight: &W,
    start: &G::NodeId,
    end: &G::NodeId,
    heuristic: H,
) -> Result<Option<PathResult<G::NodeId>>>
where
    G: GraphView,
    W: EdgeWeight<G::NodeId, G::Attrs>,
    H: Fn(&G::NodeId, &G::NodeId) -> f64,
{
    if !graph.has_node(start) || !graph.has_node(end) {
        return Ok(None);
    }

    let ids = IndexMap::from_graph(graph);
    let (Some(source), Some(target)) = (ids.index_of(start), ids.index_of(end)) else {
        return Ok(None);
    };

    let adj = WeightedAdjacency::from_edges(graph, &ids, |attrs, from, to| {
        weight.weight(attrs, from, to)
    });

    let found = best_first_search(&adj, source, target, |u| {
        heuristic(&ids.ids()[u as usize], end)
    })?;

    Ok(found.map(|(nodes, cost)| PathResult::new(ids.ids_of(nodes), cost)))
}

/// Best-first search from `source` until `target` is settled.
///
/// Returns the node sequence and the accumulated edge weight of the path, or `None` if
/// `target` is unreachable.
pub(crate) fn best_first_search<H>(
    adj: &WeightedAdjacency,
    source: Node,
    target: Node,
    heuristic: H,
) -> Result<Option<(Vec<Node>, f64)>>
where
    H: Fn(Node) -> f64,
{
    let n = adj.len();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<OptionalNode>> = vec![None; n];
    let mut settled = NodeBitSet::new(n as NumNodes);
    let mut heap = BinaryHeap::new();

    distances[source as usize] = 0.0;
    heap.push((Reverse(OrderedFloat(heuristic(source))), Reverse(source)));

    while let Some((_, Reverse(u))) = heap.pop() {
        if settled.set_bit(u) {
            continue;
        }

        if u == target {
            let cost = distances[u as usize];
            trace!(settled = settled.cardinality(), cost, "target settled");
            return Ok(Some((walk_back(&predecessors, target), cost)));
        }

        let dist_u = distances[u as usize];
        for &WeightedNeighbor { node: v, weight } in adj.neighbors_of(u) {
            if weight < 0.0 {
                return Err(AlgoError::NegativeWeight { weight });
            }

            if settled.get_bit(v) {
                continue;
            }

            let candidate = dist_u + weight;
            if candidate < distances[v as usize] {
                distances[v as usize] = candidate;
                predecessors[v as usize] = OptionalNode::new(u);
                heap.push((Reverse(OrderedFloat(candidate + heuristic(v))), Reverse(v)));
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestAttrs, TestGraph};

    fn id(s: &str) -> String {
        TestGraph::id(s)
    }

    fn simple_path() -> TestGraph {
        TestGraph::directed().path(&["A", "B", "C"], &[1.0, 2.0])
    }

    #[test]
    fn simple_path_cost() {
        let path = Dijkstra::new()
            .find_path(&simple_path(), &id("A"), &id("C"))
            .unwrap()
            .unwrap();
        assert_eq!(path.nodes, ["A", "B", "C"]);
        assert_eq!(path.cost, 3.0);
        assert_eq!(path.edge_count(), 2);
    }

    #[test]
    fn weighted_search_reads_only_edges() {
        let base = simple_path();
        let graph = crate::testing::CountingGraph::new(&base);

        let path = Dijkstra::new()
            .find_path(&graph, &id("A"), &id("C"))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost, 3.0);

        let path = AStar::new()
            .find_path(&graph, &id("A"), &id("C"))
            .unwrap()
            .unwrap();
        assert_eq!(path.nodes, ["A", "B", "C"]);

        assert_eq!(graph.adjacency_queries(), 0);
    }

    #[test]
    fn prefers_cheaper_detour() {
        // A -> C directly costs 10, via B only 3
        let graph = TestGraph::directed()
            .weighted_edge("A", "C", 10.0)
            .weighted_edge("A", "B", 1.0)
            .weighted_edge("B", "C", 2.0);
        let path = Dijkstra::new()
            .find_path(&graph, &id("A"), &id("C"))
            .unwrap()
            .unwrap();
        assert_eq!(path.nodes, ["A", "B", "C"]);
        assert_eq!(path.cost, 3.0);
    }

    #[test]
    fn same_start_and_end() {
        let path = Dijkstra::new()
            .find_path(&simple_path(), &id("B"), &id("B"))
            .unwrap()
            .unwrap();
        assert_eq!(path.nodes, ["B"]);
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn missing_paths() {
        let graph = simple_path();
        let dijkstra = Dijkstra::new();

        // edges are directed
        assert_eq!(dijkstra.find_path(&graph, &id("C"), &id("A")), Ok(None));
        assert_eq!(dijkstra.find_path(&graph, &id("A"), &id("X")), Ok(None));
        assert_eq!(dijkstra.find_path(&graph, &id("X"), &id("A")), Ok(None));

        let disconnected = TestGraph::undirected().edge("A", "B").edge("C", "D");
        assert_eq!(dijkstra.find_path(&disconnected, &id("A"), &id("D")), Ok(None));
    }

    #[test]
    fn undirected_edges_work_both_ways() {
        let graph = TestGraph::undirected().path(&["A", "B", "C"], &[1.0, 2.0]);
        let path = Dijkstra::new()
            .find_path(&graph, &id("C"), &id("A"))
            .unwrap()
            .unwrap();
        assert_eq!(path.nodes, ["C", "B", "A"]);
        assert_eq!(path.cost, 3.0);
    }

    #[test]
    fn negative_weight_fails() {
        let graph = TestGraph::directed()
            .weighted_edge("A", "B", 1.0)
            .weighted_edge("B", "C", -2.0);
        assert_eq!(
            Dijkstra::new().find_path(&graph, &id("A"), &id("C")),
            Err(AlgoError::NegativeWeight { weight: -2.0 })
        );
    }

    #[test]
    fn stops_before_unexamined_negative_edge() {
        // the negative edge leaves the target and is never examined
        let graph = TestGraph::directed()
            .weighted_edge("A", "B", 1.0)
            .weighted_edge("B", "C", -2.0);
        assert!(
            Dijkstra::new()
                .find_path(&graph, &id("A"), &id("B"))
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn custom_weights() {
        let graph = TestGraph::directed()
            .attr_edge("A", "B", &[("cost", 5.0), ("weight", 1.0)])
            .attr_edge("A", "C", &[("cost", 1.0), ("weight", 9.0)])
            .attr_edge("C", "B", &[("cost", 1.0), ("weight", 9.0)]);

        let by_cost = Dijkstra::new()
            .weight(AttributeWeight::key("cost"))
            .find_path(&graph, &id("A"), &id("B"))
            .unwrap()
            .unwrap();
        assert_eq!(by_cost.nodes, ["A", "C", "B"]);
        assert_eq!(by_cost.cost, 2.0);

        let hops = Dijkstra::new()
            .weight(|_: &TestAttrs, _: &String, _: &String| 1.0)
            .find_path(&graph, &id("A"), &id("B"))
            .unwrap()
            .unwrap();
        assert_eq!(hops.nodes, ["A", "B"]);
        assert_eq!(hops.cost, 1.0);
    }

    #[test]
    fn missing_weight_defaults_to_one() {
        let graph = TestGraph::directed().edges_from(&[("A", "B"), ("B", "C")]);
        let path = Dijkstra::new()
            .find_path(&graph, &id("A"), &id("C"))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost, 2.0);
    }

    #[test]
    fn ties_prefer_first_seen_nodes() {
        // two equally cheap routes A-B-D and A-C-D
        let graph = TestGraph::directed().edges_from(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        for _ in 0..3 {
            let path = Dijkstra::new()
                .find_path(&graph, &id("A"), &id("D"))
                .unwrap()
                .unwrap();
            assert_eq!(path.nodes, ["A", "B", "D"]);
        }
    }
}
