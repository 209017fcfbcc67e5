use tracing::debug;

use super::*;

/// Bellman-Ford shortest paths; admits negative edge weights.
///
/// Performs at most `n - 1` rounds relaxing every edge and stops early after a round
/// without improvement. A final scan detects negative cycles reachable from the source.
/// Edges are taken from the edge enumeration of the graph, so parallel edges are relaxed
/// individually and undirected edges in both directions. Consequently, a single negative
/// undirected edge already forms a negative cycle.
#[derive(Debug, Clone, Default)]
pub struct BellmanFord<W = AttributeWeight> {
    weight: W,
}

impl BellmanFord {
    /// Creates a search that reads weights from the `"weight"` attribute (default `1.0`)
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W> BellmanFord<W> {
    /// Replaces the weight strategy
    pub fn set_weight(&mut self, weight: W) {
        self.weight = weight;
    }

    /// Replaces the weight strategy, possibly changing its type
    pub fn weight<W2>(self, weight: W2) -> BellmanFord<W2> {
        BellmanFord { weight }
    }

    /// Computes a cheapest path from `start` to `end`.
    ///
    /// Returns `Ok(None)` if either endpoint is unknown or `end` is unreachable.
    ///
    /// # Errors
    /// [`AlgoError::NegativeCycle`] if a negative cycle is reachable from `start`,
    /// regardless of whether it lies on a path to `end`.
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
        let ids = IndexMap::from_graph(graph);
        let (Some(source), Some(target)) = (ids.index_of(start), ids.index_of(end)) else {
            return Ok(None);
        };

        let adj = WeightedAdjacency::from_edges(graph, &ids, |attrs, from, to| {
            self.weight.weight(attrs, from, to)
        });

        let (distances, predecessors) = relax(&adj, source)?;
        if distances[target as usize] == f64::INFINITY {
            return Ok(None);
        }

        Ok(Some(PathResult::new(
            ids.ids_of(walk_back(&predecessors, target)),
            distances[target as usize],
        )))
    }
}

/// Computes distances and predecessor pointers of all nodes reachable from `source`.
/// Unreachable nodes keep distance `INFINITY` and no predecessor.
fn relax(
    adj: &WeightedAdjacency,
    source: Node,
) -> Result<(Vec<f64>, Vec<Option<OptionalNode>>)> {
    let n = adj.len();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<OptionalNode>> = vec![None; n];
    distances[source as usize] = 0.0;

    let mut rounds = 0;
    while rounds + 1 < n {
        rounds += 1;

        let mut updated = false;
        for WeightedEdge {
            edge: Edge(u, v),
            weight,
        } in adj.edges()
        {
            let dist_u = distances[u as usize];
            if dist_u == f64::INFINITY {
                continue;
            }

            if dist_u + weight < distances[v as usize] {
                distances[v as usize] = dist_u + weight;
                predecessors[v as usize] = OptionalNode::new(u);
                updated = true;
            }
        }

        if !updated {
            break;
        }
    }

    let negative_cycle = adj.edges().any(|WeightedEdge { edge: Edge(u, v), weight }| {
        let dist_u = distances[u as usize];
        dist_u != f64::INFINITY && dist_u + weight < distances[v as usize]
    });

    debug!(rounds, negative_cycle, "bellman-ford relaxation finished");

    if negative_cycle {
        return Err(AlgoError::NegativeCycle);
    }

    Ok((distances, predecessors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestAttrs, TestGraph};

    fn id(s: &str) -> String {
        TestGraph::id(s)
    }

    #[test]
    fn positive_weights() {
        let graph = TestGraph::directed()
            .weighted_edge("A", "B", 4.0)
            .weighted_edge("A", "C", 2.0)
            .weighted_edge("B", "C", 3.0)
            .weighted_edge("B", "D", 2.0)
            .weighted_edge("C", "D", 4.0)
            .weighted_edge("C", "E", 3.0)
            .weighted_edge("D", "E", 1.0);

        let path = BellmanFord::new()
            .find_path(&graph, &id("A"), &id("E"))
            .unwrap()
            .unwrap();
        assert_eq!(path.nodes, ["A", "C", "E"]);
        assert_eq!(path.cost, 5.0);
        assert_eq!(
            Dijkstra::new().find_path(&graph, &id("A"), &id("E")),
            Ok(Some(path))
        );
    }

    #[test]
    fn parallel_edges_and_no_adjacency_queries() {
        let base = TestGraph::directed()
            .weighted_edge("A", "B", 5.0)
            .weighted_edge("A", "B", 1.0);
        let graph = crate::testing::CountingGraph::new(&base);

        let path = BellmanFord::new()
            .find_path(&graph, &id("A"), &id("B"))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost, 1.0);
        assert_eq!(graph.adjacency_queries(), 0);
    }

    #[test]
    fn negative_edge_reconstructs_full_path() {
        let graph = TestGraph::directed()
            .weighted_edge("A", "B", 1.0)
            .weighted_edge("A", "C", 4.0)
            .weighted_edge("B", "C", -3.0)
            .weighted_edge("B", "D", 2.0)
            .weighted_edge("C", "D", 3.0);

        let path = BellmanFord::new()
            .find_path(&graph, &id("A"), &id("D"))
            .unwrap()
            .unwrap();
        assert_eq!(path.nodes, ["A", "B", "C", "D"]);
        assert_eq!(path.cost, 1.0);
    }

    #[test]
    fn negative_cycle() {
        let graph = TestGraph::directed()
            .weighted_edge("A", "B", 1.0)
            .weighted_edge("B", "C", -3.0)
            .weighted_edge("C", "B", 1.0);

        assert_eq!(
            BellmanFord::new().find_path(&graph, &id("A"), &id("C")),
            Err(AlgoError::NegativeCycle)
        );
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let graph = TestGraph::directed()
            .weighted_edge("A", "B", 1.0)
            .weighted_edge("C", "D", -3.0)
            .weighted_edge("D", "C", 1.0);

        let path = BellmanFord::new()
            .find_path(&graph, &id("A"), &id("B"))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost, 1.0);
    }

    #[test]
    fn undirected_negative_edge_is_a_cycle() {
        let graph = TestGraph::undirected().weighted_edge("A", "B", -1.0);
        assert_eq!(
            BellmanFord::new().find_path(&graph, &id("A"), &id("B")),
            Err(AlgoError::NegativeCycle)
        );
    }

    #[test]
    fn unreachable_and_unknown() {
        let graph = TestGraph::directed().weighted_edge("A", "B", 1.0).node("C");
        let bf = BellmanFord::new();
        assert_eq!(bf.find_path(&graph, &id("A"), &id("C")), Ok(None));
        assert_eq!(bf.find_path(&graph, &id("A"), &id("X")), Ok(None));
    }

    #[test]
    fn single_node() {
        let graph = TestGraph::undirected().node("A");
        let path = BellmanFord::new()
            .find_path(&graph, &id("A"), &id("A"))
            .unwrap()
            .unwrap();
        assert_eq!(path.nodes, ["A"]);
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn custom_weight_and_zero_weights() {
        let graph = TestGraph::directed()
            .attr_edge("A", "B", &[("cost", 5.0), ("weight", 1.0)])
            .attr_edge("A", "C", &[("cost", 2.0), ("weight", 3.0)]);
        let path = BellmanFord::new()
            .weight(|attrs: &TestAttrs, _: &String, _: &String| {
                attrs.get("cost").copied().unwrap_or(1.0)
            })
            .find_path(&graph, &id("A"), &id("C"))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost, 2.0);

        let graph = TestGraph::directed()
            .weighted_edge("A", "B", 0.0)
            .weighted_edge("B", "C", 1.0);
        let path = BellmanFord::new()
            .find_path(&graph, &id("A"), &id("C"))
            .unwrap()
            .unwrap();
        assert_eq!(path.nodes, ["A", "B", "C"]);
        assert_eq!(path.cost, 1.0);
    }
}
