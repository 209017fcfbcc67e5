/*!
# Link Prediction

Neighborhood-based similarity scores that rank node pairs which are not yet connected.
All heuristics work on the undirected view of a graph: the neighbors of a node are the
union of its successors and predecessors (see [`Neighborhoods`]).

- [`CommonNeighbors`]: `|N(u) ∩ N(v)|`
- [`ResourceAllocation`]: `Σ_{w ∈ N(u) ∩ N(v)} 1 / deg(w)`
- [`AdamicAdar`]: `Σ_{w ∈ N(u) ∩ N(v), deg(w) ≥ 2} 1 / ln(deg(w))`
*/

use super::*;

/// A similarity heuristic over pairs of nodes.
///
/// Implementors only provide [`LinkPredictor::pair_score`] on dense indices; the
/// identifier-level operations are provided.
pub trait LinkPredictor {
    /// Scores the pair `(u, v)` given the neighbor sets of the graph
    fn pair_score(&self, nbs: &Neighborhoods, u: Node, v: Node) -> f64;

    /// Scores the pair `(u, v)`. Unknown nodes score `0.0`.
    fn score<G>(&self, graph: &G, u: &G::NodeId, v: &G::NodeId) -> f64
    where
        G: GraphView,
    {
        let ag = AlgorithmGraph::new(graph, graph.is_directed());
        let (Some(u), Some(v)) = (ag.index_of(u), ag.index_of(v)) else {
            return 0.0;
        };

        self.pair_score(&Neighborhoods::undirected(&ag), u, v)
    }

    /// Returns the (at most) `k` best candidates for a new link at `u`.
    ///
    /// Candidates are all nodes other than `u` that are not already neighbors of `u`
    /// and have a positive score. They are sorted by decreasing score; equal scores
    /// keep the node order of the graph. An unknown `u` yields an empty list.
    fn scores_from<G>(&self, graph: &G, u: &G::NodeId, k: usize) -> Vec<(G::NodeId, f64)>
    where
        G: GraphView,
    {
        let ag = AlgorithmGraph::new(graph, graph.is_directed());
        let Some(u) = ag.index_of(u) else {
            return Vec::new();
        };
        let nbs = Neighborhoods::undirected(&ag);

        nbs.vertices()
            .filter(|&v| v != u && !nbs.has_neighbor(u, v))
            .map(|v| (v, self.pair_score(&nbs, u, v)))
            .filter(|&(_, score)| score > 0.0)
            .sorted_by(|(_, a), (_, b)| b.total_cmp(a))
            .take(k)
            .map(|(v, score)| (ag.id_of(v).clone(), score))
            .collect()
    }
}

/// Number of common neighbors
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonNeighbors;

impl CommonNeighbors {
    pub fn new() -> Self {
        Self
    }
}

impl LinkPredictor for CommonNeighbors {
    fn pair_score(&self, nbs: &Neighborhoods, u: Node, v: Node) -> f64 {
        nbs.common_neighbors(u, v).count() as f64
    }
}

/// Sum of inverse degrees of the common neighbors
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceAllocation;

impl ResourceAllocation {
    pub fn new() -> Self {
        Self
    }
}

impl LinkPredictor for ResourceAllocation {
    fn pair_score(&self, nbs: &Neighborhoods, u: Node, v: Node) -> f64 {
        nbs.common_neighbors(u, v)
            .map(|w| nbs.degree_of(w))
            .filter(|&d| d > 0)
            .map(|d| 1.0 / d as f64)
            .sum()
    }
}

/// Sum of inverse logarithmic degrees of the common neighbors.
///
/// A common neighbor always has degree at least 2 unless `u == v`; neighbors of degree
/// below 2 would contribute an infinite term and are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdamicAdar;

impl AdamicAdar {
    pub fn new() -> Self {
        Self
    }
}

impl LinkPredictor for AdamicAdar {
    fn pair_score(&self, nbs: &Neighborhoods, u: Node, v: Node) -> f64 {
        nbs.common_neighbors(u, v)
            .map(|w| nbs.degree_of(w))
            .filter(|&d| d >= 2)
            .map(|d| 1.0 / (d as f64).ln())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestGraph;

    fn id(s: &str) -> String {
        TestGraph::id(s)
    }

    fn two_paths() -> TestGraph {
        // A-C-B and A-D-B, where C and D have one extra neighbor each
        TestGraph::undirected().edges_from(&[
            ("A", "C"),
            ("C", "B"),
            ("A", "D"),
            ("D", "B"),
            ("C", "E"),
            ("D", "F"),
        ])
    }

    fn names(scores: &[(String, f64)]) -> Vec<&str> {
        scores.iter().map(|(id, _)| id.as_str()).collect_vec()
    }

    #[test]
    fn pair_scores() {
        let graph = two_paths();

        assert_eq!(CommonNeighbors::new().score(&graph, &id("A"), &id("B")), 2.0);

        let ra = ResourceAllocation::new().score(&graph, &id("A"), &id("B"));
        assert!((ra - 2.0 / 3.0).abs() < 1e-12);

        let aa = AdamicAdar::new().score(&graph, &id("A"), &id("B"));
        assert!((aa - 2.0 / 3f64.ln()).abs() < 1e-12);
        assert!(aa > 1.8 && aa < 1.9);
    }

    #[test]
    fn single_common_neighbor() {
        let graph = TestGraph::undirected().edges_from(&[("A", "C"), ("C", "B")]);
        let aa = AdamicAdar::new().score(&graph, &id("A"), &id("B"));
        assert!((aa - 1.0 / 2f64.ln()).abs() < 1e-12);

        let ra = ResourceAllocation::new().score(&graph, &id("A"), &id("B"));
        assert_eq!(ra, 0.5);
    }

    #[test]
    fn no_overlap_and_unknown_nodes() {
        let graph = TestGraph::undirected().edges_from(&[("A", "C"), ("B", "D")]);
        for score in [
            CommonNeighbors::new().score(&graph, &id("A"), &id("B")),
            ResourceAllocation::new().score(&graph, &id("A"), &id("B")),
            AdamicAdar::new().score(&graph, &id("A"), &id("B")),
            AdamicAdar::new().score(&graph, &id("A"), &id("X")),
        ] {
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn directed_graphs_use_both_directions() {
        // A -> C -> B -> A
        let graph = TestGraph::directed().cycle(&["A", "C", "B"]);
        assert_eq!(CommonNeighbors::new().score(&graph, &id("A"), &id("B")), 1.0);
        assert!(AdamicAdar::new().score(&graph, &id("A"), &id("B")) > 0.0);
    }

    #[test]
    fn top_k() {
        let graph = TestGraph::undirected()
            .edges_from(&[("A", "C"), ("A", "D"), ("B", "C"), ("B", "D"), ("E", "C")])
            .node("F");

        let scores = AdamicAdar::new().scores_from(&graph, &id("A"), 5);
        assert_eq!(names(&scores), ["B", "E"]);
        assert!(scores[0].1 > scores[1].1);

        let scores = CommonNeighbors::new().scores_from(&graph, &id("A"), 1);
        assert_eq!(scores, [(id("B"), 2.0)]);

        assert!(CommonNeighbors::new()
            .scores_from(&graph, &id("A"), 0)
            .is_empty());
    }

    #[test]
    fn top_k_excludes_neighbors_and_breaks_ties_by_node_order() {
        let graph = TestGraph::undirected().cycle(&["A", "B", "C"]);
        assert!(ResourceAllocation::new()
            .scores_from(&graph, &id("A"), 5)
            .is_empty());

        let star = TestGraph::undirected().star("X", &["D", "B", "C", "A"]);
        let scores = CommonNeighbors::new().scores_from(&star, &id("A"), 10);
        assert_eq!(names(&scores), ["D", "B", "C"]);
    }

    #[test]
    fn top_k_unknown_or_empty() {
        assert!(AdamicAdar::new()
            .scores_from(&TestGraph::undirected(), &id("A"), 5)
            .is_empty());
        assert!(AdamicAdar::new()
            .scores_from(&two_paths(), &id("X"), 5)
            .is_empty());
    }
}
