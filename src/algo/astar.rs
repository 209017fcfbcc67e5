use super::{dijkstra::shortest_path, *};

/// A* search: Dijkstra's algorithm with the frontier ordered by `g(v) + h(v, goal)`.
///
/// With [`ZeroHeuristic`] (the default) it returns exactly what [`Dijkstra`] returns.
/// The heuristic is evaluated on the caller's identifiers. Its admissibility is not
/// verified; a heuristic that overestimates may produce a suboptimal path.
///
/// # Examples
/// ```
/// use lgraphs::algo::*;
///
/// // grid nodes named by their coordinates
/// let manhattan = |u: &(i32, i32), v: &(i32, i32)| ((u.0 - v.0).abs() + (u.1 - v.1).abs()) as f64;
/// let astar = AStar::new().heuristic(manhattan);
/// # let _ = astar;
/// ```
#[derive(Debug, Clone, Default)]
pub struct AStar<W = AttributeWeight, H = ZeroHeuristic> {
    weight: W,
    heuristic: H,
}

impl AStar {
    /// Creates a search with `"weight"` attributes and the zero heuristic
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W, H> AStar<W, H> {
    /// Replaces the weight strategy
    pub fn set_weight(&mut self, weight: W) {
        self.weight = weight;
    }

    /// Replaces the weight strategy, possibly changing its type
    pub fn weight<W2>(self, weight: W2) -> AStar<W2, H> {
        AStar {
            weight,
            heuristic: self.heuristic,
        }
    }

    /// Replaces the heuristic
    pub fn set_heuristic(&mut self, heuristic: H) {
        self.heuristic = heuristic;
    }

    /// Replaces the heuristic, possibly changing its type
    pub fn heuristic<H2>(self, heuristic: H2) -> AStar<W, H2> {
        AStar {
            weight: self.weight,
            heuristic,
        }
    }

    /// Computes a path from `start` to `end` guided by the heuristic.
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
        H: Heuristic<G::NodeId>,
    {
        shortest_path(graph, &self.weight, start, end, |node, goal| {
            self.heuristic.estimate(node, goal)
        })
    }
}
