/*!
# PageRank

Power iteration with uniform teleportation. Nodes without outgoing edges (dangling
nodes) would otherwise swallow their rank; their total rank is redistributed evenly over
all nodes in every iteration, which keeps the rank vector a probability distribution.
*/

use tracing::{debug, trace};

use super::*;

/// Iterative PageRank.
///
/// Every iteration computes
/// `rank'(u) = (1 - d) / n + d * (sum_{v -> u} rank(v) / outdeg(v) + dangling / n)`
/// and stops once the L1 distance between two consecutive rank vectors drops below the
/// tolerance, or after the maximum number of iterations.
///
/// # Examples
/// ```
/// use lgraphs::algo::*;
///
/// let pagerank = PageRank::new()
///     .damping_factor(0.9)
///     .unwrap()
///     .max_iterations(50)
///     .tolerance(1e-8);
/// assert!(PageRank::new().damping_factor(1.5).is_err());
/// # let _ = pagerank;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRank {
    damping_factor: f64,
    max_iterations: usize,
    tolerance: f64,
}

/// Convergence information of a PageRank run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankStats {
    /// Number of performed iterations
    pub iterations: usize,
    /// *true* if the tolerance was reached before the iteration limit
    pub converged: bool,
    /// L1 change of the last iteration
    pub delta: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl PageRank {
    /// Damping `0.85`, at most `100` iterations, tolerance `1e-6`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the damping factor.
    ///
    /// # Errors
    /// [`AlgoError::InvalidArgument`] if `damping_factor` is not within `[0, 1]`.
    pub fn set_damping_factor(&mut self, damping_factor: f64) -> Result<()> {
        check_damping_factor(damping_factor)?;
        self.damping_factor = damping_factor;
        Ok(())
    }

    /// Sets the damping factor.
    ///
    /// # Errors
    /// [`AlgoError::InvalidArgument`] if `damping_factor` is not within `[0, 1]`.
    pub fn damping_factor(mut self, damping_factor: f64) -> Result<Self> {
        self.set_damping_factor(damping_factor)?;
        Ok(self)
    }

    /// Sets the maximum number of iterations
    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.max_iterations = max_iterations;
    }

    /// Sets the maximum number of iterations
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.set_max_iterations(max_iterations);
        self
    }

    /// Sets the L1 tolerance below which the iteration stops
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
    }

    /// Sets the L1 tolerance below which the iteration stops
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.set_tolerance(tolerance);
        self
    }

    /// Computes the rank of every node. An empty graph yields empty scores.
    ///
    /// # Errors
    /// [`AlgoError::InvalidArgument`] if the damping factor is not within `[0, 1]`.
    pub fn compute<G>(&self, graph: &G) -> Result<NodeScores<G::NodeId, f64>>
    where
        G: GraphView,
    {
        self.compute_with_stats(graph).map(|(scores, _)| scores)
    }

    /// Like [`PageRank::compute`], but additionally reports convergence information
    pub fn compute_with_stats<G>(
        &self,
        graph: &G,
    ) -> Result<(NodeScores<G::NodeId, f64>, PageRankStats)>
    where
        G: GraphView,
    {
        check_damping_factor(self.damping_factor)?;

        let ag = AlgorithmGraph::new(graph, true);
        let (ranks, stats) = self.iterate(&ag);

        debug!(
            nodes = ag.len(),
            iterations = stats.iterations,
            converged = stats.converged,
            delta = stats.delta,
            "pagerank finished"
        );

        Ok((NodeScores::new(ag.into_ids(), ranks), stats))
    }

    fn iterate<I>(&self, ag: &AlgorithmGraph<I>) -> (Vec<f64>, PageRankStats)
    where
        I: Clone + Eq + std::hash::Hash,
    {
        let mut stats = PageRankStats {
            iterations: 0,
            converged: false,
            delta: 0.0,
        };

        let n = ag.len();
        if n == 0 {
            stats.converged = true;
            return (Vec::new(), stats);
        }

        let d = self.damping_factor;
        let uniform = 1.0 / n as f64;
        let out_degrees = ag.vertices().map(|u| ag.degree_of(u)).collect_vec();

        let mut ranks = vec![uniform; n];
        let mut next = vec![0.0; n];

        while stats.iterations < self.max_iterations {
            stats.iterations += 1;

            let dangling: f64 = ag
                .vertices()
                .filter(|&u| out_degrees[u as usize] == 0)
                .map(|u| ranks[u as usize])
                .sum();
            let base = (1.0 - d) * uniform + d * dangling * uniform;

            for u in ag.vertices() {
                let incoming: f64 = ag
                    .in_neighbors_of(u)
                    .iter()
                    .map(|&v| ranks[v as usize] / out_degrees[v as usize] as f64)
                    .sum();
                next[u as usize] = base + d * incoming;
            }

            stats.delta = ranks
                .iter()
                .zip(&next)
                .map(|(old, new)| (new - old).abs())
                .sum();
            std::mem::swap(&mut ranks, &mut next);

            trace!(iteration = stats.iterations, delta = stats.delta, dangling);

            if stats.delta < self.tolerance {
                stats.converged = true;
                break;
            }
        }

        (ranks, stats)
    }
}

fn check_damping_factor(damping_factor: f64) -> Result<()> {
    if damping_factor.is_valid_probility() {
        Ok(())
    } else {
        Err(AlgoError::InvalidArgument(format!(
            "damping factor must be between 0 and 1 (got {damping_factor})"
        )))
    }
}
