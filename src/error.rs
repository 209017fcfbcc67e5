//! Error types shared by all algorithms.
//!
//! Only genuine failures are errors. A missing path or a disconnected graph is a
//! normal outcome and is reported as `Ok(None)` by the respective algorithm.

use thiserror::Error;

/// Failure conditions raised by the algorithms of this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgoError {
    /// Malformed configuration or a graph orientation the algorithm cannot handle.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Dijkstra and A* only accept non-negative edge weights.
    #[error("negative edge weight {weight} encountered")]
    NegativeWeight { weight: f64 },

    /// Bellman-Ford found an edge that still relaxes after `n - 1` rounds.
    #[error("graph contains a negative cycle reachable from the source")]
    NegativeCycle,

    /// Kahn's algorithm could not place every node.
    #[error("graph contains a cycle: only {processed} of {total} nodes could be ordered")]
    CycleDetected { processed: usize, total: usize },
}

impl AlgoError {
    pub(crate) fn requires_directed(algorithm: &str) -> Self {
        Self::InvalidArgument(format!("{algorithm} requires a directed graph"))
    }

    pub(crate) fn requires_undirected(algorithm: &str) -> Self {
        Self::InvalidArgument(format!("{algorithm} requires an undirected graph"))
    }
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, AlgoError>;
