use std::{fmt::Display, str::FromStr};

use super::*;

/// Which edges count towards the degree of a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DegreeMode {
    /// Number of incoming edges
    In,
    /// Number of outgoing edges
    Out,
    /// `in + out` for directed graphs, the number of incident edges otherwise
    #[default]
    Total,
}

impl FromStr for DegreeMode {
    type Err = AlgoError;

    /// Parses `"in"`, `"out"` or `"total"`
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "total" => Ok(Self::Total),
            _ => Err(AlgoError::InvalidArgument(format!(
                "degree mode must be in, out, or total (got {s:?})"
            ))),
        }
    }
}

impl Display for DegreeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::In => "in",
            Self::Out => "out",
            Self::Total => "total",
        })
    }
}

/// Degree centrality of every node.
///
/// Degrees are adjacency counts, so parallel edges count once per copy. For undirected
/// graphs all three modes coincide. With normalization enabled, degrees are divided by
/// `n - 1` (graphs with fewer than two nodes are left unnormalized).
///
/// # Examples
/// ```
/// use lgraphs::algo::*;
///
/// let centrality = DegreeCentrality::new().mode("in".parse().unwrap()).normalized(true);
/// assert_eq!(centrality.get_mode(), DegreeMode::In);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DegreeCentrality {
    mode: DegreeMode,
    normalized: bool,
}

impl DegreeCentrality {
    /// Total degree without normalization
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the degree mode
    pub fn set_mode(&mut self, mode: DegreeMode) {
        self.mode = mode;
    }

    /// Sets the degree mode
    pub fn mode(mut self, mode: DegreeMode) -> Self {
        self.set_mode(mode);
        self
    }

    /// Returns the degree mode
    pub fn get_mode(&self) -> DegreeMode {
        self.mode
    }

    /// Enables division by `n - 1`
    pub fn set_normalized(&mut self, normalized: bool) {
        self.normalized = normalized;
    }

    /// Enables division by `n - 1`
    pub fn normalized(mut self, normalized: bool) -> Self {
        self.set_normalized(normalized);
        self
    }

    /// Computes the centrality of every node in `O(n + m)`
    pub fn compute<G>(&self, graph: &G) -> NodeScores<G::NodeId, f64>
    where
        G: GraphView,
    {
        let ag = AlgorithmGraph::new(graph, self.mode != DegreeMode::Out);
        let directed = ag.is_directed();

        let mut scores = ag
            .vertices()
            .map(|u| {
                let degree = match self.mode {
                    DegreeMode::Out => ag.degree_of(u),
                    DegreeMode::In => ag.in_degree_of(u),
                    DegreeMode::Total if directed => ag.degree_of(u) + ag.in_degree_of(u),
                    DegreeMode::Total => ag.degree_of(u),
                };
                degree as f64
            })
            .collect_vec();

        if self.normalized && scores.len() > 1 {
            let denominator = (scores.len() - 1) as f64;
            scores.iter_mut().for_each(|s| *s /= denominator);
        }

        NodeScores::new(ag.into_ids(), scores)
    }
}
