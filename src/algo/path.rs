/*!
# Paths, Weights and Heuristics

Shared vocabulary of the pathfinding algorithms:
- [`PathResult`]: the node sequence of a found path and its total cost,
- [`EdgeWeight`]: the strategy that turns edge attributes into a numeric weight,
- [`Heuristic`]: the distance estimate guiding [`AStar`](super::AStar).

Strategies must be deterministic and free of side effects; otherwise repeated calls on
the same graph may produce different results.
*/

use std::borrow::Cow;

use crate::ops::AttributeMap;

/// A path `start ..= end` together with its total cost.
///
/// A path always contains at least one node; `start == end` yields a single node and
/// cost `0`. The absence of a path is expressed by `None`, never by an empty result.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<I> {
    pub nodes: Vec<I>,
    pub cost: f64,
}

impl<I> PathResult<I> {
    pub(crate) fn new(nodes: Vec<I>, cost: f64) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes, cost }
    }

    /// Returns the number of nodes on the path
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges on the path
    pub fn edge_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns the first node of the path
    pub fn start(&self) -> &I {
        &self.nodes[0]
    }

    /// Returns the last node of the path
    pub fn end(&self) -> &I {
        &self.nodes[self.nodes.len() - 1]
    }
}

/// Extracts the weight of an edge `from -> to` from its attributes.
///
/// Implemented for closures `Fn(&Attrs, &Id, &Id) -> f64` and for [`AttributeWeight`].
pub trait EdgeWeight<I, A> {
    fn weight(&self, attrs: &A, from: &I, to: &I) -> f64;
}

impl<I, A, F> EdgeWeight<I, A> for F
where
    F: Fn(&A, &I, &I) -> f64,
{
    fn weight(&self, attrs: &A, from: &I, to: &I) -> f64 {
        self(attrs, from, to)
    }
}

/// Reads the weight from a numeric attribute.
///
/// By default the attribute `"weight"` is used; edges without a numeric value under the
/// key weigh `1.0`.
///
/// # Examples
/// ```
/// use lgraphs::algo::*;
/// use std::collections::HashMap;
///
/// let attrs: HashMap<&str, f64> = [("cost", 4.0)].into_iter().collect();
/// let weight = AttributeWeight::key("cost");
/// assert_eq!(EdgeWeight::<&str, _>::weight(&weight, &attrs, &"a", &"b"), 4.0);
/// assert_eq!(EdgeWeight::<&str, _>::weight(&AttributeWeight::default(), &attrs, &"a", &"b"), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeWeight {
    key: Cow<'static, str>,
    fallback: f64,
}

impl Default for AttributeWeight {
    fn default() -> Self {
        Self {
            key: Cow::Borrowed("weight"),
            fallback: 1.0,
        }
    }
}

impl AttributeWeight {
    /// Reads the weight from attribute `key` instead of `"weight"`
    pub fn key(key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Sets the weight of edges that lack a numeric value under the key
    pub fn set_fallback(&mut self, fallback: f64) {
        self.fallback = fallback;
    }

    /// Sets the weight of edges that lack a numeric value under the key
    pub fn fallback(mut self, fallback: f64) -> Self {
        self.set_fallback(fallback);
        self
    }
}

impl<I, A> EdgeWeight<I, A> for AttributeWeight
where
    A: AttributeMap,
{
    fn weight(&self, attrs: &A, _from: &I, _to: &I) -> f64 {
        attrs.number(&self.key).unwrap_or(self.fallback)
    }
}

/// Estimates the remaining cost from `node` to `goal`.
///
/// Admissibility (never overestimating) is not verified; an inadmissible heuristic may
/// lead to suboptimal paths.
pub trait Heuristic<I> {
    fn estimate(&self, node: &I, goal: &I) -> f64;
}

impl<I, F> Heuristic<I> for F
where
    F: Fn(&I, &I) -> f64,
{
    fn estimate(&self, node: &I, goal: &I) -> f64 {
        self(node, goal)
    }
}

/// Heuristic that always estimates `0`; turns A* into Dijkstra
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl<I> Heuristic<I> for ZeroHeuristic {
    fn estimate(&self, _node: &I, _goal: &I) -> f64 {
        0.0
    }
}
