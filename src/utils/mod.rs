/*!
# Utilities

Provides a small set of helpers shared by the algorithms:
- [`IndexMap`]: the bijection between caller identifiers and dense indices,
- [`SlicedBuffer`](self::sliced_buffer::SlicedBuffer): the CSR storage behind every adjacency list,
- [`NodeScores`]: the per-node result container of the centrality and core algorithms,
- [`Probability`]: validation of parameters that must lie in `[0, 1]`.
*/

use std::{collections::HashMap, hash::Hash};

use num::{One, Zero};

use crate::node::Node;

pub mod index_map;
pub mod sliced_buffer;

pub use index_map::IndexMap;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// One value per node of a graph, kept in dense-index order.
///
/// Every node of the analysed graph is covered exactly once, isolated nodes included.
/// Iteration follows the `nodes()` order of the graph, which keeps results
/// reproducible across calls.
#[derive(Debug, Clone)]
pub struct NodeScores<I, T> {
    ids: IndexMap<I>,
    values: Vec<T>,
}

impl<I, T> PartialEq for NodeScores<I, T>
where
    I: Clone + Eq + Hash,
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.ids.ids() == other.ids.ids() && self.values == other.values
    }
}

impl<I, T> NodeScores<I, T>
where
    I: Clone + Eq + Hash,
{
    pub(crate) fn new(ids: IndexMap<I>, values: Vec<T>) -> Self {
        debug_assert_eq!(ids.len(), values.len());
        Self { ids, values }
    }

    /// Returns the value of node `id`, or `None` if the node is unknown
    pub fn get(&self, id: &I) -> Option<&T> {
        self.ids
            .index_of(id)
            .map(|u| &self.values[u as usize])
    }

    /// Returns an iterator over `(id, value)` in node order
    pub fn iter(&self) -> impl Iterator<Item = (&I, &T)> + '_ {
        self.ids.ids().iter().zip(self.values.iter())
    }

    /// Returns the values in node order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of scored nodes
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns *true* if the graph had no nodes
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the scores and returns `(id, value)` pairs in node order
    pub fn into_vec(self) -> Vec<(I, T)> {
        self.ids.ids().iter().cloned().zip(self.values).collect()
    }

    /// Consumes the scores and returns them as a `HashMap`
    pub fn into_hash_map(self) -> HashMap<I, T> {
        self.into_vec().into_iter().collect()
    }

    /// Returns the value stored for dense index `u`
    pub fn value_at(&self, u: Node) -> &T {
        &self.values[u as usize]
    }
}

impl<I, T> std::ops::Index<&I> for NodeScores<I, T>
where
    I: Clone + Eq + Hash,
{
    type Output = T;

    /// # Panics
    /// Panics if `id` is not a node of the scored graph.
    fn index(&self, id: &I) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("node is not part of the scored graph"),
        }
    }
}
