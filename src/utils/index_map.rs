/*!
# Index Map

Bijection between the caller's node identifiers and dense indices `0..n`.
Indices are handed out in first-seen order, so a fixed `nodes()` order always yields
the same mapping and thereby the same tie-breaks in every algorithm.
*/

use std::hash::Hash;

use fxhash::FxHashMap;

use crate::{
    node::{Node, NumNodes},
    ops::GraphView,
};

/// Bidirectional mapping `Id <-> Node`
#[derive(Debug, Clone)]
pub struct IndexMap<I> {
    index_of: FxHashMap<I, Node>,
    ids: Vec<I>,
}

impl<I> Default for IndexMap<I> {
    fn default() -> Self {
        Self {
            index_of: FxHashMap::default(),
            ids: Vec::new(),
        }
    }
}

impl<I> IndexMap<I>
where
    I: Clone + Eq + Hash,
{
    /// Creates an empty map with room for `n` identifiers
    pub fn with_capacity(n: usize) -> Self {
        Self {
            index_of: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            ids: Vec::with_capacity(n),
        }
    }

    /// Numbers the nodes of `graph` in the order `nodes()` reports them.
    /// Does not look at any adjacency.
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: GraphView<NodeId = I>,
    {
        let mut map = Self::default();
        for id in graph.nodes() {
            map.insert(id.clone());
        }
        map
    }

    /// Returns the index of `id`, assigning the next free index if `id` is new.
    ///
    /// # Panics
    /// Panics if more than `NumNodes::MAX - 1` identifiers are inserted.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::utils::IndexMap;
    ///
    /// let mut map = IndexMap::default();
    /// assert_eq!(map.insert("a"), 0);
    /// assert_eq!(map.insert("b"), 1);
    /// assert_eq!(map.insert("a"), 0);
    /// assert_eq!(map.id_of(1), Some(&"b"));
    /// ```
    pub fn insert(&mut self, id: I) -> Node {
        if let Some(&idx) = self.index_of.get(&id) {
            return idx;
        }

        let idx = self.ids.len() as Node;
        assert!(idx < NumNodes::MAX, "too many nodes for a dense index");
        self.index_of.insert(id.clone(), idx);
        self.ids.push(id);
        idx
    }

    /// Returns the index of `id` if it is known
    pub fn index_of(&self, id: &I) -> Option<Node> {
        self.index_of.get(id).copied()
    }

    /// Returns the identifier with index `idx`
    pub fn id_of(&self, idx: Node) -> Option<&I> {
        self.ids.get(idx as usize)
    }

    /// Returns *true* if `id` is known
    pub fn contains(&self, id: &I) -> bool {
        self.index_of.contains_key(id)
    }

    /// Translates a sequence of indices back to cloned identifiers.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn ids_of<N>(&self, nodes: N) -> Vec<I>
    where
        N: IntoIterator<Item = Node>,
    {
        nodes
            .into_iter()
            .map(|u| self.ids[u as usize].clone())
            .collect()
    }

    /// Number of identifiers in the map
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns *true* if the map is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns all identifiers in index order
    pub fn ids(&self) -> &[I] {
        &self.ids
    }
}
