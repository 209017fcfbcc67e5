/*!
# Graph Contract

The algorithms never own graph storage. Instead, they consume any type implementing
[`GraphView`], a minimal read-only view: node enumeration, edge enumeration with
attributes, successor/predecessor lookup and a directedness flag.

Edge attributes are opaque to the algorithms. Weighted algorithms read them through
an [`EdgeWeight`](crate::algo::EdgeWeight) strategy; the default strategy looks up a
numeric `"weight"` via [`AttributeMap`], which is implemented for the usual map types.
*/

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// Read-only view on a labelled graph supplied by the caller.
///
/// # Contract
/// - `nodes()` is finite and free of duplicates. Its order determines the dense
///   indices and thereby every tie-break inside the algorithms.
/// - For undirected graphs, `successors(u)` and `predecessors(u)` both list all
///   neighbors of `u`, and `edges()` lists each edge once in either orientation.
/// - The view must not change while an algorithm runs.
pub trait GraphView {
    /// Opaque node identifier
    type NodeId: Clone + Eq + Hash;

    /// Attribute bag attached to every edge
    type Attrs;

    /// Returns *true* if edges are oriented
    fn is_directed(&self) -> bool;

    /// Returns an iterator over all node identifiers
    fn nodes(&self) -> impl Iterator<Item = &Self::NodeId>;

    /// Returns an iterator over all edges `(from, to, attributes)`.
    /// Parallel edges are reported once per copy.
    fn edges(&self) -> impl Iterator<Item = (&Self::NodeId, &Self::NodeId, &Self::Attrs)>;

    /// Returns *true* if the node exists
    fn has_node(&self, id: &Self::NodeId) -> bool;

    /// Returns an iterator over the out-neighbors of `id` (all neighbors if undirected)
    fn successors(&self, id: &Self::NodeId) -> impl Iterator<Item = &Self::NodeId>;

    /// Returns an iterator over the in-neighbors of `id` (all neighbors if undirected)
    fn predecessors(&self, id: &Self::NodeId) -> impl Iterator<Item = &Self::NodeId>;

    /// Returns the attributes of the first edge `from -> to`, if any.
    ///
    /// The provided implementation scans `edges()`; storages with an edge index
    /// should override it.
    fn edge_attrs(&self, from: &Self::NodeId, to: &Self::NodeId) -> Option<&Self::Attrs> {
        let directed = self.is_directed();
        self.edges()
            .find(|(u, v, _)| (*u == from && *v == to) || (!directed && *u == to && *v == from))
            .map(|(_, _, attrs)| attrs)
    }
}

/// Dynamically typed attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    Text(String),
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

/// Values that may be interpreted as a number
pub trait AttrNumber {
    /// Returns the numeric interpretation of the value, if there is one
    fn as_number(&self) -> Option<f64>;
}

macro_rules! impl_attr_number {
    ($($t:ty),*) => {
        $(
            impl AttrNumber for $t {
                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_attr_number!(f64, f32, i64, i32, u64, u32, usize);

impl AttrNumber for AttrValue {
    fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Float(x) => Some(*x),
            AttrValue::Int(x) => Some(*x as f64),
            AttrValue::Bool(_) | AttrValue::Text(_) => None,
        }
    }
}

/// Numeric lookup in an attribute bag
pub trait AttributeMap {
    /// Returns the value stored under `key` if it exists and is numeric
    fn number(&self, key: &str) -> Option<f64>;
}

impl<K, V, S> AttributeMap for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: AttrNumber,
    S: BuildHasher,
{
    fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttrNumber::as_number)
    }
}

impl<K, V> AttributeMap for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AttrNumber,
{
    fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttrNumber::as_number)
    }
}

/// Graphs without edge attributes
impl AttributeMap for () {
    fn number(&self, _key: &str) -> Option<f64> {
        None
    }
}
