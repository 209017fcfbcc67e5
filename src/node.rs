/*!
# Dense Node Indices

Every algorithm in this crate runs on dense indices `0..n` that the adapter assigns
to the caller's node identifiers in first-seen order. We choose `Node = u32`: graphs
handled here rarely exceed `2^32` nodes, and halving the index width keeps the
adjacency buffers and the per-node work arrays compact.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Dense index of a node inside an [`AlgorithmGraph`](crate::repr::AlgorithmGraph)
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet over dense node indices, used for visited-markers
pub type NodeBitSet = BitSetImpl<Node>;

/// Compact replacement for `Option<Node>` in per-node arrays such as predecessor
/// or parent pointers. `INVALID_NODE` plays the role of `None`, so a
/// `Vec<Option<OptionalNode>>` costs exactly four bytes per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNode(NonZero<Node>);

impl OptionalNode {
    /// Returns `Some(OptionalNode)` if `n != INVALID_NODE` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ INVALID_NODE) {
            Some(inner) => Some(OptionalNode(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ INVALID_NODE
    }
}

/// Walks a predecessor array from `end` back to its root and returns the visited
/// nodes in root-to-`end` order.
///
/// The array must be acyclic along the walk, which holds for every predecessor
/// array produced by a strictly improving relaxation.
pub(crate) fn walk_back(predecessors: &[Option<OptionalNode>], end: Node) -> Vec<Node> {
    let mut path = vec![end];
    let mut node = end;
    while let Some(pred) = predecessors[node as usize] {
        node = pred.get();
        path.push(node);
    }
    path.reverse();
    path
}
