/*!
# Node Representation

Users address nodes by their *label* (any type implementing [`Label`]). Internally, every graph
interns its labels and assigns each of them a dense id `Node = u32` in insertion order.
All algorithms run on these dense ids, which allows bitsets and plain vectors for bookkeeping,
and translate back to labels only when producing their results.
*/

use std::{fmt::Debug, hash::Hash};

use stream_bitset::bitset::BitSetImpl;

/// Dense node ids range from `0` to `n - 1` in the order the labels were first inserted
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Everything that can be used as a node label.
///
/// Labels are compared and hashed for lookups and cloned whenever an algorithm returns them.
/// `Debug` is required so that missing labels can be named in errors.
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T> Label for T where T: Clone + Eq + Hash + Debug {}
