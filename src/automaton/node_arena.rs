//! A vector-backed arena for trie nodes.
//!
//! Nodes are never removed, so an index handed out by [`NodeArena::alloc`]
//! stays valid for the lifetime of the arena. Link tables use these indices
//! as node identities.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Stable identity of a node inside a [`NodeArena`].
///
/// Two structurally identical nodes always have different ids, which is what
/// makes ids safe to key link tables with.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root of every trie. Always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    /// True if this is the root node.
    #[inline]
    pub fn is_root(self) -> bool {
        self == NodeId::ROOT
    }

    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An append-only arena handing out [`NodeId`]s.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<T> {
    nodes: Vec<T>,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    /// Appends a value and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let id = u32::try_from(self.nodes.len()).expect("node arena exceeded u32::MAX nodes");
        self.nodes.push(value);
        NodeId(id)
    }

    /// Returns the number of values allocated in this arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over every allocated id in allocation order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        &self.nodes[id.index()]
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes[id.index()]
    }
}
