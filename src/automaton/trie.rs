//! The character trie underlying the automaton.

use std::collections::VecDeque;

use super::builder::IntoWord;
use super::char_trait::AutomatonChar;
use super::children::{ChildIter, Children};
use super::node_arena::{NodeArena, NodeId};

/// A node of the trie.
///
/// The root is the only node without a label and never carries a word.
#[derive(Clone, Debug)]
pub struct TrieNode<W, C: AutomatonChar> {
    label: Option<C>,
    parent: Option<NodeId>,
    depth: usize,
    word: Option<W>,
    children: Children<C>,
}

impl<W, C: AutomatonChar> TrieNode<W, C> {
    fn root() -> Self {
        TrieNode {
            label: None,
            parent: None,
            depth: 0,
            word: None,
            children: Children::None,
        }
    }

    fn branch(label: C, parent: NodeId, depth: usize) -> Self {
        TrieNode {
            label: Some(label),
            parent: Some(parent),
            depth,
            word: None,
            children: Children::None,
        }
    }

    /// The label of the edge leading into this node; `None` for the root.
    #[inline]
    pub fn label(&self) -> Option<C> {
        self.label
    }

    /// The parent node; `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Length of the root-to-node path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The dictionary word ending at this node, if any.
    #[inline]
    pub fn word(&self) -> Option<&W> {
        self.word.as_ref()
    }

    /// True if a dictionary entry ends at this node.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.word.is_some()
    }

    /// True for the root node.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.label.is_none()
    }

    /// Returns the outgoing edges of this node.
    #[inline]
    pub fn children(&self) -> &Children<C> {
        &self.children
    }
}

/// An ordered prefix tree of `C`, with a dictionary word of type `W` on every
/// node whose path equals an inserted entry.
#[derive(Clone, Debug)]
pub struct Trie<W, C: AutomatonChar = char> {
    nodes: NodeArena<TrieNode<W, C>>,
}

impl<W, C: AutomatonChar> Default for Trie<W, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, C: AutomatonChar> Trie<W, C> {
    /// Creates a trie holding only the root.
    pub fn new() -> Self {
        let mut nodes = NodeArena::new();
        let root = nodes.alloc(TrieNode::root());
        debug_assert!(root.is_root());
        Trie { nodes }
    }

    /// Inserts `word` under the path spelled by `representation`.
    ///
    /// Returns the node the entry ends at, or `None` if the representation
    /// is empty, in which case nothing is inserted. Re-inserting an existing
    /// path replaces the word stored there.
    pub fn insert(&mut self, representation: impl IntoWord<C>, word: W) -> Option<NodeId> {
        let chars = representation.collect_word();
        let mut node = NodeId::ROOT;
        for &ch in &chars {
            node = self.child_or_insert(node, ch);
        }
        if node.is_root() {
            return None;
        }
        if self.nodes[node].word.replace(word).is_some() {
            log::trace!("entry {chars:?} replaces the word previously stored at {node:?}");
        }
        Some(node)
    }

    fn child_or_insert(&mut self, parent: NodeId, ch: C) -> NodeId {
        if let Some(child) = self.nodes[parent].children.get(ch) {
            return child;
        }
        let depth = self.nodes[parent].depth + 1;
        let child = self.nodes.alloc(TrieNode::branch(ch, parent, depth));
        self.nodes[parent].children.insert(ch, child);
        child
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode<W, C> {
        &self.nodes[id]
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &TrieNode<W, C> {
        &self.nodes[NodeId::ROOT]
    }

    /// Total number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over every node id in allocation order, root first.
    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.nodes.ids()
    }

    /// Returns the child of `id` along the edge labeled `ch`.
    #[inline]
    pub fn child(&self, id: NodeId, ch: C) -> Option<NodeId> {
        self.nodes[id].children.get(ch)
    }

    /// Returns an iterator over the edges leaving `id`, in label order.
    #[inline]
    pub fn children(&self, id: NodeId) -> ChildIter<'_, C> {
        self.nodes[id].children.iter()
    }

    /// The dictionary word stored at `id`, if any.
    #[inline]
    pub fn word(&self, id: NodeId) -> Option<&W> {
        self.nodes[id].word.as_ref()
    }

    /// Length of the path from the root to `id`.
    #[inline]
    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes[id].depth
    }

    /// Reconstructs the root-to-node path of `id`.
    pub fn path(&self, id: NodeId) -> Vec<C> {
        let mut path = Vec::with_capacity(self.depth(id));
        let mut node = &self.nodes[id];
        while let (Some(label), Some(parent)) = (node.label, node.parent) {
            path.push(label);
            node = &self.nodes[parent];
        }
        path.reverse();
        path
    }

    /// Returns the node reached by walking `sequence` from the root.
    pub fn lookup(&self, sequence: impl IntoIterator<Item = C>) -> Option<NodeId> {
        sequence
            .into_iter()
            .try_fold(NodeId::ROOT, |node, ch| self.child(node, ch))
    }

    /// True if `sequence` is exactly the path of an inserted entry.
    pub fn contains(&self, sequence: impl IntoIterator<Item = C>) -> bool {
        self.lookup(sequence)
            .is_some_and(|node| self.nodes[node].is_word())
    }

    /// Iterates over every stored word together with the node it ends at.
    pub fn words(&self) -> impl Iterator<Item = (NodeId, &W)> + '_ {
        self.nodes
            .ids()
            .filter_map(|id| self.nodes[id].word.as_ref().map(|word| (id, word)))
    }

    /// Returns a level-order iterator over all `(parent, child)` edges.
    ///
    /// Every parent's own incoming edge is yielded before its outgoing edges,
    /// and siblings come in label order. Each call starts a fresh traversal.
    pub fn breadth_first(&self) -> BreadthFirst<'_, W, C> {
        let mut queue = VecDeque::with_capacity(self.node_count());
        queue.extend(self.children(NodeId::ROOT).map(|(_, child)| (NodeId::ROOT, child)));
        BreadthFirst { trie: self, queue }
    }
}

/// Level-order iterator over the edges of a [`Trie`]; see [`Trie::breadth_first`].
pub struct BreadthFirst<'t, W, C: AutomatonChar> {
    trie: &'t Trie<W, C>,
    queue: VecDeque<(NodeId, NodeId)>,
}

impl<W, C: AutomatonChar> Iterator for BreadthFirst<'_, W, C> {
    type Item = (NodeId, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let (parent, child) = self.queue.pop_front()?;
        self.queue
            .extend(self.trie.children(child).map(|(_, grandchild)| (child, grandchild)));
        Some((parent, child))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every non-root node is yielded exactly once.
        (self.queue.len(), Some(self.trie.node_count() - 1))
    }
}
