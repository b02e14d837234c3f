//! Suffix-link computation.
//!
//! Both tables are filled in breadth-first order: every link points to a
//! strictly shallower node (or the root), so by the time a node is visited
//! everything its link depends on is final.

use std::ops::Index;

use super::char_trait::AutomatonChar;
use super::node_arena::NodeId;
use super::trie::Trie;

/// A dense mapping from every node of one trie to another node of the same trie.
///
/// Indexed by [`NodeId`]. Indexing with an id from a different trie is a
/// programming error and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkTable(Vec<NodeId>);

impl LinkTable {
    fn rooted(len: usize) -> Self {
        LinkTable(vec![NodeId::ROOT; len])
    }

    /// Number of entries, one per trie node.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table has no entries. Never the case for a built automaton.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the chain `self[node], self[self[node]], ...`, stopping
    /// before the root.
    pub fn chain(&self, node: NodeId) -> Chain<'_> {
        Chain {
            table: self,
            next: self[node],
        }
    }
}

impl Index<NodeId> for LinkTable {
    type Output = NodeId;

    #[inline]
    fn index(&self, id: NodeId) -> &NodeId {
        &self.0[id.index()]
    }
}

/// Iterator over a link chain; see [`LinkTable::chain`].
pub struct Chain<'a> {
    table: &'a LinkTable,
    next: NodeId,
}

impl Iterator for Chain<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.next.is_root() {
            return None;
        }
        let node = self.next;
        self.next = self.table[node];
        Some(node)
    }
}

/// Computes the maximal-suffix ("failure") link of every node.
///
/// The link of a node is the node spelling the longest proper suffix of its
/// path that is also a path in the trie, or the root when no non-empty
/// suffix qualifies. The root links to itself.
pub fn compute_maximal_suffixes<W, C: AutomatonChar>(trie: &Trie<W, C>) -> LinkTable {
    let mut maximal = LinkTable::rooted(trie.node_count());
    for (parent, child) in trie.breadth_first() {
        if parent.is_root() {
            continue;
        }
        let label = trie
            .node(child)
            .label()
            .expect("only the root is unlabeled");
        let mut candidate = maximal[parent];
        let link = loop {
            if let Some(next) = trie.child(candidate, label) {
                break next;
            }
            if candidate.is_root() {
                break NodeId::ROOT;
            }
            candidate = maximal[candidate];
        };
        maximal.0[child.index()] = link;
    }
    maximal
}

/// Computes the dictionary-suffix link of every node.
///
/// The link of a node is the first node of its maximal-suffix chain, the
/// node itself excluded, that carries a dictionary word; the root if there
/// is none.
pub fn compute_dictionary_suffixes<W, C: AutomatonChar>(
    trie: &Trie<W, C>,
    maximal: &LinkTable,
) -> LinkTable {
    assert_eq!(
        maximal.len(),
        trie.node_count(),
        "maximal-suffix table does not cover the trie"
    );
    let mut dictionary = LinkTable::rooted(trie.node_count());
    for (_, node) in trie.breadth_first() {
        let suffix = maximal[node];
        let link = if trie.node(suffix).is_word() {
            suffix
        } else {
            dictionary[suffix]
        };
        dictionary.0[node.index()] = link;
    }
    dictionary
}
