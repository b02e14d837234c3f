//! The Aho-Corasick automaton: a character trie plus its two suffix-link tables.
//!
//! Construction happens once, through [`Automaton::build`] or a
//! [`Builder`](builder::Builder). Afterwards the automaton is immutable and
//! any number of scans may share it.

/// Dictionary ingestion: the [`IntoWord`] trait, the builder and file loading.
pub mod builder;
/// Trait for types that can serve as automaton transition labels.
pub mod char_trait;
/// Compact sorted edge lists for trie nodes.
pub mod children;
/// Maximal-suffix and dictionary-suffix link tables.
pub mod links;
/// Scanning texts: transitions, per-step outputs and match iterators.
pub mod matcher;
/// Vector-backed node arena.
pub(crate) mod node_arena;
/// The character trie.
pub mod trie;

pub use builder::{Builder, IntoWord};
pub use char_trait::AutomatonChar;
pub use links::LinkTable;
pub use matcher::{FindIter, Match, Outputs, StreamSearch};
pub use node_arena::NodeId;
pub use trie::{Trie, TrieNode};

/// A dictionary compiled into an Aho-Corasick state machine.
///
/// `W` is the dictionary item type reported back on a match and `C` is the
/// character type the automaton transitions on.
///
/// ```
/// use phrasefinder::Automaton;
///
/// let automaton = Automaton::from_words(["he", "she", "his", "hers"]);
/// let found: Vec<&str> = automaton
///     .find_phrases_in("he hers shehis")
///     .into_iter()
///     .copied()
///     .collect();
/// assert_eq!(found, ["he", "he", "hers", "she", "he", "his"]);
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<W, C: AutomatonChar = char> {
    trie: Trie<W, C>,
    maximal: LinkTable,
    dictionary: LinkTable,
}

impl<W, C: AutomatonChar> Automaton<W, C> {
    /// Builds an automaton from `entries`, indexing each under `representation(entry)`.
    ///
    /// Entries are inserted in order; when two share a representation the
    /// later one is kept.
    pub fn build<R>(entries: impl IntoIterator<Item = W>, representation: impl Fn(&W) -> R) -> Self
    where
        R: IntoWord<C>,
    {
        let mut builder = Builder::new(representation);
        builder.extend(entries);
        builder.build()
    }

    /// Builds an automaton over entries that are their own representation.
    pub fn from_words(words: impl IntoIterator<Item = W>) -> Self
    where
        W: IntoWord<C> + Clone,
    {
        Self::build(words, W::clone)
    }

    /// Computes both link tables for a finished trie.
    pub fn from_trie(trie: Trie<W, C>) -> Self {
        let maximal = links::compute_maximal_suffixes(&trie);
        let dictionary = links::compute_dictionary_suffixes(&trie, &maximal);
        log::debug!("computed suffix links for {} nodes", trie.node_count());
        Automaton {
            trie,
            maximal,
            dictionary,
        }
    }

    /// The underlying trie.
    #[inline]
    pub fn trie(&self) -> &Trie<W, C> {
        &self.trie
    }

    /// The maximal-suffix link table.
    #[inline]
    pub fn maximal_suffixes(&self) -> &LinkTable {
        &self.maximal
    }

    /// The dictionary-suffix link table.
    #[inline]
    pub fn dictionary_suffixes(&self) -> &LinkTable {
        &self.dictionary
    }

    /// The maximal-suffix link of `node`.
    #[inline]
    pub fn maximal_suffix(&self, node: NodeId) -> NodeId {
        self.maximal[node]
    }

    /// The dictionary-suffix link of `node`.
    #[inline]
    pub fn dictionary_suffix(&self, node: NodeId) -> NodeId {
        self.dictionary[node]
    }

    /// True if the dictionary is empty, so nothing can ever match.
    pub fn is_empty(&self) -> bool {
        self.trie.node_count() == 1
    }
}
