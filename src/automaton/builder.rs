use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use smallvec::SmallVec;

use super::char_trait::AutomatonChar;
use super::node_arena::NodeId;
use super::trie::Trie;
use super::Automaton;
use crate::error::{Error, Result};

/// Trait for types that can be used as the character sequence of a dictionary entry.
///
/// Implemented for common string and sequence types so that a representation
/// function can return them directly without manual conversion.
pub trait IntoWord<C: AutomatonChar> {
    /// Collects this word into a character buffer.
    fn collect_word(self) -> SmallVec<[C; 32]>;
}

// String types → char

impl IntoWord<char> for &str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &&str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: AutomatonChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: AutomatonChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: AutomatonChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: AutomatonChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: AutomatonChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

/// Accumulates dictionary entries into a trie and finalizes them into an [`Automaton`].
///
/// Entries are indexed under the character sequence returned by the
/// representation function. When two entries share a representation the
/// later one wins. Entries with an empty representation are skipped.
///
/// ```
/// use phrasefinder::automaton::builder::Builder;
///
/// let mut builder: Builder<&str, char, _> = Builder::new(|w: &&str| w.to_string());
/// builder.add("he");
/// builder.extend(["she", "his", "hers"]);
/// let automaton = builder.build();
///
/// assert_eq!(automaton.find_phrases_in("ushers"), [&"she", &"he", &"hers"]);
/// ```
pub struct Builder<W, C: AutomatonChar, F> {
    trie: Trie<W, C>,
    representation: F,
    entries: usize,
    skipped: usize,
}

impl<W, C, F, R> Builder<W, C, F>
where
    C: AutomatonChar,
    F: Fn(&W) -> R,
    R: IntoWord<C>,
{
    /// Creates an empty builder using `representation` to index entries.
    pub fn new(representation: F) -> Self {
        Builder {
            trie: Trie::new(),
            representation,
            entries: 0,
            skipped: 0,
        }
    }

    /// Adds one dictionary entry.
    ///
    /// Returns the node the entry ends at, or `None` if its representation
    /// is empty.
    pub fn add(&mut self, entry: W) -> Option<NodeId> {
        let chars = (self.representation)(&entry);
        let node = self.trie.insert(chars, entry);
        match node {
            Some(_) => self.entries += 1,
            None => self.skipped += 1,
        }
        node
    }

    /// Adds every entry of `entries`, in order.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = W>) {
        for entry in entries {
            self.add(entry);
        }
    }

    /// Finalizes construction and returns the bare trie.
    pub fn build_trie(self) -> Trie<W, C> {
        if self.skipped > 0 {
            log::debug!("skipped {} entries with an empty representation", self.skipped);
        }
        log::debug!(
            "built trie with {} nodes from {} entries",
            self.trie.node_count(),
            self.entries
        );
        self.trie
    }

    /// Finalizes construction, computes the suffix links and returns the automaton.
    pub fn build(self) -> Automaton<W, C> {
        Automaton::from_trie(self.build_trie())
    }
}

/// Builds a trie from `entries`, indexing each under `representation(entry)`.
pub fn build_trie<W, C, R>(
    entries: impl IntoIterator<Item = W>,
    representation: impl Fn(&W) -> R,
) -> Trie<W, C>
where
    C: AutomatonChar,
    R: IntoWord<C>,
{
    let mut builder = Builder::new(representation);
    builder.extend(entries);
    builder.build_trie()
}

/// Reads a phrase dictionary from a text file.
///
/// One phrase per line. Trailing whitespace is trimmed, empty lines are
/// skipped and lines starting with '#' are treated as comments.
///
/// # Examples
///
/// ```no_run
/// use phrasefinder::automaton::builder::read_phrases;
///
/// let phrases = read_phrases("cuisines.txt").unwrap();
/// ```
pub fn read_phrases(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut phrases = Vec::new();

    // Reuse one buffer across lines instead of allocating per line with `lines()`.
    let mut buf = String::with_capacity(80);
    loop {
        buf.clear();
        let bytes_read = reader.read_line(&mut buf).map_err(|e| Error::io(path, e))?;
        if bytes_read == 0 {
            break;
        }
        let phrase = buf.trim_end();
        if !phrase.is_empty() && !is_comment(phrase) {
            phrases.push(phrase.to_owned());
        }
    }
    log::debug!("read {} phrases from {}", phrases.len(), path.display());
    Ok(phrases)
}

/// Reads a phrase dictionary from `path` and builds an automaton over it.
///
/// See [`read_phrases`] for the file format.
pub fn build_automaton_from_file<R>(
    path: impl AsRef<Path>,
    representation: impl Fn(&String) -> R,
) -> Result<Automaton<String>>
where
    R: IntoWord<char>,
{
    let phrases = read_phrases(path)?;
    Ok(Automaton::build(phrases, representation))
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
