use std::ops::Range;

use super::char_trait::AutomatonChar;
use super::node_arena::NodeId;
use super::Automaton;

/// A dictionary word found in a scanned text.
///
/// Offsets count characters (`C` values), not bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<'a, W> {
    word: &'a W,
    start: usize,
    end: usize,
}

impl<'a, W> Match<'a, W> {
    /// The dictionary item that matched.
    #[inline]
    pub fn word(&self) -> &'a W {
        self.word
    }

    /// Offset of the first matched character.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last matched character.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of matched characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: dictionary entries are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched character range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl<W, C: AutomatonChar> Automaton<W, C> {
    /// The state reached from `state` on input `ch`.
    ///
    /// Follows the edge labeled `ch` if there is one; otherwise falls back
    /// along maximal-suffix links until some node has such an edge. Ends at
    /// the root when not even the root does.
    pub fn next_state(&self, state: NodeId, ch: C) -> NodeId {
        let mut node = state;
        loop {
            if let Some(next) = self.trie().child(node, ch) {
                return next;
            }
            if node.is_root() {
                return NodeId::ROOT;
            }
            node = self.maximal_suffix(node);
        }
    }

    /// The words emitted on entering `state`, longest first.
    ///
    /// That is the word at `state` itself, if any, followed by every word
    /// along its dictionary-suffix chain.
    pub fn outputs(&self, state: NodeId) -> Outputs<'_, W, C> {
        Outputs {
            automaton: self,
            cursor: start_cursor(state),
        }
    }

    /// Advances `cursor` along the dictionary-suffix chain and returns the
    /// next node carrying a word.
    fn next_output(&self, cursor: &mut Option<NodeId>) -> Option<(NodeId, &W)> {
        loop {
            let node = cursor.take()?;
            *cursor = start_cursor(self.dictionary_suffix(node));
            if let Some(word) = self.trie().word(node) {
                return Some((node, word));
            }
        }
    }

    /// Returns a lazy iterator over every match in `text`.
    ///
    /// Matches come in the order their last character occurs; matches ending
    /// at the same position come longest first.
    pub fn find_iter<I>(&self, text: I) -> FindIter<'_, W, C, I::IntoIter>
    where
        I: IntoIterator<Item = C>,
    {
        FindIter {
            automaton: self,
            text: text.into_iter(),
            state: NodeId::ROOT,
            position: 0,
            pending: None,
        }
    }

    /// Returns every dictionary word occurring in `text`, in match order.
    pub fn find_phrases<I>(&self, text: I) -> Vec<&W>
    where
        I: IntoIterator<Item = C>,
    {
        self.find_iter(text).map(|m| m.word).collect()
    }

    /// Starts a resumable scan for text that arrives piece by piece.
    pub fn stream(&self) -> StreamSearch<'_, W, C> {
        StreamSearch {
            automaton: self,
            state: NodeId::ROOT,
            position: 0,
        }
    }
}

impl<W> Automaton<W, char> {
    /// Returns every dictionary word occurring in `text`, in match order.
    ///
    /// ```
    /// use phrasefinder::Automaton;
    ///
    /// let automaton = Automaton::from_words(["a", "ab", "bab", "bc", "bca", "c", "caa"]);
    /// let found: Vec<&str> = automaton.find_phrases_in("abccab").into_iter().copied().collect();
    /// assert_eq!(found, ["a", "ab", "bc", "c", "c", "a", "ab"]);
    /// ```
    pub fn find_phrases_in(&self, text: &str) -> Vec<&W> {
        self.find_phrases(text.chars())
    }
}

fn start_cursor(state: NodeId) -> Option<NodeId> {
    (!state.is_root()).then_some(state)
}

/// Iterator over the words emitted in one state; see [`Automaton::outputs`].
pub struct Outputs<'a, W, C: AutomatonChar> {
    automaton: &'a Automaton<W, C>,
    cursor: Option<NodeId>,
}

impl<'a, W, C: AutomatonChar> Iterator for Outputs<'a, W, C> {
    type Item = &'a W;

    fn next(&mut self) -> Option<&'a W> {
        self.automaton
            .next_output(&mut self.cursor)
            .map(|(_, word)| word)
    }
}

/// Iterator over the matches in a text; see [`Automaton::find_iter`].
pub struct FindIter<'a, W, C: AutomatonChar, I> {
    automaton: &'a Automaton<W, C>,
    text: I,
    state: NodeId,
    position: usize,
    pending: Option<NodeId>,
}

impl<'a, W, C, I> Iterator for FindIter<'a, W, C, I>
where
    C: AutomatonChar,
    I: Iterator<Item = C>,
{
    type Item = Match<'a, W>;

    fn next(&mut self) -> Option<Match<'a, W>> {
        loop {
            if let Some((node, word)) = self.automaton.next_output(&mut self.pending) {
                let len = self.automaton.trie().depth(node);
                return Some(Match {
                    word,
                    start: self.position - len,
                    end: self.position,
                });
            }
            let ch = self.text.next()?;
            self.state = self.automaton.next_state(self.state, ch);
            self.position += 1;
            self.pending = start_cursor(self.state);
        }
    }
}

/// A scan cursor that is fed one character at a time.
///
/// ```
/// use phrasefinder::Automaton;
///
/// let automaton = Automaton::from_words(["thai food"]);
/// let mut search = automaton.stream();
/// let mut found: Vec<&&str> = Vec::new();
/// for chunk in ["i like tha", "i food"] {
///     for ch in chunk.chars() {
///         found.extend(search.feed(ch));
///     }
/// }
/// assert_eq!(found, [&"thai food"]);
/// ```
pub struct StreamSearch<'a, W, C: AutomatonChar> {
    automaton: &'a Automaton<W, C>,
    state: NodeId,
    position: usize,
}

impl<'a, W, C: AutomatonChar> StreamSearch<'a, W, C> {
    /// Consumes one character and returns the words ending at it, longest first.
    pub fn feed(&mut self, ch: C) -> Outputs<'a, W, C> {
        self.state = self.automaton.next_state(self.state, ch);
        self.position += 1;
        self.automaton.outputs(self.state)
    }

    /// The current state.
    pub fn state(&self) -> NodeId {
        self.state
    }

    /// Number of characters consumed since creation or the last reset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns to the initial state, forgetting any partial match.
    pub fn reset(&mut self) {
        self.state = NodeId::ROOT;
        self.position = 0;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn find<'a>(automaton: &'a Automaton<&'a str>, text: &str) -> Vec<&'a str> {
        automaton.find_phrases_in(text).into_iter().copied().collect()
    }

    #[test]
    fn overlapping_words() {
        let automaton = Automaton::from_words(["a", "ab", "bab", "bc", "bca", "c", "caa"]);
        assert_eq!(
            find(&automaton, "abccab"),
            ["a", "ab", "bc", "c", "c", "a", "ab"]
        );
    }

    #[test]
    fn classic_dictionary() {
        let automaton = Automaton::from_words(["he", "she", "his", "hers"]);
        assert_eq!(
            find(&automaton, "he hers shehis"),
            ["he", "he", "hers", "she", "he", "his"]
        );
    }

    #[test]
    fn transitions_fall_back_along_suffix_links() {
        let automaton = Automaton::from_words(["he", "she", "his", "hers"]);
        let trie = automaton.trie();
        let sh = trie.lookup("sh".chars()).unwrap();
        // "sh" has no 'i' edge, but its suffix "h" does.
        assert_eq!(
            automaton.next_state(sh, 'i'),
            trie.lookup("hi".chars()).unwrap()
        );
        assert_eq!(automaton.next_state(sh, 'x'), NodeId::ROOT);
        assert_eq!(automaton.next_state(NodeId::ROOT, 'x'), NodeId::ROOT);
    }

    #[test]
    fn outputs_are_longest_first() {
        let automaton = Automaton::from_words(["c", "bc", "abc", "zabc"]);
        let state = automaton.trie().lookup("zabc".chars()).unwrap();
        let outputs: Vec<_> = automaton.outputs(state).copied().collect();
        assert_eq!(outputs, ["zabc", "abc", "bc", "c"]);
        assert_eq!(automaton.outputs(NodeId::ROOT).next(), None);
    }

    #[test]
    fn outputs_skip_wordless_state() {
        let automaton = Automaton::from_words(["c", "abcd"]);
        let state = automaton.trie().lookup("abc".chars()).unwrap();
        let outputs: Vec<_> = automaton.outputs(state).copied().collect();
        assert_eq!(outputs, ["c"]);
    }

    #[test]
    fn match_offsets() {
        let automaton = Automaton::from_words(["he", "she", "hers"]);
        let matches: Vec<_> = automaton
            .find_iter("ushers".chars())
            .map(|m| (*m.word(), m.range()))
            .collect();
        assert_eq!(matches, [("she", 1..4), ("he", 2..4), ("hers", 2..6)]);
    }

    #[test]
    fn match_len_is_word_len() {
        let automaton = Automaton::from_words(["thai", "thai food", "food"]);
        for m in automaton.find_iter("we ate thai food".chars()) {
            assert_eq!(m.len(), m.word().chars().count());
            assert!(!m.is_empty());
        }
    }

    #[test]
    fn find_iter_is_lazy() {
        let automaton = Automaton::from_words(["a"]);
        let mut matches = automaton.find_iter(std::iter::repeat('a'));
        assert_eq!(matches.next().map(|m| m.end()), Some(1));
        assert_eq!(matches.next().map(|m| m.end()), Some(2));
    }

    #[test]
    fn scanning_twice_gives_same_result() {
        let automaton = Automaton::from_words(["he", "she", "his", "hers"]);
        let text = "ahishers she said";
        assert_eq!(find(&automaton, text), find(&automaton, text));
    }

    #[test]
    fn stream_matches_across_chunks() {
        let automaton = Automaton::from_words(["he", "she", "his", "hers"]);
        let mut search = automaton.stream();
        let mut found = Vec::new();
        for chunk in ["he h", "ers s", "heh", "is"] {
            for ch in chunk.chars() {
                found.extend(search.feed(ch).copied());
            }
        }
        assert_eq!(found, find(&automaton, "he hers shehis"));
        assert_eq!(search.position(), "he hers shehis".len());
    }

    #[test]
    fn stream_reset_forgets_partial_match() {
        let automaton = Automaton::from_words(["abc"]);
        let mut search = automaton.stream();
        search.feed('a');
        search.feed('b');
        assert!(!search.state().is_root());
        search.reset();
        assert_eq!(search.position(), 0);
        assert_eq!(search.feed('c').count(), 0);
    }

    #[test]
    fn generic_automaton_with_u8() {
        let words: Vec<Vec<u8>> = vec![vec![1, 2], vec![2, 3], vec![1, 2, 3]];
        let automaton = Automaton::from_words(words);
        let found = automaton.find_phrases([0u8, 1, 2, 3, 2, 3]);
        assert_eq!(
            found,
            [&vec![1u8, 2], &vec![1, 2, 3], &vec![2, 3], &vec![2, 3]]
        );
    }
}
