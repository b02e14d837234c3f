//! Text normalization for phrase matching.
//!
//! A phrase occurs in a text if its words occur in order, each separated by
//! whitespace or punctuation, and the first and last are bounded by a
//! separator or the edge of the text. Normalizing both sides the same way
//! reduces that to plain character matching: case is folded, every run of
//! separators becomes a single [`BOUNDARY`], and the result is padded with a
//! [`BOUNDARY`] at each end.

use std::path::Path;

use crate::automaton::builder::read_phrases;
use crate::automaton::Automaton;
use crate::error::Result;

/// The separator character of normalized text.
pub const BOUNDARY: char = ' ';

/// Normalizes `text` for matching.
///
/// ```
/// use phrasefinder::normalize::normalize;
///
/// assert_eq!(normalize("I'd like THAI food!"), " i d like thai food ");
/// assert_eq!(normalize("  ...  "), " ");
/// ```
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len() + 2);
    normalized.push(BOUNDARY);
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            normalized.extend(ch.to_lowercase().filter(|lower| lower.is_alphanumeric()));
        } else if !normalized.ends_with(BOUNDARY) {
            normalized.push(BOUNDARY);
        }
    }
    if !normalized.ends_with(BOUNDARY) {
        normalized.push(BOUNDARY);
    }
    normalized
}

/// The trie path of a phrase: its normalized form, or nothing if the phrase
/// has no alphanumeric content.
#[allow(clippy::ptr_arg)]
fn phrase_key(phrase: &String) -> String {
    let key = normalize(phrase);
    if key.chars().all(|ch| ch == BOUNDARY) {
        String::new()
    } else {
        key
    }
}

/// A phrase dictionary matched against free text.
///
/// Phrases and texts both go through [`normalize`]; matches are reported as
/// the phrases exactly as they were given.
///
/// ```
/// use phrasefinder::PhraseMatcher;
///
/// let matcher = PhraseMatcher::new(["Indian", "Thai", "Thai food", "Sushi"]);
/// assert_eq!(matcher.find_in("I would like some thai food."), ["Thai", "Thai food"]);
/// assert!(matcher.find_in("I would like some Vietnamese food.").is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct PhraseMatcher {
    automaton: Automaton<String>,
}

impl PhraseMatcher {
    /// Builds a matcher over `phrases`.
    pub fn new<S: Into<String>>(phrases: impl IntoIterator<Item = S>) -> Self {
        let phrases = phrases.into_iter().map(Into::into);
        PhraseMatcher {
            automaton: Automaton::build(phrases, phrase_key),
        }
    }

    /// Builds a matcher over the phrases in a dictionary file.
    ///
    /// See [`read_phrases`] for the file format.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(read_phrases(path)?))
    }

    /// Returns every phrase occurring in `text`, in match order.
    pub fn find_in(&self, text: &str) -> Vec<&str> {
        self.automaton
            .find_phrases_in(&normalize(text))
            .into_iter()
            .map(String::as_str)
            .collect()
    }

    /// The underlying automaton, keyed by normalized phrase.
    pub fn automaton(&self) -> &Automaton<String> {
        &self.automaton
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowercases_and_pads() {
        assert_eq!(normalize("Thai"), " thai ");
        assert_eq!(normalize("ÉCOLE"), " école ");
    }

    #[test]
    fn collapses_separators() {
        assert_eq!(normalize("thai,   food"), " thai food ");
        assert_eq!(normalize("\tthai\n food\r\n"), " thai food ");
        assert_eq!(normalize("--thai--"), " thai ");
    }

    #[test]
    fn empty_and_blank_text() {
        assert_eq!(normalize(""), " ");
        assert_eq!(normalize("?!"), " ");
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(normalize("Route 66"), " route 66 ");
    }

    #[test]
    fn normalize_is_idempotent() {
        for text in ["I'd like THAI food!", "", "a  b", "Ünïcödé, tëxt"] {
            let once = normalize(text);
            let twice = normalize(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn combining_marks_from_case_folding_are_dropped() {
        assert_eq!(normalize("İstanbul"), " istanbul ");
        assert_eq!(normalize(&normalize("İstanbul")), normalize("İstanbul"));
    }

    #[test]
    fn phrases_only_match_on_word_boundaries() {
        let matcher = PhraseMatcher::new(["thai", "ai"]);
        assert_eq!(matcher.find_in("Thai"), ["thai"]);
        assert!(matcher.find_in("Thailand").is_empty());
    }

    #[test]
    fn punctuation_does_not_block_matches() {
        let matcher = PhraseMatcher::new(["thai food"]);
        assert_eq!(matcher.find_in("Thai, food?"), ["thai food"]);
    }

    #[test]
    fn reports_original_phrases() {
        let matcher = PhraseMatcher::new(vec![String::from("New York")]);
        assert_eq!(matcher.find_in("I love new york."), ["New York"]);
    }

    #[test]
    fn blank_phrase_matches_nothing() {
        let matcher = PhraseMatcher::new(["...", "  "]);
        assert!(matcher.automaton().is_empty());
        assert!(matcher.find_in("a b c").is_empty());
    }
}
