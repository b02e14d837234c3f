//! # phrasefinder
//!
//! Finds every occurrence of a dictionary of phrases in a text, in a single
//! left-to-right pass, with an [Aho-Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm)
//! automaton.
//!
//! The automaton is a character trie over the dictionary plus two link tables
//! computed once after the trie is complete: the maximal-suffix ("failure")
//! links used to fall back when a transition is missing, and the
//! dictionary-suffix links used to report every word ending at a position.
//!
//! ## Features
//!
//! - **Generic over character type**: works with `char`, `u8`, `u16`, or any
//!   type implementing [`AutomatonChar`](automaton::AutomatonChar)
//! - **Generic over dictionary items**: each entry is indexed under a
//!   caller-supplied representation and reported back as itself
//! - **Arena-allocated**: nodes live in one vector and are identified by
//!   [`NodeId`](automaton::NodeId)
//! - **Thread-safe**: a built [`Automaton`] is immutable and can be shared
//!   across threads by reference
//!
//! ## Quick Start
//!
//! ```
//! use phrasefinder::Automaton;
//!
//! let automaton = Automaton::from_words(["he", "she", "his", "hers"]);
//! let found: Vec<&str> = automaton.find_phrases_in("ushers").into_iter().copied().collect();
//! assert_eq!(found, ["she", "he", "hers"]);
//! ```
//!
//! Matches are reported in the order their last character occurs in the
//! text; matches ending at the same position come longest first.
//!
//! ## Phrases in free text
//!
//! [`PhraseMatcher`] normalizes phrases and texts (case folding, punctuation
//! collapsing, boundary padding) so that phrases only match whole words:
//!
//! ```
//! use phrasefinder::PhraseMatcher;
//!
//! let matcher = PhraseMatcher::new(["Indian", "Thai", "Sushi"]);
//! assert_eq!(matcher.find_in("I would like some thai food."), ["Thai"]);
//! assert!(matcher.find_in("Thailand is lovely").is_empty());
//! ```
//!
//! ## Generic Usage
//!
//! ```
//! use phrasefinder::Automaton;
//!
//! let words: Vec<Vec<u8>> = vec![vec![1, 2], vec![2, 3]];
//! let automaton = Automaton::from_words(words);
//! assert_eq!(automaton.find_phrases([1u8, 2, 3]).len(), 2);
//! ```

#![warn(missing_docs)]

/// The automaton: trie, builder, link tables and matcher.
pub mod automaton;
/// Crate error type.
pub mod error;
/// Text normalization and the phrase-level matcher.
pub mod normalize;

pub use automaton::{Automaton, Match};
pub use error::{Error, Result};
pub use normalize::{normalize, PhraseMatcher};
