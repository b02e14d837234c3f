//! End-to-end matching scenarios on raw character input (no normalization).

use itertools::Itertools;
use phrasefinder::Automaton;

fn find<'a>(automaton: &'a Automaton<&'a str>, text: &str) -> Vec<&'a str> {
    automaton.find_phrases_in(text).into_iter().copied().collect()
}

#[test]
fn overlapping_single_letters() {
    let automaton = Automaton::from_words(["a", "ab", "bab", "bc", "bca", "c", "caa"]);
    assert_eq!(
        find(&automaton, "abccab"),
        ["a", "ab", "bc", "c", "c", "a", "ab"]
    );
}

#[test]
fn he_she_his_hers() {
    let automaton = Automaton::from_words(["he", "she", "his", "hers"]);
    assert_eq!(
        find(&automaton, "he hers shehis"),
        ["he", "he", "hers", "she", "he", "his"]
    );
}

#[test]
fn padded_phrase_found() {
    let automaton = Automaton::from_words([" indian ", " thai ", " sushi "]);
    assert_eq!(
        find(&automaton, " i would like some thai food "),
        [" thai "]
    );
}

#[test]
fn padded_phrase_absent() {
    let automaton = Automaton::from_words([" indian ", " thai ", " sushi "]);
    assert!(find(&automaton, " i would like some vietnamese food ").is_empty());
}

#[test]
fn overlapping_phrases_in_position_order() {
    let automaton = Automaton::from_words([" indian ", " thai ", " thai food ", " sushi "]);
    assert_eq!(
        find(&automaton, " i would like some thai food "),
        [" thai ", " thai food "]
    );
}

#[test]
fn empty_dictionary_matches_nothing() {
    let automaton = Automaton::<&str>::from_words([]);
    assert!(find(&automaton, "abccab").is_empty());
    assert!(find(&automaton, "").is_empty());
}

#[test]
fn empty_text_matches_nothing() {
    let automaton = Automaton::from_words(["a"]);
    assert!(find(&automaton, "").is_empty());
}

#[test]
fn repeated_characters() {
    let automaton = Automaton::from_words(["a", "aa", "aaa"]);
    assert_eq!(
        find(&automaton, "aaaa"),
        ["a", "aa", "a", "aaa", "aa", "a", "aaa", "aa", "a"]
    );
}

#[test]
fn duplicate_representation_keeps_last_item() {
    let automaton = Automaton::build([("Thai", 1), ("THAI", 2)], |(name, _): &(&str, i32)| {
        name.to_lowercase()
    });
    let found: Vec<i32> = automaton
        .find_phrases_in("thai")
        .into_iter()
        .map(|&(_, id)| id)
        .collect();
    assert_eq!(found, [2]);
}

#[test]
fn building_twice_is_deterministic() {
    let words = ["he", "she", "his", "hers", "is", "her"];
    let first = Automaton::from_words(words);
    let second = Automaton::from_words(words);
    let text = "ushers and his sister, she is here";
    assert_eq!(find(&first, text), find(&second, text));
    assert_eq!(first.maximal_suffixes(), second.maximal_suffixes());
    assert_eq!(first.dictionary_suffixes(), second.dictionary_suffixes());
}

#[test]
fn insertion_order_does_not_matter() {
    const WORDS: [&str; 6] = ["a", "ab", "bab", "bc", "bca", "caa"];
    let text = "abccabcabab";
    let base = Automaton::from_words(WORDS);
    let expected = find(&base, text);
    for order in WORDS.iter().copied().permutations(WORDS.len()) {
        let automaton = Automaton::from_words(order.clone());
        assert_eq!(find(&automaton, text), expected, "order {order:?}");
    }
}

#[test]
fn unicode_text() {
    let automaton = Automaton::from_words(["授人以渔", "以鱼", "渔"]);
    let matches: Vec<_> = automaton
        .find_iter("授人以鱼不如授人以渔".chars())
        .map(|m| (*m.word(), m.start(), m.end()))
        .collect();
    assert_eq!(
        matches,
        [("以鱼", 2, 4), ("授人以渔", 6, 10), ("渔", 9, 10)]
    );
}
