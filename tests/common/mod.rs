//! Shared test utilities and fixtures.

#![allow(dead_code)]

use levtrie::Trie;

/// Build a trie from a word list.
pub fn trie_of(words: &[&str]) -> Trie {
    let mut t = Trie::new();
    for w in words {
        t.add(w);
    }
    t
}

/// Ground truth edit distance, used as the oracle that the automaton-pruned
/// search is checked against.
pub fn oracle_levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Every word in `words` within `d` edits of `query`, computed by brute
/// force - the reference this crate's DFA-pruned search must agree with.
pub fn brute_force_matches(words: &[&str], query: &str, d: usize) -> Vec<String> {
    let mut out: Vec<String> = words
        .iter()
        .filter(|w| oracle_levenshtein(w, query) <= d)
        .map(|w| w.to_string())
        .collect();
    out.sort();
    out.dedup();
    out
}
