//! Property-based tests checking the DFA-pruned search against a brute
//! force oracle, plus the trie's own algebraic properties.

mod common;

use common::{brute_force_matches, oracle_levenshtein, trie_of};
use levtrie::{fuzzy_search, LevenshteinDfa, QueryAutomaton, Trie};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c]{1,6}").unwrap()
}

fn vocab_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..12)
}

fn search_sorted(words: &[String], query: &str, d: usize) -> Vec<String> {
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let trie = trie_of(&refs);
    let dfa = LevenshteinDfa::build(d).unwrap();
    let mut automaton = QueryAutomaton::new(&dfa, query, d).unwrap();
    let mut out: Vec<String> = fuzzy_search(&trie, &mut automaton).collect();
    out.sort();
    out.dedup();
    out
}

proptest! {
    /// Every word the search emits really is within `d` edits of the query
    /// (soundness).
    #[test]
    fn search_results_are_sound(vocab in vocab_strategy(), query in word_strategy(), d in 0usize..=2) {
        let found = search_sorted(&vocab, &query, d);
        for word in &found {
            prop_assert!(oracle_levenshtein(word, &query) <= d);
        }
    }

    /// The search emits exactly the words a brute-force distance scan over
    /// the same vocabulary would (completeness, via the oracle).
    #[test]
    fn search_matches_brute_force_oracle(vocab in vocab_strategy(), query in word_strategy(), d in 0usize..=2) {
        let refs: Vec<&str> = vocab.iter().map(String::as_str).collect();
        let found = search_sorted(&vocab, &query, d);
        let expected = brute_force_matches(&refs, &query, d);
        prop_assert_eq!(found, expected);
    }

    /// Adding a word twice leaves the trie indistinguishable, by
    /// containment, from adding it once.
    #[test]
    fn add_is_idempotent_by_containment(vocab in vocab_strategy(), word in word_strategy()) {
        let mut once = Trie::new();
        for w in &vocab {
            once.add(w);
        }
        once.add(&word);

        let mut twice = Trie::new();
        for w in &vocab {
            twice.add(w);
        }
        twice.add(&word);
        twice.add(&word);

        let mut probes = vocab.clone();
        probes.push(word);
        for probe in &probes {
            prop_assert_eq!(once.contains(probe), twice.contains(probe));
        }
    }

    /// Deleting a word just added restores the trie to having never seen
    /// it, without disturbing unrelated entries already present.
    #[test]
    fn delete_undoes_add(vocab in vocab_strategy(), word in word_strategy()) {
        let mut trie = trie_of(&vocab.iter().map(String::as_str).collect::<Vec<_>>());
        let was_present = trie.contains(&word);

        trie.add(&word);
        prop_assert!(trie.contains(&word));
        trie.delete(&word);
        prop_assert_eq!(trie.contains(&word), was_present);

        for other in &vocab {
            if other != &word {
                prop_assert!(trie.contains(other));
            }
        }
    }
}

/// The universal DFA for `d=1` discovers exactly six normalized states:
/// the dead state, the initial state `{(0,1)}`, and four more reachable
/// by spending or conserving that one edit. A change to construction that
/// alters this count is a change to the automaton's behavior.
#[test]
fn dfa_state_count_snapshot_for_bound_one() {
    let dfa = LevenshteinDfa::build(1).unwrap();
    assert_eq!(dfa.num_states(), 6);
}

/// Consuming exactly the query's own characters from the initial state
/// must land on a match, for any bound.
#[test]
fn exact_query_consumption_is_always_a_match() {
    for d in 0..=3 {
        let dfa = LevenshteinDfa::build(d).unwrap();
        for query in ["", "a", "cat", "levenshtein"] {
            let mut automaton = QueryAutomaton::new(&dfa, query, d).unwrap();
            let mut state = automaton.initial_state();
            for c in query.chars() {
                state = automaton.step(c, state);
            }
            assert!(
                automaton.is_match(state),
                "query {query:?} at bound {d} should match itself exactly"
            );
        }
    }
}
