//! Binds a concrete query string to a shared [`LevenshteinDfa`].
//!
//! A [`QueryAutomaton`] is cheap to build and owns exactly one piece of
//! mutable state: its characteristic-vector cache. That cache is why
//! `step` takes `&mut self` - a single automaton instance is owned by one
//! search at a time, but fresh automata are cheap, so there's no reason to
//! share one across concurrent searches.

use crate::dfa::{LevenshteinDfa, StateId};
use crate::error::Error;
use std::collections::HashMap;

/// The runtime state of a query automaton: a cumulative base offset into
/// the query plus the DFA state reached so far. Replaced, never mutated,
/// by [`QueryAutomaton::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DfaState {
    pub(crate) offset: u32,
    pub(crate) state: StateId,
}

/// A [`LevenshteinDfa`] bound to one query string.
pub struct QueryAutomaton<'dfa> {
    dfa: &'dfa LevenshteinDfa,
    query: Vec<char>,
    vector_cache: HashMap<(char, u32), u64>,
}

impl<'dfa> QueryAutomaton<'dfa> {
    /// Bind `query` to `dfa`. `d` is the bound the caller expects `dfa` to
    /// have been built with; if it doesn't match, construction fails with
    /// [`Error::Mismatch`] rather than silently using `dfa`'s own bound.
    pub fn new(dfa: &'dfa LevenshteinDfa, query: &str, d: usize) -> Result<Self, Error> {
        if dfa.bound() != d {
            return Err(Error::Mismatch {
                expected_bound: d,
                actual_bound: dfa.bound(),
            });
        }
        Ok(Self {
            dfa,
            query: query.chars().collect(),
            vector_cache: HashMap::new(),
        })
    }

    /// The query this automaton was built for, as Unicode scalar values.
    #[inline]
    pub fn query(&self) -> &[char] {
        &self.query
    }

    /// The edit-distance bound shared with the underlying DFA.
    #[inline]
    pub fn bound(&self) -> usize {
        self.dfa.bound()
    }

    /// The automaton's start state: offset zero, the DFA's canonical
    /// initial normalized state.
    #[inline]
    pub fn initial_state(&self) -> DfaState {
        DfaState {
            offset: 0,
            state: self.dfa.initial_state(),
        }
    }

    /// Characteristic vector for `char` at `offset`, memoized per
    /// `(char, offset)` for the lifetime of this automaton.
    fn characteristic_vector(&mut self, c: char, offset: u32) -> u64 {
        if let Some(&v) = self.vector_cache.get(&(c, offset)) {
            return v;
        }
        let width = self.dfa.width();
        let mut vector = 0u64;
        for i in 0..width {
            let idx = (offset + i) as usize;
            if idx < self.query.len() && self.query[idx] == c {
                vector |= 1 << i;
            }
        }
        self.vector_cache.insert((c, offset), vector);
        vector
    }

    /// Advance `state` by one candidate character `c`.
    ///
    /// # Panics
    ///
    /// Never under normal use. An [`Error::InternalInvariant`] from the
    /// underlying table lookup would indicate a corrupted DFA; this is
    /// surfaced as a panic here to keep the hot-path signature infallible,
    /// since in a correctly-constructed DFA this can never occur.
    pub fn step(&mut self, c: char, state: DfaState) -> DfaState {
        let vector = self.characteristic_vector(c, state.offset);
        let (shift, next_state) = self
            .dfa
            .transition(state.state, vector)
            .expect("DFA transition table is total for every in-range vector");
        DfaState {
            offset: (state.offset as i64 + shift as i64) as u32,
            state: next_state,
        }
    }

    /// True iff the unread suffix of the query is short enough to be
    /// covered by `state`'s remaining edit budget.
    pub fn is_match(&self, state: DfaState) -> bool {
        let query_len = self.query.len() as i64;
        self.dfa.positions(state.state).iter().any(|&(o, e)| {
            query_len - (state.offset as i64 + o as i64) <= e as i64
        })
    }

    /// True iff `state` can still be extended into a match by some
    /// continuation of the candidate. A `false` return certifies that no
    /// extension of the candidate can match - this is what makes pruning
    /// in [`crate::search::fuzzy_search`] sound.
    #[inline]
    pub fn can_match(&self, state: DfaState) -> bool {
        self.dfa.can_match(state.state)
    }
}
