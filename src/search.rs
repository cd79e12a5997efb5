//! Depth-first traversal of a [`Trie`] driven by a [`QueryAutomaton`],
//! pruning subtrees the automaton has certified dead.
//!
//! Implemented as an explicit-stack [`Iterator`] rather than a recursive
//! generator so dictionaries with very long words don't blow the call
//! stack, and so callers can stop consuming matches early without any
//! special cancellation protocol - dropping the iterator is enough.

use crate::automaton::{DfaState, QueryAutomaton};
use crate::trie::{Node, Trie};
use std::collections::hash_map;

struct Frame<'t> {
    edges: hash_map::Iter<'t, char, Node>,
    state: DfaState,
}

/// A lazy, resumable sequence of words from `trie` within the edit-distance
/// bound `automaton` was built for. Construct with [`fuzzy_search`].
pub struct FuzzySearch<'t, 'q, 'dfa> {
    automaton: &'q mut QueryAutomaton<'dfa>,
    path: Vec<char>,
    stack: Vec<Frame<'t>>,
}

/// Search `trie` for every word within `automaton`'s edit-distance bound of
/// its query, in the depth-first order induced by the trie's (unspecified)
/// child iteration order.
pub fn fuzzy_search<'t, 'q, 'dfa>(
    trie: &'t Trie,
    automaton: &'q mut QueryAutomaton<'dfa>,
) -> FuzzySearch<'t, 'q, 'dfa> {
    let root_state = automaton.initial_state();
    FuzzySearch {
        automaton,
        path: Vec::new(),
        stack: vec![Frame {
            edges: trie.children(),
            state: root_state,
        }],
    }
}

impl<'t, 'q, 'dfa> Iterator for FuzzySearch<'t, 'q, 'dfa> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(frame) = self.stack.last_mut() {
            match frame.edges.next() {
                None => {
                    // This frame is exhausted. Every frame but the root
                    // one consumed exactly one path character to get here.
                    if self.stack.len() > 1 {
                        self.path.pop();
                    }
                    self.stack.pop();
                }
                Some((&c, child)) => {
                    let parent_state = frame.state;
                    let next_state = self.automaton.step(c, parent_state);
                    if !self.automaton.can_match(next_state) {
                        // Certified dead: no continuation of this edge can
                        // match, so the whole subtree is skipped without
                        // being pushed.
                        continue;
                    }
                    self.path.push(c);
                    let emit = child.is_end() && self.automaton.is_match(next_state);
                    self.stack.push(Frame {
                        edges: child.children(),
                        state: next_state,
                    });
                    if emit {
                        return Some(self.path.iter().collect());
                    }
                }
            }
        }
        None
    }
}
