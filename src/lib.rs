//! Approximate string matching over a dictionary trie, via a parametric
//! Levenshtein automaton (Schulz & Mihov 2002).
//!
//! Given a query `Q` and an edit-distance bound `d`, [`fuzzy_search`]
//! returns every word in a [`Trie`] within `d` edits of `Q` - insertions,
//! deletions, and substitutions, unit cost - while pruning whole subtrees
//! the automaton can prove are unreachable.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌─────────────┐
//! │  dfa.rs      │────▶│ automaton.rs  │────▶│ search.rs   │
//! │ (build once  │     │ (bind one     │     │ (DFS over a │
//! │  per bound)  │     │  query to it) │     │  trie.rs)   │
//! └──────────────┘     └───────────────┘     └─────────────┘
//! ```
//!
//! `dfa.rs` is the expensive, query-independent half: it enumerates every
//! reachable normalized NFA state for a given `d` and tabulates transitions
//! keyed by characteristic vector. `automaton.rs` and `search.rs` are the
//! cheap, per-query half that walks that table alongside a [`Trie`].
//!
//! # Usage
//!
//! ```
//! use levtrie::{fuzzy_search, LevenshteinDfa, QueryAutomaton, Trie};
//!
//! let dfa = LevenshteinDfa::build(1).unwrap(); // build once, reuse across queries
//!
//! let mut trie = Trie::new();
//! for word in ["cat", "car", "cats", "bat"] {
//!     trie.add(word);
//! }
//!
//! let mut automaton = QueryAutomaton::new(&dfa, "cat", 1).unwrap();
//! let mut matches: Vec<String> = fuzzy_search(&trie, &mut automaton).collect();
//! matches.sort();
//! assert_eq!(matches, vec!["bat", "car", "cat", "cats"]);
//! ```

mod automaton;
mod contracts;
mod dfa;
mod error;
mod search;
mod trie;

pub use automaton::{DfaState, QueryAutomaton};
pub use dfa::{LevenshteinDfa, StateId, MAX_BOUND};
pub use error::Error;
pub use search::{fuzzy_search, FuzzySearch};
pub use trie::{Node, Trie};
