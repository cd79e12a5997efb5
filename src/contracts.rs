//! Debug-only assertions for the invariants documented on the public types.
//!
//! These are zero-cost in release builds (`debug_assert!`). They exist to
//! catch a broken `LevenshteinDfa` or `Trie` during development rather than
//! let it silently produce wrong search results.

use crate::dfa::NfaPosition;

/// A normalized state's positions must be sorted by `(offset, edits)` and
/// contain no duplicate `(offset, edits)` pair.
#[inline]
pub(crate) fn check_normalized_state_sorted(positions: &[NfaPosition]) {
    debug_assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "normalized state not strictly sorted: {positions:?}"
    );
}

/// Subsumption must have removed every dominated position: no two distinct
/// positions `(o, e)` and `(o', e')` in the same state may satisfy
/// `e' - e >= |o' - o|`.
#[inline]
pub(crate) fn check_no_subsumed_positions(positions: &[NfaPosition]) {
    debug_assert!(
        positions.iter().enumerate().all(|(i, p)| {
            positions
                .iter()
                .enumerate()
                .all(|(j, q)| i == j || !is_subsumed(*p, *q))
        }),
        "state still contains a subsumed position: {positions:?}"
    );
}

fn is_subsumed(p: NfaPosition, q: NfaPosition) -> bool {
    let offset_diff = (p.offset as i64 - q.offset as i64).unsigned_abs();
    q.edits as i64 - p.edits as i64 >= offset_diff as i64
}

/// Every transition a DFA exposes must land on an already-enumerated state
/// (closure: for every state present and every vector, the transition's
/// target is also present).
#[inline]
pub(crate) fn check_transition_in_bounds(next_state: usize, num_states: usize) {
    debug_assert!(
        next_state < num_states,
        "transition target {next_state} outside table of {num_states} states"
    );
}

/// No non-root node may be both childless and not a word end.
#[inline]
pub(crate) fn check_no_dangling_leaf(has_children: bool, end: bool) {
    debug_assert!(
        has_children || end,
        "trie node is a childless leaf with end=false"
    );
}
