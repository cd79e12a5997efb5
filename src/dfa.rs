//! The universal parametric Levenshtein DFA (Schulz & Mihov 2002).
//!
//! Built once per edit-distance bound `d`, then shared read-only across any
//! number of query-specific automata (see [`crate::automaton`]). This is
//! the expensive, one-shot half of the system; the per-query half just
//! walks this table.
//!
//! # State interning
//!
//! Construction discovers normalized states by hashing them (a
//! [`NormalizedState`] is exactly the key type you'd expect: a sorted,
//! rebased `Vec<NfaPosition>`). But hashing a `Vec` on every `step` call
//! would be wasteful, so once construction finishes discovering all
//! reachable states, each one is assigned a dense [`StateId`] and the
//! transition table is flattened into
//! `transitions[state.as_usize() * num_vectors + vector]`. The hash map
//! used during construction is discarded; nothing downstream of `build`
//! hashes a state again.

use crate::contracts::{
    check_no_subsumed_positions, check_normalized_state_sorted, check_transition_in_bounds,
};
use crate::error::Error;
use std::collections::{HashMap, VecDeque};

/// Edit-distance bounds this large would need a characteristic vector wider
/// than a `u64` (`2*d+1 > 64`), so there is no table to build.
pub const MAX_BOUND: usize = 31;

/// A single NFA position: "after reading some prefix of the candidate, we
/// are aligned at query offset `offset` with `edits` of the budget spent."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NfaPosition {
    pub(crate) offset: u32,
    pub(crate) edits: u32,
}

impl NfaPosition {
    #[inline]
    fn new(offset: u32, edits: u32) -> Self {
        Self { offset, edits }
    }
}

/// A normalized, canonical NFA state: positions rebased so the minimum
/// offset is zero, sorted by `(offset, edits)`, with subsumed positions
/// already removed. This is what gets interned as a [`StateId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct NormalizedState(Vec<NfaPosition>);

/// Dense index of a normalized state within a built [`LevenshteinDfa`].
///
/// `StateId(0)` is always the dead state - the empty set, with self-loops
/// of shift zero under every vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Union the successor positions of every position in `state` under
/// characteristic vector `vec` (a `width`-bit mask, bit `i` set iff the
/// input character matches `query[base + i]`), then apply subsumption
/// pruning.
fn step_raw(state: &[NfaPosition], vec: u64, width: u32) -> Vec<NfaPosition> {
    let mut unioned: Vec<NfaPosition> = Vec::new();
    for &p in state {
        successors(p, vec, width, &mut unioned);
    }
    unioned.sort_unstable();
    unioned.dedup();
    remove_subsumed(unioned)
}

/// Successors of a single position under one characteristic vector
/// (one position at a time).
fn successors(p: NfaPosition, vec: u64, width: u32, out: &mut Vec<NfaPosition>) {
    let bit = |i: u32| i < width && (vec >> i) & 1 == 1;

    if bit(p.offset) {
        // Matched consume: no edit spent, and dominates every other
        // successor this position would otherwise generate.
        out.push(NfaPosition::new(p.offset + 1, p.edits));
        return;
    }

    if p.edits == 0 {
        // Out of budget and no free match available: this position dies.
        return;
    }

    // Deletion of the query character and substitution both land on the
    // same position (offset advances one, one edit spent) - the two are
    // indistinguishable once you stop tracking which operation got you
    // there.
    out.push(NfaPosition::new(p.offset + 1, p.edits - 1));
    // Insertion into the candidate: offset doesn't move, one edit spent.
    out.push(NfaPosition::new(p.offset, p.edits - 1));

    // Jump-ahead: smallest k >= 1 with a match at offset+k, collapsing a
    // run of k-1 query-character deletions followed by one match.
    let mut k = 1;
    while p.offset + k < width {
        if bit(p.offset + k) {
            if p.edits >= k {
                out.push(NfaPosition::new(p.offset + k + 1, p.edits - k));
            }
            break;
        }
        k += 1;
    }
}

fn remove_subsumed(positions: Vec<NfaPosition>) -> Vec<NfaPosition> {
    positions
        .iter()
        .copied()
        .filter(|&p| {
            !positions.iter().any(|&q| {
                q != p && {
                    let offset_diff = (q.offset as i64 - p.offset as i64).unsigned_abs() as i64;
                    q.edits as i64 - p.edits as i64 >= offset_diff
                }
            })
        })
        .collect()
}

/// Rebase `positions` so the minimum offset becomes zero; return the
/// subtracted shift alongside the rebased, sorted, normalized state.
fn normalize(positions: Vec<NfaPosition>) -> (u32, NormalizedState) {
    if positions.is_empty() {
        return (0, NormalizedState(Vec::new()));
    }
    let min_offset = positions.iter().map(|p| p.offset).min().unwrap();
    let mut rebased: Vec<NfaPosition> = positions
        .into_iter()
        .map(|p| NfaPosition::new(p.offset - min_offset, p.edits))
        .collect();
    rebased.sort_unstable();
    check_normalized_state_sorted(&rebased);
    check_no_subsumed_positions(&rebased);
    (min_offset, NormalizedState(rebased))
}

/// The compiled, immutable universal DFA for one edit-distance bound.
///
/// Shareable read-only across threads and any number of query automata,
/// without synchronization.
#[derive(Debug)]
pub struct LevenshteinDfa {
    bound: usize,
    width: u32,
    num_vectors: usize,
    /// `transitions[state * num_vectors + vector] = (shift, next_state)`
    transitions: Vec<(i32, StateId)>,
    /// Positions live in each normalized state, needed by
    /// [`crate::automaton::QueryAutomaton::is_match`].
    state_positions: Vec<Vec<(u32, u32)>>,
    dead_state: StateId,
    initial_state: StateId,
}

impl LevenshteinDfa {
    /// Build the universal DFA for bound `d`.
    ///
    /// `d` is `usize`, so a negative bound is unrepresentable by
    /// construction. The one remaining failure mode is `d` large enough
    /// that the characteristic vector no longer fits a `u64`.
    pub fn build(d: usize) -> Result<Self, Error> {
        if d > MAX_BOUND {
            return Err(Error::InvalidParameter {
                reason: format!(
                    "bound {d} exceeds the maximum representable bound {MAX_BOUND} (2*d+1 must fit in a u64)"
                ),
            });
        }

        let width = (2 * d + 1) as u32;
        let num_vectors = 1usize << width;

        let mut interned: HashMap<NormalizedState, StateId> = HashMap::new();
        let mut state_positions: Vec<Vec<(u32, u32)>> = Vec::new();
        let mut worklist: VecDeque<StateId> = VecDeque::new();

        let dead_id = intern(
            NormalizedState(Vec::new()),
            &mut interned,
            &mut state_positions,
            &mut worklist,
        );

        let initial_raw = vec![NfaPosition::new(0, d as u32)];
        let (_, initial_normalized) = normalize(initial_raw);
        let initial_id = intern(
            initial_normalized,
            &mut interned,
            &mut state_positions,
            &mut worklist,
        );

        // Dense 2D table, filled in as each state is popped off the
        // worklist. Pre-sized so the dead state's self-loops (row 0) are
        // correct even though it's never pushed for processing below.
        let mut transitions = vec![(0i32, dead_id); num_vectors];
        // Row for the dead state: every vector self-loops with shift 0,
        // since the empty set is itself a valid dead state.
        debug_assert_eq!(transitions.len(), num_vectors);

        // Reconstructible states, indexed by StateId, needed to compute
        // transitions for states other than the dead state.
        let mut by_id: HashMap<StateId, NormalizedState> = HashMap::new();
        by_id.insert(dead_id, NormalizedState(Vec::new()));
        by_id.insert(initial_id, {
            let positions = state_positions[initial_id.as_usize()]
                .iter()
                .map(|&(o, e)| NfaPosition::new(o, e))
                .collect();
            NormalizedState(positions)
        });

        while let Some(state_id) = worklist.pop_front() {
            let state = by_id.get(&state_id).expect("worklist state must be interned").clone();
            for vector in 0..num_vectors as u64 {
                let stepped = step_raw(&state.0, vector, width);
                let (shift, next_normalized) = normalize(stepped);
                let next_id = if next_normalized.0.is_empty() {
                    dead_id
                } else if let Some(&existing) = interned.get(&next_normalized) {
                    existing
                } else {
                    let id = intern(
                        next_normalized.clone(),
                        &mut interned,
                        &mut state_positions,
                        &mut worklist,
                    );
                    by_id.insert(id, next_normalized);
                    id
                };
                check_transition_in_bounds(next_id.as_usize(), state_positions.len());
                transitions.resize(
                    state_positions.len() * num_vectors,
                    (0, dead_id),
                );
                transitions[state_id.as_usize() * num_vectors + vector as usize] =
                    (shift as i32, next_id);
            }
        }

        Ok(Self {
            bound: d,
            width,
            num_vectors,
            transitions,
            state_positions,
            dead_state: dead_id,
            initial_state: initial_id,
        })
    }

    /// The edit-distance bound this DFA was built for.
    #[inline]
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Characteristic vector width (`2d+1`).
    #[inline]
    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub(crate) fn initial_state(&self) -> StateId {
        self.initial_state
    }

    #[inline]
    pub(crate) fn dead_state(&self) -> StateId {
        self.dead_state
    }

    #[inline]
    pub(crate) fn can_match(&self, state: StateId) -> bool {
        !self.state_positions[state.as_usize()].is_empty()
    }

    #[inline]
    pub(crate) fn positions(&self, state: StateId) -> &[(u32, u32)] {
        &self.state_positions[state.as_usize()]
    }

    /// `O(1)` transition lookup. `vector` must be a `width()`-bit mask.
    #[inline]
    pub(crate) fn transition(&self, state: StateId, vector: u64) -> Result<(i32, StateId), Error> {
        let idx = state.as_usize() * self.num_vectors + vector as usize;
        self.transitions.get(idx).copied().ok_or_else(|| Error::InternalInvariant {
            detail: format!(
                "no transition for state {} under vector {vector:#x}",
                state.as_usize()
            ),
        })
    }

    /// Number of distinct normalized states this DFA discovered, including
    /// the dead state. Exposed for snapshot tests.
    pub fn num_states(&self) -> usize {
        self.state_positions.len()
    }
}

fn intern(
    state: NormalizedState,
    interned: &mut HashMap<NormalizedState, StateId>,
    state_positions: &mut Vec<Vec<(u32, u32)>>,
    worklist: &mut VecDeque<StateId>,
) -> StateId {
    if let Some(&id) = interned.get(&state) {
        return id;
    }
    let id = StateId(state_positions.len() as u32);
    state_positions.push(state.0.iter().map(|p| (p.offset, p.edits)).collect());
    interned.insert(state, id);
    if !state_positions[id.as_usize()].is_empty() {
        worklist.push_back(id);
    }
    id
}
