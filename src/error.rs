// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the three ways this crate's contracts can be violated.
//!
//! Everything else - empty tries, queries longer than any word, `d` larger
//! than the query - is a legitimate empty result, not an error.

use std::fmt;

/// Failure modes for DFA construction and automaton binding.
///
/// This is exhaustive: there is no catch-all variant. A function that
/// returns `Result<_, Error>` either succeeds or fails for one of these
/// three documented reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A construction parameter is out of the range this implementation
    /// can represent.
    InvalidParameter {
        /// What was wrong with it.
        reason: String,
    },
    /// An automaton was built against a DFA compiled for a different bound.
    Mismatch {
        /// `d` the caller asked for.
        expected_bound: usize,
        /// `d` the DFA was actually built with.
        actual_bound: usize,
    },
    /// A transition lookup missed the table. Only reachable if a DFA was
    /// constructed incorrectly; never reachable through the public API.
    InternalInvariant {
        /// What was found instead of a valid table entry.
        detail: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter { reason } => write!(f, "invalid parameter: {reason}"),
            Error::Mismatch {
                expected_bound,
                actual_bound,
            } => write!(
                f,
                "automaton bound {expected_bound} does not match DFA bound {actual_bound}"
            ),
            Error::InternalInvariant { detail } => write!(f, "internal invariant violated: {detail}"),
        }
    }
}

impl std::error::Error for Error {}
