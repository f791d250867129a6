// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal outcomes delivered to action submitters

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an action terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeKind {
    Success,
    Interrupted,
    Error,
}

impl OutcomeKind {
    /// Verb naming the terminal method that produces this kind
    pub fn verb(&self) -> &'static str {
        match self {
            OutcomeKind::Success => "resolve",
            OutcomeKind::Interrupted => "interrupt",
            OutcomeKind::Error => "reject",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutcomeKind::Success => "SUCCESS",
            OutcomeKind::Interrupted => "INTERRUPTED",
            OutcomeKind::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// A terminated action together with its state at the moment it terminated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome<A, S> {
    pub kind: OutcomeKind,
    pub action: A,
    pub state: S,
}

/// Why a result handle completed without success
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure<A, S> {
    /// The result producer rejected the action; kind is always `Error`
    Rejected(Outcome<A, S>),
    /// The engine was dropped while the action was still pending
    Abandoned,
}

impl<A, S> Failure<A, S> {
    pub fn outcome(&self) -> Option<&Outcome<A, S>> {
        match self {
            Failure::Rejected(outcome) => Some(outcome),
            Failure::Abandoned => None,
        }
    }

    pub fn into_outcome(self) -> Option<Outcome<A, S>> {
        match self {
            Failure::Rejected(outcome) => Some(outcome),
            Failure::Abandoned => None,
        }
    }
}

/// What a result handle resolves to: success or interruption on `Ok`,
/// rejection or abandonment on `Err`
pub type Settlement<A, S> = Result<Outcome<A, S>, Failure<A, S>>;

impl<A, S> Outcome<A, S> {
    /// Split an outcome into the settlement shape handed to submitters
    pub fn into_settlement(self) -> Settlement<A, S> {
        match self.kind {
            OutcomeKind::Success | OutcomeKind::Interrupted => Ok(self),
            OutcomeKind::Error => Err(Failure::Rejected(self)),
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
