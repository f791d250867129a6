// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-use terminal handle handed to result producers
//!
//! Each sweep hands a fresh [`Settle`] to an action's result producer.
//! Terminating consumes the handle, so one handle can never terminate twice.
//! Every handle of an action shares the action's [`TerminalCell`]: a handle
//! smuggled out of an earlier sweep that fires after the action already
//! terminated is rejected with [`EngineError::ContractViolation`].

use crate::error::EngineError;
use crate::outcome::OutcomeKind;
use std::sync::{Arc, OnceLock};

/// Records whether, and how, an action terminated
///
/// Transitions from unset to set exactly once.
#[derive(Debug, Default)]
pub struct TerminalCell {
    kind: OnceLock<OutcomeKind>,
}

impl TerminalCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// The terminal kind, if the action has terminated
    pub fn kind(&self) -> Option<OutcomeKind> {
        self.kind.get().copied()
    }

    pub fn is_terminated(&self) -> bool {
        self.kind.get().is_some()
    }

    /// Fails with the kind already recorded
    fn terminate(&self, kind: OutcomeKind) -> Result<(), OutcomeKind> {
        self.kind
            .set(kind)
            .map_err(|attempted| self.kind().unwrap_or(attempted))
    }
}

/// Terminal handle for one action, valid for a single decision
#[derive(Debug)]
pub struct Settle {
    cell: Arc<TerminalCell>,
    label: Arc<str>,
}

impl Settle {
    /// Created by the registry for each sweep; `label` names the action in
    /// diagnostics.
    pub fn new(cell: Arc<TerminalCell>, label: Arc<str>) -> Self {
        Self { cell, label }
    }

    /// Terminate with [`OutcomeKind::Success`]
    pub fn resolve(self) -> Result<(), EngineError> {
        self.terminate(OutcomeKind::Success)
    }

    /// Terminate with [`OutcomeKind::Interrupted`]
    pub fn interrupt(self) -> Result<(), EngineError> {
        self.terminate(OutcomeKind::Interrupted)
    }

    /// Terminate with [`OutcomeKind::Error`]
    pub fn reject(self) -> Result<(), EngineError> {
        self.terminate(OutcomeKind::Error)
    }

    /// Leave the action pending until the next sweep
    pub fn pend(self) {}

    fn terminate(self, kind: OutcomeKind) -> Result<(), EngineError> {
        self.cell.terminate(kind).map_err(|previous| {
            tracing::error!(
                action = %self.label,
                attempted = %kind,
                previous = %previous,
                "terminal callback on a non-active action"
            );
            EngineError::ContractViolation {
                action: self.label.to_string(),
                attempted: kind,
            }
        })
    }
}

#[cfg(test)]
#[path = "settle_tests.rs"]
mod tests;
