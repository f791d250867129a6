// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry of pending actions and the termination sweep

use crate::pending::PendingResult;
use heli_core::{
    saturating_millis, ActionReducer, Clock, EngineError, EventReducer, Identity, Outcome,
    ResolveImmediately, ResultProducer, Settle, Settlement, TerminalCell,
};
use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// An action to submit, with the strategies that evolve and judge its state
///
/// Unset strategies default to [`Identity`] reducers and a producer that
/// resolves on first evaluation.
pub struct Submission<A, E, S> {
    action: A,
    state: S,
    action_reducer: Box<dyn ActionReducer<A, S>>,
    event_reducer: Box<dyn EventReducer<A, E, S>>,
    result_producer: Box<dyn ResultProducer<A, S>>,
}

impl<A, E, S> Submission<A, E, S> {
    pub fn new(action: A, initial_state: S) -> Self {
        Self {
            action,
            state: initial_state,
            action_reducer: Box::new(Identity),
            event_reducer: Box::new(Identity),
            result_producer: Box::new(ResolveImmediately),
        }
    }

    /// Fold actions submitted after this one into its state
    pub fn on_action(mut self, reducer: impl ActionReducer<A, S> + 'static) -> Self {
        self.action_reducer = Box::new(reducer);
        self
    }

    /// Fold events into this action's state
    pub fn on_event(mut self, reducer: impl EventReducer<A, E, S> + 'static) -> Self {
        self.event_reducer = Box::new(reducer);
        self
    }

    /// Decide termination after every state change
    pub fn settle_with(mut self, producer: impl ResultProducer<A, S> + 'static) -> Self {
        self.result_producer = Box::new(producer);
        self
    }
}

struct PendingAction<A, E, S> {
    action: A,
    state: S,
    action_reducer: Box<dyn ActionReducer<A, S>>,
    event_reducer: Box<dyn EventReducer<A, E, S>>,
    result_producer: Box<dyn ResultProducer<A, S>>,
    cell: Arc<TerminalCell>,
    label: Arc<str>,
    submitted_at: Instant,
    sender: oneshot::Sender<Settlement<A, S>>,
}

impl<A: Debug, E, S: Debug> PendingAction<A, E, S> {
    fn is_active(&self) -> bool {
        !self.cell.is_terminated()
    }

    fn deliver(self, elapsed: Duration) {
        let Some(kind) = self.cell.kind() else {
            return;
        };
        tracing::debug!(
            action = ?self.action,
            state = ?self.state,
            kind = %kind,
            elapsed_ms = saturating_millis(elapsed),
            "action terminated"
        );
        let outcome = Outcome {
            kind,
            action: self.action,
            state: self.state,
        };
        // Submitter may have dropped its handle
        let _ = self.sender.send(outcome.into_settlement());
    }
}

/// Ordered set of pending actions
///
/// Not synchronized: callers serialize access. Registration order is the
/// order in which reducers and result producers run.
pub struct Registry<A, E, S, C: Clock> {
    pending: Vec<PendingAction<A, E, S>>,
    clock: C,
}

impl<A, E, S, C> Registry<A, E, S, C>
where
    A: Clone + Debug,
    S: Debug,
    C: Clock,
{
    pub fn new(clock: C) -> Self {
        Self {
            pending: Vec::new(),
            clock,
        }
    }

    /// Register an action and give it a chance to terminate immediately
    ///
    /// Every other pending action first folds the new action through its
    /// action reducer. The new action does not see itself.
    ///
    /// If the sweep fails the new action is withdrawn, so an `Err` means the
    /// action is not registered. Folds already applied to older actions stay.
    pub fn submit(
        &mut self,
        submission: Submission<A, E, S>,
    ) -> Result<PendingResult<A, S>, EngineError> {
        let Submission {
            action,
            state,
            action_reducer,
            event_reducer,
            result_producer,
        } = submission;

        for pending in self.pending.iter_mut().filter(|p| p.is_active()) {
            pending
                .action_reducer
                .reduce_action(&pending.action, &mut pending.state, &action);
        }

        let (sender, receiver) = oneshot::channel();
        let label: Arc<str> = Arc::from(format!("{:?}", action));
        let cell = Arc::new(TerminalCell::new());
        tracing::trace!(action = %label, pending = self.pending.len(), "action submitted");
        self.pending.push(PendingAction {
            action,
            state,
            action_reducer,
            event_reducer,
            result_producer,
            cell: Arc::clone(&cell),
            label: Arc::clone(&label),
            submitted_at: self.clock.now(),
            sender,
        });

        if let Err(e) = self.sweep() {
            self.pending.retain(|p| !Arc::ptr_eq(&p.cell, &cell));
            tracing::warn!(
                action = %label,
                error = %e,
                "submission withdrawn after failed sweep"
            );
            return Err(e);
        }
        Ok(PendingResult::new(receiver))
    }

    /// Fold an event into every pending action, then sweep
    ///
    /// `None` is a synthetic tick carrying no payload.
    pub fn process_event(&mut self, event: Option<&E>) -> Result<(), EngineError> {
        for pending in self.pending.iter_mut().filter(|p| p.is_active()) {
            pending
                .event_reducer
                .reduce_event(&pending.action, &mut pending.state, event);
        }
        self.sweep()
    }

    /// Snapshot of pending action payloads in registration order
    pub fn list_pending(&self) -> Vec<A> {
        self.active().map(|p| p.action.clone()).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.active().count()
    }

    /// How long the oldest pending action has been waiting
    pub fn oldest_pending_age(&self) -> Option<Duration> {
        self.active()
            .next()
            .map(|p| self.clock.elapsed_since(p.submitted_at))
    }

    fn active(&self) -> impl Iterator<Item = &PendingAction<A, E, S>> {
        self.pending.iter().filter(|p| p.is_active())
    }

    /// Evaluate every active action's result producer, then retire whatever
    /// terminated. A producer error stops evaluation but actions terminated
    /// before it are still delivered.
    fn sweep(&mut self) -> Result<(), EngineError> {
        let mut failed = None;
        for pending in self.pending.iter().filter(|p| p.is_active()) {
            let settle = Settle::new(Arc::clone(&pending.cell), Arc::clone(&pending.label));
            if let Err(e) = pending
                .result_producer
                .produce(&pending.action, &pending.state, settle)
            {
                failed = Some(e);
                break;
            }
        }

        self.retire();
        match failed {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn retire(&mut self) {
        let (active, terminated): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.is_active());
        self.pending = active;

        let now = self.clock.now();
        for pending in terminated {
            let elapsed = now.saturating_duration_since(pending.submitted_at);
            pending.deliver(elapsed);
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
