// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability traits that evolve and judge an action's state
//!
//! The engine never looks inside actions, events or state. Submitters plug in
//! behaviour through three strategies:
//! - [`ActionReducer`] folds a newly submitted sibling action into the state
//! - [`EventReducer`] folds an event, or a synthetic tick, into the state
//! - [`ResultProducer`] decides after every change whether the action is done
//!
//! Closures with the matching shape implement each trait. Reducers and
//! producers run while the engine is locked: they must not panic and must
//! not call back into the engine that invoked them.

use crate::error::EngineError;
use crate::settle::Settle;

/// Folds a newly submitted action into a pending action's state
pub trait ActionReducer<A, S>: Send {
    fn reduce_action(&self, action: &A, state: &mut S, incoming: &A);
}

impl<A, S, F> ActionReducer<A, S> for F
where
    F: Fn(&A, &mut S, &A) + Send,
{
    fn reduce_action(&self, action: &A, state: &mut S, incoming: &A) {
        self(action, state, incoming)
    }
}

/// Folds an event into a pending action's state
///
/// `event` is `None` for synthetic ticks from the timer feeder.
pub trait EventReducer<A, E, S>: Send {
    fn reduce_event(&self, action: &A, state: &mut S, event: Option<&E>);
}

impl<A, E, S, F> EventReducer<A, E, S> for F
where
    F: Fn(&A, &mut S, Option<&E>) + Send,
{
    fn reduce_event(&self, action: &A, state: &mut S, event: Option<&E>) {
        self(action, state, event)
    }
}

/// Decides whether a pending action has terminated
///
/// Terminate by consuming `settle`; drop it to stay pending. Returning an
/// error aborts the sweep and surfaces from the engine call that ran it.
pub trait ResultProducer<A, S>: Send {
    fn produce(&self, action: &A, state: &S, settle: Settle) -> Result<(), EngineError>;
}

impl<A, S, F> ResultProducer<A, S> for F
where
    F: Fn(&A, &S, Settle) -> Result<(), EngineError> + Send,
{
    fn produce(&self, action: &A, state: &S, settle: Settle) -> Result<(), EngineError> {
        self(action, state, settle)
    }
}

/// Reducer that leaves state unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<A, S> ActionReducer<A, S> for Identity {
    fn reduce_action(&self, _action: &A, _state: &mut S, _incoming: &A) {}
}

impl<A, E, S> EventReducer<A, E, S> for Identity {
    fn reduce_event(&self, _action: &A, _state: &mut S, _event: Option<&E>) {}
}

/// Result producer that resolves on its first evaluation
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveImmediately;

impl<A, S> ResultProducer<A, S> for ResolveImmediately {
    fn produce(&self, _action: &A, _state: &S, settle: Settle) -> Result<(), EngineError> {
        settle.resolve()
    }
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod tests;
