// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! heli action/event reconciliation engine
//!
//! Tracks outstanding actions against a single ordered stream of events.
//! Every submitted action and every delivered event is folded into each
//! pending action's state, after which each action's result producer decides
//! whether it succeeded, was interrupted, or failed.

mod engine;
mod feeder;
pub mod logging;
mod pending;
mod registry;

pub use engine::Engine;
pub use feeder::{FeederHandle, TimerFeeder};
pub use pending::PendingResult;
pub use registry::{Registry, Submission};

pub use heli_core::{
    ActionReducer, Clock, EngineConfig, EngineError, EventReducer, FakeClock, Failure, Identity,
    Outcome, OutcomeKind, ResolveImmediately, ResultProducer, Settle, Settlement, SystemClock,
};
