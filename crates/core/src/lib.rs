// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! heli-core: shared vocabulary for the heli reconciliation engine
//!
//! This crate provides:
//! - Outcome types delivered to submitters when an action terminates
//! - Reducer capability traits folding actions and events into action state
//! - The single-use `Settle` handle result producers terminate actions with
//! - Engine configuration and the error taxonomy
//! - A clock abstraction for testable time handling

pub mod clock;
pub mod config;
pub mod error;
pub mod outcome;
pub mod reducer;
pub mod settle;

// Re-exports
pub use clock::{saturating_millis, Clock, FakeClock, SystemClock};
pub use config::{EngineConfig, TIMEOUT_ENV};
pub use error::{ConfigError, EngineError};
pub use outcome::{Failure, Outcome, OutcomeKind, Settlement};
pub use reducer::{ActionReducer, EventReducer, Identity, ResolveImmediately, ResultProducer};
pub use settle::{Settle, TerminalCell};
