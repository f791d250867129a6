// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the reconciliation engine
//!
//! A rejected action is not an error here: it is an [`OutcomeKind::Error`]
//! delivered on the action's result handle. These types cover programming
//! mistakes and setup failures only.

use crate::outcome::OutcomeKind;
use thiserror::Error;

/// Errors raised by engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// A terminal method fired on an action that had already terminated.
    /// Indicates a bug in the submitter's result producer.
    #[error("tried to {verb} a non-active action {action}", verb = .attempted.verb())]
    ContractViolation {
        action: String,
        attempted: OutcomeKind,
    },
    #[error("periodic ticking requires a running tokio runtime")]
    NoRuntime,
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors loading an [`crate::EngineConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid duration in {var}={value:?}: {source}")]
    InvalidDuration {
        var: String,
        value: String,
        source: humantime::DurationError,
    },
}
