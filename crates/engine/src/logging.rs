// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscriber setup for hosts embedding the engine
//!
//! The engine itself only emits `tracing` events: terminations at `debug`,
//! contract violations at `error`, feeder lifecycle at `info`.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber filtered by `RUST_LOG`
///
/// Fails if a global subscriber is already set.
pub fn init() -> Result<(), TryInitError> {
    init_with_default(DEFAULT_FILTER)
}

/// Like [`init`], falling back to `default_filter` when `RUST_LOG` is unset
/// or invalid
pub fn init_with_default(default_filter: &str) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
}
