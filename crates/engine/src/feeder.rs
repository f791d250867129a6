// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic synthetic ticks
//!
//! Time-based result producers only get evaluated when something is folded.
//! The feeder guarantees a fold at a fixed cadence even when no real event
//! source is active.

use heli_core::{saturating_millis, EngineError};
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Starts the tick loop
pub struct TimerFeeder;

impl TimerFeeder {
    /// Call `on_tick` every `interval` until it breaks or the handle is
    /// stopped or dropped
    ///
    /// The next tick is scheduled after `on_tick` returns, so drift
    /// accumulates. A zero interval disables the feeder and returns `None`.
    pub fn start<F>(interval: Duration, mut on_tick: F) -> Result<Option<FeederHandle>, EngineError>
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        if interval.is_zero() {
            debug!("timer feeder disabled");
            return Ok(None);
        }
        let runtime = Handle::try_current().map_err(|_| EngineError::NoRuntime)?;

        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let task = runtime.spawn(async move {
            let interval_ms = saturating_millis(interval);
            info!(interval_ms, "timer feeder started");
            loop {
                tokio::select! {
                    // Fires on explicit stop and when the handle is dropped
                    _ = &mut stop_rx => {
                        info!(interval_ms, "timer feeder stopped");
                        break;
                    }
                    _ = tokio::time::sleep(interval) => {
                        if on_tick().is_break() {
                            info!(interval_ms, "timer feeder finished");
                            break;
                        }
                    }
                }
            }
        });

        Ok(Some(FeederHandle {
            stop: Some(stop_tx),
            task: Some(task),
        }))
    }
}

/// Cancellation handle for a running feeder
///
/// Dropping the handle stops the feeder before its next tick.
#[derive(Debug)]
pub struct FeederHandle {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl FeederHandle {
    /// Whether the tick loop is still alive
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the feeder and wait for the loop to exit
    pub async fn stop(mut self) {
        if let Some(stop) = self.stop.take() {
            // Loop may already have exited on its own
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "timer feeder task did not exit cleanly");
            }
        }
    }
}

#[cfg(test)]
#[path = "feeder_tests.rs"]
mod tests;
