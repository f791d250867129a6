// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine instance wiring a registry to an optional timer feeder

use crate::feeder::{FeederHandle, TimerFeeder};
use crate::pending::PendingResult;
use crate::registry::{Registry, Submission};
use heli_core::{Clock, EngineConfig, EngineError, SystemClock};
use std::fmt::Debug;
use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

type SharedRegistry<A, E, S, C> = Arc<Mutex<Registry<A, E, S, C>>>;

/// A reconciliation engine
///
/// Clones share the same registry. Separate engines are independent. All
/// calls are serialized by one lock that is held while reducers and result
/// producers run, so those must not call back into the engine.
pub struct Engine<A, E, S, C: Clock = SystemClock> {
    registry: SharedRegistry<A, E, S, C>,
    feeder: Arc<Mutex<Option<FeederHandle>>>,
}

impl<A, E, S, C: Clock> Clone for Engine<A, E, S, C> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            feeder: Arc::clone(&self.feeder),
        }
    }
}

impl<A, E, S> Engine<A, E, S, SystemClock>
where
    A: Clone + Debug + Send + 'static,
    E: Send + 'static,
    S: Debug + Send + 'static,
{
    /// Create an engine; a non-zero `config.timeout` starts ticking, which
    /// requires a tokio runtime
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<A, E, S, C> Engine<A, E, S, C>
where
    A: Clone + Debug + Send + 'static,
    E: Send + 'static,
    S: Debug + Send + 'static,
    C: Clock + 'static,
{
    pub fn with_clock(config: EngineConfig, clock: C) -> Result<Self, EngineError> {
        let registry = Arc::new(Mutex::new(Registry::new(clock)));

        let weak = Arc::downgrade(&registry);
        let feeder = TimerFeeder::start(config.timeout, move || tick_registry(&weak))?;

        Ok(Self {
            registry,
            feeder: Arc::new(Mutex::new(feeder)),
        })
    }

    /// Register an action; see [`Registry::submit`]
    pub fn submit(
        &self,
        submission: Submission<A, E, S>,
    ) -> Result<PendingResult<A, S>, EngineError> {
        self.lock().submit(submission)
    }

    /// Deliver an external event to every pending action
    pub fn process_event(&self, event: E) -> Result<(), EngineError> {
        self.lock().process_event(Some(&event))
    }

    /// Deliver a synthetic tick with no payload
    pub fn tick(&self) -> Result<(), EngineError> {
        self.lock().process_event(None)
    }

    pub fn list_pending(&self) -> Vec<A> {
        self.lock().list_pending()
    }

    pub fn pending_count(&self) -> usize {
        self.lock().pending_count()
    }

    pub fn oldest_pending_age(&self) -> Option<Duration> {
        self.lock().oldest_pending_age()
    }

    /// Whether the timer feeder is delivering ticks
    pub fn is_ticking(&self) -> bool {
        self.feeder
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .is_some_and(FeederHandle::is_running)
    }

    /// Stop the timer feeder. Pending actions stay pending.
    pub async fn shutdown(&self) {
        let feeder = self
            .feeder
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(feeder) = feeder {
            feeder.stop().await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry<A, E, S, C>> {
        self.registry.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// One feeder tick. Stops the feeder once the engine is gone or a sweep
/// hits a contract violation.
fn tick_registry<A, E, S, C>(registry: &Weak<Mutex<Registry<A, E, S, C>>>) -> ControlFlow<()>
where
    A: Clone + Debug,
    S: Debug,
    C: Clock,
{
    let Some(registry) = registry.upgrade() else {
        return ControlFlow::Break(());
    };
    let result = registry
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .process_event(None);
    match result {
        Ok(()) => ControlFlow::Continue(()),
        Err(e) => {
            tracing::error!(error = %e, "tick failed, stopping timer feeder");
            ControlFlow::Break(())
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
