// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result handle returned to action submitters

use heli_core::{Failure, Settlement};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Completes exactly once, when a sweep terminates the action
///
/// Resolves to `Ok` for success or interruption and to `Err` for rejection.
/// If the engine is dropped while the action is still pending the handle
/// resolves to [`Failure::Abandoned`].
#[derive(Debug)]
pub struct PendingResult<A, S> {
    receiver: oneshot::Receiver<Settlement<A, S>>,
}

impl<A, S> PendingResult<A, S> {
    pub(crate) fn new(receiver: oneshot::Receiver<Settlement<A, S>>) -> Self {
        Self { receiver }
    }

    /// Take the settlement without waiting, `None` while still pending
    pub fn try_settlement(&mut self) -> Option<Settlement<A, S>> {
        match self.receiver.try_recv() {
            Ok(settlement) => Some(settlement),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(Failure::Abandoned)),
        }
    }
}

impl<A, S> Future for PendingResult<A, S> {
    type Output = Settlement<A, S>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(Failure::Abandoned)))
    }
}
