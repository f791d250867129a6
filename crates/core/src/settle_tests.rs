// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use yare::parameterized;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_tracing<T>(f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (logs.contents(), result)
}

fn settle_for(cell: &Arc<TerminalCell>) -> Settle {
    Settle::new(Arc::clone(cell), Arc::from("\"turn\""))
}

#[test]
fn new_cell_is_not_terminated() {
    let cell = TerminalCell::new();
    assert!(!cell.is_terminated());
    assert_eq!(cell.kind(), None);
}

#[parameterized(
    resolve = { OutcomeKind::Success },
    interrupt = { OutcomeKind::Interrupted },
    reject = { OutcomeKind::Error },
)]
fn terminal_method_sets_kind(kind: OutcomeKind) {
    let cell = Arc::new(TerminalCell::new());
    let settle = settle_for(&cell);
    let result = match kind {
        OutcomeKind::Success => settle.resolve(),
        OutcomeKind::Interrupted => settle.interrupt(),
        OutcomeKind::Error => settle.reject(),
    };
    assert!(result.is_ok());
    assert_eq!(cell.kind(), Some(kind));
}

#[test]
fn pend_leaves_cell_untouched() {
    let cell = Arc::new(TerminalCell::new());
    settle_for(&cell).pend();
    assert!(!cell.is_terminated());
}

#[test]
fn stale_handle_after_termination_is_contract_violation() {
    let cell = Arc::new(TerminalCell::new());
    let stale = settle_for(&cell);
    settle_for(&cell).resolve().unwrap();

    let (logs, result) = with_tracing(|| stale.reject());

    match result {
        Err(EngineError::ContractViolation { action, attempted }) => {
            assert_eq!(action, "\"turn\"");
            assert_eq!(attempted, OutcomeKind::Error);
        }
        other => panic!("expected contract violation, got {:?}", other),
    }
    // First terminal kind wins
    assert_eq!(cell.kind(), Some(OutcomeKind::Success));
    assert!(logs.contains("ERROR"), "logs: {}", logs);
    assert!(logs.contains("non-active action"), "logs: {}", logs);
}

#[test]
fn contract_violation_message_names_the_verb() {
    let cell = Arc::new(TerminalCell::new());
    let stale = settle_for(&cell);
    settle_for(&cell).interrupt().unwrap();

    let err = stale.interrupt().unwrap_err();
    assert_eq!(
        err.to_string(),
        "tried to interrupt a non-active action \"turn\""
    );
}

#[test]
fn racing_handles_record_exactly_one_kind() {
    let cell = Arc::new(TerminalCell::new());
    let kinds = [
        OutcomeKind::Success,
        OutcomeKind::Interrupted,
        OutcomeKind::Error,
        OutcomeKind::Success,
    ];
    let threads: Vec<_> = kinds
        .into_iter()
        .map(|kind| {
            let settle = settle_for(&cell);
            std::thread::spawn(move || match kind {
                OutcomeKind::Success => settle.resolve(),
                OutcomeKind::Interrupted => settle.interrupt(),
                OutcomeKind::Error => settle.reject(),
            })
        })
        .collect();
    let winners = threads
        .into_iter()
        .map(|thread| thread.join().unwrap())
        .filter(Result::is_ok)
        .count();

    assert_eq!(winners, 1);
    assert!(cell.is_terminated());
}
