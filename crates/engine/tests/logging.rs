// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Global subscriber setup; its own test binary since it installs a global

use heli_engine::logging;

#[test]
fn init_installs_subscriber_once() {
    assert!(logging::init().is_ok());
    assert!(logging::init_with_default("debug").is_err());
}
