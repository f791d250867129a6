// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test(start_paused = true)]
async fn system_clock_follows_paused_tokio_time() {
    let clock = SystemClock;
    let t1 = clock.now();
    tokio::time::advance(Duration::from_secs(5)).await;
    let t2 = clock.now();
    assert!(t2.duration_since(t1) >= Duration::from_secs(5));
}

#[test]
fn fake_clock_can_be_advanced() {
    let clock = FakeClock::new();
    let t1 = clock.now();
    clock.advance(Duration::from_secs(60));
    assert_eq!(clock.elapsed_since(t1), Duration::from_secs(60));
}

#[test]
fn fake_clock_is_cloneable_and_shared() {
    let clock1 = FakeClock::new();
    let clock2 = clock1.clone();
    let t1 = clock1.now();
    clock2.advance(Duration::from_secs(30));
    assert_eq!(clock1.elapsed_since(t1), Duration::from_secs(30));
}

#[test]
fn elapsed_since_future_instant_is_zero() {
    let clock = FakeClock::new();
    let later = clock.now() + Duration::from_secs(10);
    assert_eq!(clock.elapsed_since(later), Duration::ZERO);
}

#[test]
fn saturating_millis_counts_whole_milliseconds() {
    assert_eq!(saturating_millis(Duration::from_micros(1_999)), 1);
    assert_eq!(saturating_millis(Duration::from_secs(90)), 90_000);
}

#[test]
fn saturating_millis_caps_instead_of_wrapping() {
    assert_eq!(saturating_millis(Duration::MAX), u64::MAX);
}
