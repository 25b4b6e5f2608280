//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

pub use fixtures::MockClock;
use millis_timer::{Timer, TimerState};

// ============================================================================
// Timer Creation Helpers
// ============================================================================

/// Create a timer with the given timeout and restart it at the clock's current reading.
pub fn started_timer(clock: &MockClock, timeout: u32) -> Timer<&MockClock> {
    let mut timer = Timer::with_timeout(clock, timeout);
    timer.restart();
    timer
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the full observable state, checking every query agrees.
pub fn assert_state(timer: &mut Timer<&MockClock>, expected: TimerState) {
    assert_eq!(
        timer.state(),
        expected,
        "unexpected state at {}ms (elapsed {}ms)",
        timer.clock().peek(),
        timer.value()
    );
    assert_eq!(timer.is_active(), expected == TimerState::Active);
    assert_eq!(timer.is_expired(), expected == TimerState::Expired);
    assert_eq!(timer.is_stopped(), expected == TimerState::Stopped);
}

/// Step the clock one millisecond at a time, calling `poll` after each step.
///
/// Returns the elapsed times (relative to the start) at which `poll` returned true.
pub fn poll_for(
    clock: &MockClock,
    steps: u32,
    mut poll: impl FnMut() -> bool,
) -> Vec<u32> {
    let mut fired = Vec::new();
    for step in 1..=steps {
        clock.advance(1);
        if poll() {
            fired.push(step);
        }
    }
    fired
}
