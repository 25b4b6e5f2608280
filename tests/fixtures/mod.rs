//! Test fixtures for millis-timer testing.
//!
//! Provides:
//! - `MockClock`: Settable implementation of the Clock trait
//! - `BLINK`, `SAMPLE`: Settings for the control loop scenarios

#![allow(dead_code)]

use core::cell::Cell;
use millis_timer::{Clock, TimerSettings};

// ============================================================================
// MockClock - Test Clock Implementation
// ============================================================================

/// Mock millisecond clock for testing.
///
/// Interior mutability lets the test move time while timers hold `&MockClock`.
/// Reads are counted so tests can check when a timer touched the clock.
#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<u32>,
    reads: Cell<usize>,
}

impl MockClock {
    /// Create clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create clock starting at the given reading.
    pub fn at(ms: u32) -> Self {
        Self {
            now: Cell::new(ms),
            reads: Cell::new(0),
        }
    }

    /// Jump to an absolute reading.
    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    /// Move forward, wrapping like a hardware counter.
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// Current reading without counting it as a read.
    pub fn peek(&self) -> u32 {
        self.now.get()
    }

    /// Number of `millis()` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Clock for MockClock {
    fn millis(&self) -> u32 {
        self.reads.set(self.reads.get() + 1);
        self.now.get()
    }
}

// ============================================================================
// Settings
// ============================================================================

/// 2 Hz LED blink, started immediately.
pub const BLINK: TimerSettings = TimerSettings::hertz(2).started();

/// 150ms sensor sample interval.
pub const SAMPLE: TimerSettings = TimerSettings::timeout(150).started();
