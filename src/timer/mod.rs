//! Non-blocking interval timer.
//!
//! A `Timer` never waits. Every query reads the clock, lazily moves an active
//! timer to expired once enough time has passed, and answers immediately. A
//! control loop can therefore poll any number of timers each iteration.
//!
//! ```rust,ignore
//! let mut blink = Timer::with_timeout(&clock, 500);
//! blink.restart();
//!
//! loop {
//!     if blink.on_restart() {
//!         led.toggle();
//!     }
//! }
//! ```

pub mod state;

use crate::clock::Clock;
use crate::config::{self, TimerSettings};
use crate::error::TimerError;

use state::Phase;
pub use state::TimerState;

/// Interval timer driven by a millisecond [`Clock`].
///
/// A new timer is expired with a timeout of 0 (treated as 1ms when measuring).
/// Configure it, then call [`restart`](Self::restart) to start an interval.
///
/// Elapsed time is `now - waypoint` in wrapping `u32` arithmetic, which stays
/// correct across the clock's rollover as long as the timeout is much shorter
/// than the counter range.
#[derive(Debug, Clone)]
pub struct Timer<C: Clock> {
    clock: C,
    timeout: u32,
    waypoint: u32,
    phase: Phase,
}

impl<C: Clock> Timer<C> {
    /// Create an unconfigured, expired timer.
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            timeout: 0,
            waypoint: 0,
            phase: Phase::INITIAL,
        }
    }

    /// Create an expired timer with the given timeout (0 clamps to 1ms).
    pub fn with_timeout(clock: C, ms: u32) -> Self {
        let mut timer = Self::new(clock);
        timer.set_timeout(ms);
        timer
    }

    /// Create an expired timer from a repetition rate.
    ///
    /// An out-of-range rate leaves the timeout unconfigured, as `set_hertz` does.
    pub fn with_hertz(clock: C, rate: i32) -> Self {
        let mut timer = Self::new(clock);
        timer.set_hertz(rate);
        timer
    }

    /// Create a timer from declarative settings.
    ///
    /// A valid `hertz` wins over `timeout_ms`; an invalid one falls back to
    /// `timeout_ms`. The timer is restarted when `start_active` is set.
    pub fn from_settings(clock: C, settings: &TimerSettings) -> Self {
        let mut timer = Self::new(clock);
        timer.apply(settings);
        timer
    }

    /// Apply settings to an existing timer.
    pub fn apply(&mut self, settings: &TimerSettings) {
        let from_hertz = settings
            .hertz
            .is_some_and(|rate| self.try_set_hertz(rate).is_ok());

        if !from_hertz && let Some(ms) = settings.timeout_ms {
            self.set_timeout(ms);
        }

        if settings.start_active {
            self.restart();
        }
    }

    // ========================================
    // Configuration
    // ========================================

    /// Set the interval length in milliseconds.
    ///
    /// Zero is clamped to 1ms so the timer can never be permanently expired
    /// and percentages never divide by zero.
    pub fn set_timeout(&mut self, ms: u32) {
        if ms < config::MIN_TIMEOUT_MS {
            warn!("timeout {}ms clamped to {}ms", ms, config::MIN_TIMEOUT_MS);
        }
        self.timeout = config::clamp_timeout(ms);
        debug!("timeout set to {}ms", self.timeout);
    }

    /// Set the interval length, rejecting zero instead of clamping it.
    pub fn try_set_timeout(&mut self, ms: u32) -> Result<(), TimerError> {
        if ms < config::MIN_TIMEOUT_MS {
            return Err(TimerError::ZeroTimeout);
        }
        self.set_timeout(ms);
        Ok(())
    }

    /// Set the interval as a repetition rate, `timeout = 1000 / rate`.
    ///
    /// Only `1..=1000` is accepted; anything else is ignored and the previous
    /// timeout kept. The mapping is lossy (see [`config::hertz_to_timeout`]).
    pub fn set_hertz(&mut self, rate: i32) {
        let _ = self.try_set_hertz(rate);
    }

    /// Set the interval as a repetition rate, reporting out-of-range rates.
    pub fn try_set_hertz(&mut self, rate: i32) -> Result<(), TimerError> {
        match config::hertz_to_timeout(rate) {
            Some(ms) => {
                self.timeout = ms;
                debug!("hertz {} set, timeout {}ms", rate, ms);
                Ok(())
            }
            None => {
                warn!("hertz {} ignored", rate);
                Err(TimerError::HertzOutOfRange { requested: rate })
            }
        }
    }

    /// Configured timeout in milliseconds (0 until configured).
    pub fn timeout(&self) -> u32 {
        self.timeout
    }

    // ========================================
    // Control
    // ========================================

    /// Start a new interval from now.
    ///
    /// Works from any state and re-arms both `on_active()` and `on_expired()`.
    pub fn restart(&mut self) {
        self.waypoint = self.clock.millis();
        self.phase = Phase::STARTED;
        trace!("timer restarted at {}ms", self.waypoint);
    }

    /// Stop the timer until the next `restart()`.
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
        trace!("timer stopped");
    }

    // ========================================
    // State queries
    // ========================================

    /// Current state, after moving an elapsed active timer to expired.
    pub fn state(&mut self) -> TimerState {
        self.refresh();
        self.phase.state()
    }

    /// True while time is left.
    pub fn is_active(&mut self) -> bool {
        self.state() == TimerState::Active
    }

    /// True once time has run out (and before any restart).
    pub fn is_expired(&mut self) -> bool {
        self.state() == TimerState::Expired
    }

    /// True after `stop()` until the next `restart()`.
    pub fn is_stopped(&self) -> bool {
        self.phase == Phase::Stopped
    }

    // ========================================
    // Edge-triggered events
    // ========================================

    /// Restart the timer if it has expired.
    ///
    /// Returns true when it restarted. Active and stopped timers are left alone.
    pub fn on_restart(&mut self) -> bool {
        if self.is_expired() {
            self.restart();
            return true;
        }
        false
    }

    /// True the first time the timer is seen active after a restart.
    pub fn on_active(&mut self) -> bool {
        self.refresh();
        self.phase.take_edge(TimerState::Active)
    }

    /// True the first time the timer is seen expired after an active period.
    ///
    /// A timer that was never restarted has no expiry to report.
    pub fn on_expired(&mut self) -> bool {
        self.refresh();
        self.phase.take_edge(TimerState::Expired)
    }

    // ========================================
    // Measurement
    // ========================================

    /// Milliseconds since the last restart.
    ///
    /// Keeps counting after expiry or stop.
    pub fn value(&self) -> u32 {
        self.clock.millis().wrapping_sub(self.waypoint)
    }

    /// Milliseconds left until expiry, 0 once expired.
    pub fn inverse_value(&self) -> u32 {
        self.timeout.saturating_sub(self.value())
    }

    /// Elapsed time as a percentage of the timeout, rounded down.
    ///
    /// Not clamped: an expired timer reports more than 100.
    pub fn percent_value(&self) -> i32 {
        let percent = u64::from(self.value()) * 100 / u64::from(self.divisor());
        i32::try_from(percent).unwrap_or(i32::MAX)
    }

    /// Remaining time as a percentage of the timeout, 0 once expired.
    pub fn inverse_percent_value(&self) -> i32 {
        (100 - self.percent_value()).max(0)
    }

    /// Elapsed fraction of the timeout on a 0.0 to 1.0 scale (unclamped).
    pub fn progress(&self) -> f32 {
        self.value() as f32 / self.divisor() as f32
    }

    // ========================================
    // Accessors
    // ========================================

    /// Clock reading captured at the last restart.
    pub fn waypoint(&self) -> u32 {
        self.waypoint
    }

    /// Get immutable reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Get mutable reference to the clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    // ========================================
    // Internal
    // ========================================

    /// Move an active timer to expired once its time is up.
    fn refresh(&mut self) {
        if let Phase::Active { .. } = self.phase {
            let elapsed = self.value();
            if elapsed >= self.timeout {
                self.phase = Phase::Expired { reported: false };
                trace!("timer expired after {}ms", elapsed);
            }
        }
    }

    /// Timeout used as a divisor; an unconfigured timer measures against 1ms.
    fn divisor(&self) -> u32 {
        config::clamp_timeout(self.timeout)
    }
}
