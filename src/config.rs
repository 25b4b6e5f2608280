//! Timer limits and declarative timer settings.
//!
//! The constants bound what the setters accept. `TimerSettings` describes a
//! timer as data so it can be kept in a `const`, or loaded from a configuration
//! file on hosted targets when the `serde` feature is enabled.

use crate::error::TimerError;

/// Smallest timeout a timer will hold once configured (1ms).
pub const MIN_TIMEOUT_MS: u32 = 1;

/// Lowest repetition rate accepted by `set_hertz` (1 Hz = 1000ms).
pub const MIN_HERTZ: i32 = 1;

/// Highest repetition rate accepted by `set_hertz` (1000 Hz = 1ms).
pub const MAX_HERTZ: i32 = 1000;

/// Milliseconds per second, the numerator of the hertz conversion.
pub const MILLIS_PER_SECOND: u32 = 1000;

/// Clamp a requested timeout to the valid minimum.
pub const fn clamp_timeout(ms: u32) -> u32 {
    if ms < MIN_TIMEOUT_MS {
        MIN_TIMEOUT_MS
    } else {
        ms
    }
}

/// Convert a repetition rate to a timeout.
///
/// Returns `None` outside `MIN_HERTZ..=MAX_HERTZ`. The conversion is integer
/// division, so it is lossy: every rate from 501 to 1000 maps to 1ms, 334 to
/// 500 map to 2ms, and so on.
pub const fn hertz_to_timeout(rate: i32) -> Option<u32> {
    if rate < MIN_HERTZ || rate > MAX_HERTZ {
        None
    } else {
        Some(MILLIS_PER_SECOND / rate as u32)
    }
}

/// Declarative description of a timer.
///
/// `hertz` takes precedence over `timeout_ms` when both are present. Invalid
/// values are handled the same way the setters handle them (see
/// [`Timer::from_settings`](crate::Timer::from_settings)); call
/// [`validate`](Self::validate) first to reject them instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerSettings {
    /// Interval length in milliseconds
    pub timeout_ms: Option<u32>,

    /// Interval expressed as a repetition rate
    pub hertz: Option<i32>,

    /// Restart the timer immediately after applying the settings
    pub start_active: bool,
}

impl TimerSettings {
    /// Settings for a fixed timeout.
    pub const fn timeout(ms: u32) -> Self {
        Self {
            timeout_ms: Some(ms),
            hertz: None,
            start_active: false,
        }
    }

    /// Settings for a repetition rate.
    pub const fn hertz(rate: i32) -> Self {
        Self {
            timeout_ms: None,
            hertz: Some(rate),
            start_active: false,
        }
    }

    /// Same settings, started on construction.
    pub const fn started(mut self) -> Self {
        self.start_active = true;
        self
    }

    /// Check the settings against the setter limits.
    ///
    /// Reports the first problem found. Missing values are not an error.
    pub fn validate(&self) -> Result<(), TimerError> {
        if let Some(rate) = self.hertz
            && hertz_to_timeout(rate).is_none()
        {
            return Err(TimerError::HertzOutOfRange { requested: rate });
        }
        if self.timeout_ms == Some(0) {
            return Err(TimerError::ZeroTimeout);
        }
        Ok(())
    }
}
