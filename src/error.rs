//! Error types for timer configuration.
//!
//! The plain setters never fail: they clamp or ignore bad input. `TimerError` is
//! returned only by the checked `try_*` variants, for callers that want to
//! notice misuse instead of silently absorbing it.

use core::fmt;

use crate::config::{MAX_HERTZ, MIN_HERTZ};

/// Timer configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// A timeout of zero milliseconds was requested
    ZeroTimeout,

    /// Repetition rate outside the accepted range
    HertzOutOfRange {
        /// The rejected rate
        requested: i32,
    },
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::ZeroTimeout => write!(f, "Timeout must be at least 1ms"),
            TimerError::HertzOutOfRange { requested } => write!(
                f,
                "Hertz {} out of range {}-{}",
                requested, MIN_HERTZ, MAX_HERTZ
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimerError {}
