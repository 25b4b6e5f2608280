//! # millis-timer
//!
//! Non-blocking interval timer for embedded control loops.
//!
//! **Key features:**
//! - **Never blocks** - Every query reads the clock and returns immediately
//! - **Lazy state machine** - Active, expired and stopped, refreshed on each query
//! - **Edge events** - `on_active()`, `on_expired()` and `on_restart()` fire once per transition
//! - **Rollover safe** - Elapsed time uses wrapping arithmetic on the `u32` counter
//! - **Flexible clock** - Platform-agnostic millisecond clock trait
//!
//! Many timers can share one clock by reference; each timer is one interval.
//!
//! ## Optional Features
//!
//! - `std` - `StdClock` backed by `std::time::Instant`, `std::error::Error` impls
//! - `serde` - Serialize/Deserialize for `TimerSettings` and `TimerState`
//! - `log` / `defmt` - Trace state transitions and configuration through a logging backend
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "std")]
extern crate std;

// Logging macros must be declared before the modules that use them
mod fmt;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod clock;
pub mod config;
pub mod error;
pub mod timer;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Clock source
pub use clock::{Clock, FnClock};

#[cfg(feature = "std")]
pub use clock::StdClock;

// Configuration
pub use config::TimerSettings;

// Error types
pub use error::TimerError;

// Timer
pub use timer::{Timer, TimerState};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
