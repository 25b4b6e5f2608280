//! Millisecond clock abstraction for platform-agnostic timekeeping.
//!
//! The `Clock` trait is the only thing a timer needs from the platform: a
//! non-blocking read of a free-running millisecond counter (SysTick handler,
//! RTC, `std::time::Instant`, ...).

/// Platform-agnostic millisecond clock trait.
///
/// Implementations return the number of milliseconds since an arbitrary fixed
/// epoch (usually boot). The counter is expected to wrap at `u32::MAX` on long
/// uptimes (about 49.7 days); timers handle the wrap with wrapping subtraction.
///
/// `millis()` MUST NOT block. It takes `&self` so one clock can be shared by
/// reference between many timers.
pub trait Clock {
    /// Current counter reading in milliseconds.
    fn millis(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn millis(&self) -> u32 {
        (**self).millis()
    }
}

/// Adapter turning a free function or closure into a [`Clock`].
///
/// Useful for board support crates that already expose a `millis()` function:
///
/// ```rust,ignore
/// let clock = FnClock::new(board::millis);
/// let mut blink = Timer::with_timeout(clock, 500);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnClock<F>(F);

impl<F: Fn() -> u32> FnClock<F> {
    /// Wrap a millisecond source.
    pub const fn new(source: F) -> Self {
        Self(source)
    }
}

impl<F: Fn() -> u32> Clock for FnClock<F> {
    fn millis(&self) -> u32 {
        (self.0)()
    }
}

/// Hosted clock backed by `std::time::Instant` (requires `std` feature).
///
/// Elapsed time is truncated to `u32` so the reading wraps exactly like a
/// 32-bit microcontroller counter.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    epoch: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock whose epoch is now.
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn millis(&self) -> u32 {
        self.epoch.elapsed().as_millis() as u32
    }
}
