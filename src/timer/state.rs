//! Timer state machine states.
//!
//! `TimerState` is the public, observable tri-state. `Phase` is what the timer
//! actually stores: the same three states, with the edge latches carried inside
//! the state they belong to so they cannot get out of step with it.

/// Observable timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// Running, time left
    Active,

    /// Ran out of time (also the state of a never-started timer)
    Expired,

    /// Explicitly stopped; only `restart()` leaves this state
    Stopped,
}

/// Stored state with edge latches.
///
/// `reported` records whether the matching `on_active()` / `on_expired()` edge
/// has already been consumed during this period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Active { reported: bool },
    Expired { reported: bool },
    Stopped,
}

impl Phase {
    /// State of a timer that has never been restarted.
    ///
    /// Expired, with no pending expiry edge: there was no active period to
    /// expire from.
    pub(crate) const INITIAL: Self = Phase::Expired { reported: true };

    /// Entered on every restart.
    pub(crate) const STARTED: Self = Phase::Active { reported: false };

    pub(crate) const fn state(self) -> TimerState {
        match self {
            Phase::Active { .. } => TimerState::Active,
            Phase::Expired { .. } => TimerState::Expired,
            Phase::Stopped => TimerState::Stopped,
        }
    }

    /// Consume the edge of the current period.
    ///
    /// Returns true if the phase is `target` and its edge had not yet been
    /// reported. Stopped has no edge.
    pub(crate) fn take_edge(&mut self, target: TimerState) -> bool {
        match self {
            Phase::Active { reported } if target == TimerState::Active => {
                !core::mem::replace(reported, true)
            }
            Phase::Expired { reported } if target == TimerState::Expired => {
                !core::mem::replace(reported, true)
            }
            _ => false,
        }
    }
}
