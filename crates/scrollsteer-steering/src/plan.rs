//! Per-cycle actuation planning.
//!
//! The scheduler calls [`next_cycle`] once per iteration with a state
//! snapshot; the returned plan is executed with cancellable waits. Keeping
//! the mapping pure makes the timing rules testable without threads or a
//! wall clock.

use std::time::Duration;

use crate::state::{Side, SteeringState};
use crate::transition::SteeringPolicy;
use crate::{DUTY_PERIOD_SECS, IDLE_WAIT, MAX_LEVEL, MAX_TAP_HZ};

/// One scheduler iteration's worth of key activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePlan {
    /// Nothing to actuate; sleep briefly before the next snapshot.
    Idle {
        /// How long to sleep before re-reading the state.
        wait: Duration,
    },
    /// Hold the side's key for `press`, then stay released for `release`.
    /// The two always sum to one full duty period.
    Hold {
        /// Which key to hold.
        side: Side,
        /// Key-down portion of the period; always positive.
        press: Duration,
        /// Key-up remainder of the period; zero at 100% duty.
        release: Duration,
    },
    /// Tap the side's key once, then wait `delay` until the next snapshot.
    Tap {
        /// Which key to tap.
        side: Side,
        /// Gap between taps, `1/frequency`.
        delay: Duration,
    },
}

/// Fraction of the duty period the key is held for a given level.
///
/// Clamped to `[0, 1]`: level 0 maps to 0.0, level 15 to 1.0.
#[must_use]
pub fn duty_cycle(level: u8) -> f64 {
    f64::from(level.min(MAX_LEVEL)) / f64::from(MAX_LEVEL)
}

/// Tap frequency in Hz for a given scroll intensity, clamped to
/// `[0, MAX_TAP_HZ]`.
#[must_use]
pub fn tap_frequency(intensity: f64) -> f64 {
    (intensity * MAX_TAP_HZ).clamp(0.0, MAX_TAP_HZ)
}

/// Compute the next cycle for a state snapshot.
///
/// Neutral snapshots (no direction, or a zero magnitude) plan an idle wait
/// so the loop never busy-spins while there is nothing to do.
#[must_use]
pub fn next_cycle(state: &SteeringState, policy: SteeringPolicy) -> CyclePlan {
    let Some(side) = state.direction else {
        return CyclePlan::Idle { wait: IDLE_WAIT };
    };

    match policy {
        SteeringPolicy::DutyCycle => {
            let duty = duty_cycle(state.level);
            if duty <= 0.0 {
                return CyclePlan::Idle { wait: IDLE_WAIT };
            }
            CyclePlan::Hold {
                side,
                press: Duration::from_secs_f64(DUTY_PERIOD_SECS * duty),
                release: Duration::from_secs_f64(DUTY_PERIOD_SECS * (1.0 - duty)),
            }
        }
        SteeringPolicy::TapRate => {
            let hz = tap_frequency(state.intensity);
            if hz <= 0.0 {
                return CyclePlan::Idle { wait: IDLE_WAIT };
            }
            // A rate too low for Duration to represent is an idle in practice.
            match Duration::try_from_secs_f64(hz.recip()) {
                Ok(delay) => CyclePlan::Tap { side, delay },
                Err(_) => CyclePlan::Idle { wait: IDLE_WAIT },
            }
        }
    }
}
