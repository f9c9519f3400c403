//! Scroll transition policies.
//!
//! A transition maps the current [`SteeringState`] and one scroll event to
//! the next state. Both observed policies are implemented; the choice is
//! fixed at startup and shared with the cycle planner in [`crate::plan`].

use serde::{Deserialize, Serialize};

use crate::MAX_LEVEL;
use crate::state::{ScrollDelta, Side, SteeringState};

/// Transition/timing policy, selected once at startup.
///
/// Serialized in kebab-case (`duty-cycle`, `tap-rate`), matching the CLI
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SteeringPolicy {
    /// Scroll steps accumulate into a quantized level that modulates the
    /// press/release duty cycle of the mapped key. Default; matches the
    /// reference behavior.
    #[default]
    DutyCycle,
    /// Each scroll event overwrites an instantaneous intensity that
    /// modulates the rate of discrete key taps.
    TapRate,
}

/// Apply one scroll event to the state.
///
/// Must be called under the same lock that guards the scheduler-start
/// check, so the read-modify-write and a possible lazy start are atomic
/// together. Events with `dy == 0` leave the state untouched. The caller
/// is expected to have checked `state.enabled`.
pub fn apply_scroll(state: &mut SteeringState, delta: ScrollDelta, policy: SteeringPolicy) {
    let Some(toward) = scroll_side(delta.dy) else {
        return;
    };

    match policy {
        SteeringPolicy::DutyCycle => step_quantized(state, toward),
        SteeringPolicy::TapRate => overwrite_intensity(state, toward, delta.dy.abs()),
    }
}

/// Side a vertical delta steers toward: up is right, down is left.
fn scroll_side(dy: f64) -> Option<Side> {
    if dy > 0.0 {
        Some(Side::Right)
    } else if dy < 0.0 {
        Some(Side::Left)
    } else {
        None
    }
}

/// Quantized accumulation: scrolling toward the current (or neutral)
/// direction adds a step, scrolling against it removes one.
///
/// A step that unwinds the last opposite level stops dead at neutral
/// rather than crossing over; the next event starts the new direction at
/// level 1.
fn step_quantized(state: &mut SteeringState, toward: Side) {
    match state.direction {
        Some(current) if current != toward => {
            state.level = state.level.saturating_sub(1);
            if state.level == 0 {
                state.direction = None;
            }
        }
        _ => {
            state.direction = Some(toward);
            state.level = state.level.saturating_add(1).min(MAX_LEVEL);
        }
    }
}

/// Continuous overwrite: no accumulation, no decay. Return-to-center only
/// happens via toggle-off, never from the scroll signal itself.
fn overwrite_intensity(state: &mut SteeringState, toward: Side, magnitude: f64) {
    state.direction = Some(toward);
    state.intensity = magnitude;
}
