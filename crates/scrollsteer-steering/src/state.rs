//! Shared steering state and scroll input types.

use serde::{Deserialize, Serialize};

use crate::MAX_LEVEL;

/// Steering side selected by scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Steer left; mapped to the 'a' key on the reference binding.
    Left,
    /// Steer right; mapped to the 'd' key on the reference binding.
    Right,
}

impl Side {
    /// The opposite steering side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// One scroll-wheel event, signed deltas along both axes.
///
/// Only the sign and magnitude of `dy` drive steering; `dx` is carried for
/// interface completeness and never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollDelta {
    /// Horizontal component (ignored by steering).
    pub dx: f64,
    /// Vertical component; positive is scroll up.
    pub dy: f64,
}

impl ScrollDelta {
    /// A purely vertical scroll event.
    #[must_use]
    pub fn vertical(dy: f64) -> Self {
        Self { dx: 0.0, dy }
    }
}

/// The shared steering record — the single source of truth the event
/// callbacks write and the actuation scheduler reads.
///
/// The struct is `Copy` so the scheduler can snapshot it under the lock and
/// release the lock before any timed wait.
///
/// Invariants (maintained by [`crate::transition::apply_scroll`] and
/// [`SteeringState::recenter`]):
/// - `level <= 15` and `intensity >= 0`;
/// - `direction` is `None` exactly when both magnitudes are zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteeringState {
    /// Global armed/disarmed flag; scroll events are ignored while false.
    pub enabled: bool,
    /// Current steering side; `None` means neutral.
    pub direction: Option<Side>,
    /// Quantized scroll steps (duty-cycle policy), `0..=15`.
    pub level: u8,
    /// Instantaneous scroll magnitude (tap-rate policy), `>= 0`.
    pub intensity: f64,
}

impl SteeringState {
    /// The initial state: neutral and disarmed.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            enabled: false,
            direction: None,
            level: 0,
            intensity: 0.0,
        }
    }

    /// Reset direction and both magnitudes, leaving `enabled` untouched.
    pub fn recenter(&mut self) {
        self.direction = None;
        self.level = 0;
        self.intensity = 0.0;
    }

    /// Whether the state satisfies the documented invariants.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let magnitude_zero = self.level == 0 && self.intensity <= f64::EPSILON;
        self.level <= MAX_LEVEL
            && self.intensity >= 0.0
            && (self.direction.is_none() == magnitude_zero)
    }
}

impl Default for SteeringState {
    fn default() -> Self {
        Self::neutral()
    }
}
