//! Steering state machine and actuation timing math for ScrollSteer.
//!
//! This crate is the pure domain layer of the scroll-wheel steering
//! emulator. It knows nothing about threads, input devices, or synthetic
//! key injection; it only answers two questions:
//!
//! - **Transition**: given the current [`SteeringState`] and one scroll
//!   event, what is the next state? (see [`transition`])
//! - **Planning**: given a state snapshot, what should the actuation loop
//!   do for one cycle — hold a key, tap it, or idle? (see [`plan`])
//!
//! Two interchangeable policies are supported, selected once at startup:
//!
//! - [`SteeringPolicy::DutyCycle`]: scroll steps accumulate into a
//!   quantized level `0..=15`; the mapped key is held for
//!   `level / 15` of a fixed 1/15 s period each cycle.
//! - [`SteeringPolicy::TapRate`]: each scroll event overwrites an
//!   instantaneous intensity; the mapped key is tapped at
//!   `intensity * 15` Hz (clamped to 15 Hz).
//!
//! # Example
//!
//! ```
//! use scrollsteer_steering::prelude::*;
//!
//! let mut state = SteeringState::neutral();
//! state.enabled = true;
//!
//! apply_scroll(&mut state, ScrollDelta::vertical(1.0), SteeringPolicy::DutyCycle);
//! assert_eq!(state.direction, Some(Side::Right));
//! assert_eq!(state.level, 1);
//!
//! match next_cycle(&state, SteeringPolicy::DutyCycle) {
//!     CyclePlan::Hold { side, press, release } => {
//!         assert_eq!(side, Side::Right);
//!         assert!(press < release);
//!     }
//!     other => panic!("expected a hold cycle, got {other:?}"),
//! }
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]

pub mod plan;
pub mod state;
pub mod transition;

pub mod prelude;

pub use plan::{CyclePlan, duty_cycle, next_cycle, tap_frequency};
pub use state::{ScrollDelta, Side, SteeringState};
pub use transition::{SteeringPolicy, apply_scroll};

use std::time::Duration;

/// Scroll steps for a 100% duty cycle; also the quantized level ceiling.
pub const MAX_LEVEL: u8 = 15;

/// Fixed duty-cycle period in seconds (~66.7 ms).
pub const DUTY_PERIOD_SECS: f64 = 1.0 / 15.0;

/// Tap-rate ceiling for the continuous policy, in Hz.
pub const MAX_TAP_HZ: f64 = 15.0;

/// Sleep between snapshots while there is nothing to actuate.
pub const IDLE_WAIT: Duration = Duration::from_millis(10);
