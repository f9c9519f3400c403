//! Prelude module for common steering types.
//!
//! This module provides a convenient way to import the most commonly used
//! types from the steering crate.

pub use crate::plan::{CyclePlan, duty_cycle, next_cycle, tap_frequency};
pub use crate::state::{ScrollDelta, Side, SteeringState};
pub use crate::transition::{SteeringPolicy, apply_scroll};
pub use crate::{DUTY_PERIOD_SECS, IDLE_WAIT, MAX_LEVEL, MAX_TAP_HZ};
