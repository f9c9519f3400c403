//! Prelude module for common actuation types.
//!
//! This module provides a convenient way to import the most commonly used
//! types from the actuation crate.

pub use crate::engine::SteeringEngine;
pub use crate::error::{ActuationError, ActuationResult};
pub use crate::scheduler::SchedulerHandle;
pub use crate::sink::KeySink;
pub use crate::stop::StopToken;
