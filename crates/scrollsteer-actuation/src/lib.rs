//! Actuation scheduler and lifecycle management for ScrollSteer.
//!
//! This crate turns the pure steering model from `scrollsteer-steering`
//! into synthetic key activity:
//!
//! - [`SteeringEngine`] owns the shared [`SteeringState`] behind a single
//!   lock, applies scroll and toggle events, and lazily starts the one
//!   background scheduler instance.
//! - The scheduler loop snapshots the state each iteration, plans one
//!   cycle, and drives a [`KeySink`] with cancellable waits.
//! - [`StopToken`] bounds shutdown latency: a stop request wakes any
//!   in-progress wait, and the loop exits at the next iteration boundary
//!   with the key released.
//!
//! # Concurrency
//!
//! Scroll and toggle callbacks are arbitrary concurrent producers; the
//! engine serializes them through one `parking_lot::Mutex` that also
//! guards the scheduler slot, so the check-and-start on a scroll burst can
//! never race into a second instance. The lock is never held across a
//! timed wait or key injection.
//!
//! [`SteeringState`]: scrollsteer_steering::SteeringState

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod scheduler;
pub mod sink;
pub mod stop;
pub mod testing;

pub mod prelude;

pub use engine::SteeringEngine;
pub use error::{ActuationError, ActuationResult};
pub use scheduler::SchedulerHandle;
pub use sink::KeySink;
pub use stop::StopToken;
