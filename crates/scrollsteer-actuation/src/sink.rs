//! Key output port.

use std::io;

use scrollsteer_steering::Side;

/// Synthetic keyboard output consumed by the actuation scheduler.
///
/// Implementations map a steering side to a concrete key (`'a'` for left,
/// `'d'` for right on the reference binding) and inject press/release
/// events into the platform. Only the scheduler thread calls these
/// methods, and it never holds the steering-state lock while doing so.
///
/// Errors are fatal: the scheduler stops and reports the fault instead of
/// retrying (see [`crate::error::ActuationError`]).
pub trait KeySink: Send {
    /// Hold the side's key down.
    ///
    /// # Errors
    ///
    /// Returns the platform error when the event cannot be injected.
    fn press(&mut self, side: Side) -> io::Result<()>;

    /// Release the side's key.
    ///
    /// # Errors
    ///
    /// Returns the platform error when the event cannot be injected.
    fn release(&mut self, side: Side) -> io::Result<()>;
}
