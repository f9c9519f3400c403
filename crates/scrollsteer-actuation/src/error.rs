//! Error types for the actuation crate.

use std::io;
use thiserror::Error;

/// Faults surfaced by the actuation scheduler.
///
/// Both variants are fatal to the process: an engine that cannot inject
/// keys must stop loudly rather than run a scheduler that silently does
/// nothing.
#[derive(Debug, Error)]
pub enum ActuationError {
    /// The platform key sink failed to inject a synthetic event.
    #[error("synthetic key injection failed: {0}")]
    Injection(#[source] io::Error),

    /// The actuation thread could not be spawned.
    #[error("failed to start actuation thread: {0}")]
    Spawn(#[source] io::Error),
}

/// Result alias for actuation operations.
pub type ActuationResult<T = ()> = Result<T, ActuationError>;
