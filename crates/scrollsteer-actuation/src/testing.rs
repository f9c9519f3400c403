//! Key-sink test doubles shared by unit and integration tests.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use scrollsteer_steering::Side;

use crate::sink::KeySink;

/// A single key action observed by [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// The side's key went down.
    Press(Side),
    /// The side's key came back up.
    Release(Side),
}

/// Records actions instead of injecting them.
///
/// Clones share the same log, so a test can hand one clone to the engine
/// and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    log: Arc<Mutex<Vec<KeyAction>>>,
}

impl RecordingSink {
    /// An empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions recorded so far, in order.
    #[must_use]
    pub fn actions(&self) -> Vec<KeyAction> {
        self.log.lock().clone()
    }

    /// Number of actions recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }
}

impl KeySink for RecordingSink {
    fn press(&mut self, side: Side) -> io::Result<()> {
        self.log.lock().push(KeyAction::Press(side));
        Ok(())
    }

    fn release(&mut self, side: Side) -> io::Result<()> {
        self.log.lock().push(KeyAction::Release(side));
        Ok(())
    }
}

/// Fails every injection, for fault-path tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSink;

impl KeySink for FailingSink {
    fn press(&mut self, _side: Side) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "virtual keyboard gone"))
    }

    fn release(&mut self, _side: Side) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "virtual keyboard gone"))
    }
}
