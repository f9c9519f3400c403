//! Cooperative cancellation for the scheduler loop.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Shared stop signal with a cancellable timed wait.
///
/// The scheduler sleeps through [`StopToken::wait_for`]; `request_stop`
/// wakes any in-progress wait immediately, so shutdown latency is bounded
/// by a wake-up rather than by the idle-poll granularity. Each scheduler
/// instance owns a fresh token, so a stale stop request can never cancel
/// a later instance.
#[derive(Debug, Default)]
pub struct StopToken {
    stopped: Mutex<bool>,
    wake: Condvar,
}

impl StopToken {
    /// A token with no stop requested.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake any waiter.
    pub fn request_stop(&self) {
        let mut stopped = self.stopped.lock();
        *stopped = true;
        self.wake.notify_all();
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        *self.stopped.lock()
    }

    /// Sleep up to `timeout`, returning early if cancellation arrives.
    ///
    /// Returns `true` once cancellation has been requested.
    pub fn wait_for(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut stopped = self.stopped.lock();
        while !*stopped {
            if self.wake.wait_until(&mut stopped, deadline).timed_out() {
                break;
            }
        }
        *stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn wait_runs_to_timeout_without_stop() {
        let token = StopToken::new();
        let start = Instant::now();

        let stopped = token.wait_for(Duration::from_millis(20));

        assert!(!stopped);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn stop_wakes_a_waiting_thread_early() {
        let token = Arc::new(StopToken::new());
        let waiter = Arc::clone(&token);

        let handle = thread::spawn(move || {
            let start = Instant::now();
            let stopped = waiter.wait_for(Duration::from_secs(30));
            (stopped, start.elapsed())
        });

        thread::sleep(Duration::from_millis(10));
        token.request_stop();

        let (stopped, elapsed) = handle.join().unwrap_or((false, Duration::from_secs(30)));
        assert!(stopped);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn wait_after_stop_returns_immediately() {
        let token = StopToken::new();
        token.request_stop();

        let start = Instant::now();
        assert!(token.wait_for(Duration::from_secs(10)));
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
