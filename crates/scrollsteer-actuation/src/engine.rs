//! Steering engine: shared state, toggle handling, and scheduler
//! lifecycle.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam::channel::{Receiver, Sender, unbounded};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use scrollsteer_steering::{ScrollDelta, SteeringPolicy, SteeringState, apply_scroll};

use crate::error::ActuationError;
use crate::scheduler::{self, SchedulerHandle};
use crate::sink::KeySink;

/// Everything behind the single lock: the steering record plus the
/// scheduler slot, so a state mutation and the lazy-start check are one
/// atomic step.
pub(crate) struct Shared {
    pub(crate) state: SteeringState,
    pub(crate) scheduler: Option<SchedulerHandle>,
}

/// Central coordinator owning the steering state and the one scheduler
/// instance.
///
/// Scroll and toggle callbacks may arrive on arbitrary threads; both go
/// through the same lock. The scheduler reads the state through that lock
/// as well, but only to snapshot it, never across a wait or a key
/// injection.
pub struct SteeringEngine<S: KeySink> {
    shared: Arc<Mutex<Shared>>,
    sink: Arc<Mutex<S>>,
    policy: SteeringPolicy,
    faults_tx: Sender<ActuationError>,
    faults_rx: Receiver<ActuationError>,
    starts: AtomicU64,
}

impl<S: KeySink> SteeringEngine<S> {
    /// A new engine in the neutral, disarmed state. No scheduler runs
    /// until the first scroll event after arming.
    #[must_use]
    pub fn new(sink: S, policy: SteeringPolicy) -> Self {
        let (faults_tx, faults_rx) = unbounded();
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state: SteeringState::neutral(),
                scheduler: None,
            })),
            sink: Arc::new(Mutex::new(sink)),
            policy,
            faults_tx,
            faults_rx,
            starts: AtomicU64::new(0),
        }
    }

    /// Channel carrying fatal scheduler faults. The process coordinator
    /// should treat any message as a reason to shut down.
    #[must_use]
    pub fn faults(&self) -> Receiver<ActuationError> {
        self.faults_rx.clone()
    }

    /// The policy this engine was started with.
    #[must_use]
    pub fn policy(&self) -> SteeringPolicy {
        self.policy
    }

    /// Flip the armed/disarmed flag; returns the new value.
    ///
    /// Disarming recenters direction and magnitude in the same critical
    /// section, so the scheduler's next snapshot observes a clean neutral
    /// state. The scheduler itself keeps running and idles.
    pub fn toggle(&self) -> bool {
        let enabled = {
            let mut shared = self.shared.lock();
            shared.state.enabled = !shared.state.enabled;
            if !shared.state.enabled {
                shared.state.recenter();
            }
            shared.state.enabled
        };

        if enabled {
            info!("steering ENABLED");
        } else {
            info!("steering DISABLED");
        }
        enabled
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SteeringState {
        self.shared.lock().state
    }

    /// How many scheduler instances have been started so far.
    #[must_use]
    pub fn scheduler_starts(&self) -> u64 {
        self.starts.load(Ordering::Relaxed)
    }

    /// Whether a scheduler instance is currently alive.
    #[must_use]
    pub fn scheduler_alive(&self) -> bool {
        self.shared
            .lock()
            .scheduler
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the scheduler and wait for it to exit. Idempotent; also called
    /// on drop.
    pub fn shutdown(&self) {
        let handle = self.shared.lock().scheduler.take();
        if let Some(handle) = handle {
            handle.request_stop();
            handle.join();
            debug!("actuation scheduler stopped");
        }
    }
}

impl<S: KeySink + 'static> SteeringEngine<S> {
    /// Apply one scroll event.
    ///
    /// Ignored entirely while disarmed. Otherwise the transition and the
    /// scheduler-alive check happen under one lock acquisition, so a burst
    /// of concurrent events still starts at most one instance.
    pub fn handle_scroll(&self, delta: ScrollDelta) {
        let mut shared = self.shared.lock();
        if !shared.state.enabled {
            return;
        }
        apply_scroll(&mut shared.state, delta, self.policy);
        self.ensure_scheduler(&mut shared);
    }

    fn ensure_scheduler(&self, shared: &mut Shared) {
        if shared
            .scheduler
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
        {
            return;
        }

        match scheduler::spawn(
            Arc::clone(&self.shared),
            Arc::clone(&self.sink),
            self.policy,
            self.faults_tx.clone(),
        ) {
            Ok(handle) => {
                self.starts.fetch_add(1, Ordering::Relaxed);
                shared.scheduler = Some(handle);
            }
            Err(err) => {
                warn!(error = %err, "could not start actuation scheduler");
                let _ = self.faults_tx.send(err);
            }
        }
    }
}

impl<S: KeySink> Drop for SteeringEngine<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
