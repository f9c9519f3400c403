//! The actuation scheduler: one background loop turning steering state
//! into timed key activity.
//!
//! The loop has no fixed iteration count; it runs until its [`StopToken`]
//! is requested. Each iteration snapshots the state under the engine lock,
//! releases the lock, then executes one [`CyclePlan`] with cancellable
//! waits. A scroll event arriving mid-wait is picked up on the next
//! snapshot, so the view is at most one period or one idle interval stale.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam::channel::Sender;
use parking_lot::Mutex;
use tracing::{debug, error};

use scrollsteer_steering::{CyclePlan, SteeringPolicy, next_cycle};

use crate::engine::Shared;
use crate::error::{ActuationError, ActuationResult};
use crate::sink::KeySink;
use crate::stop::StopToken;

/// Handle to the single live scheduler instance.
#[derive(Debug)]
pub struct SchedulerHandle {
    thread: JoinHandle<()>,
    stop: Arc<StopToken>,
}

impl SchedulerHandle {
    /// Whether the instance has exited (completed stop or fault).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Request cancellation; wakes any in-progress wait.
    pub fn request_stop(&self) {
        self.stop.request_stop();
    }

    /// Block until the loop exits.
    ///
    /// Waits are cancellable, so after [`SchedulerHandle::request_stop`]
    /// this completes within one iteration.
    pub fn join(self) {
        if self.thread.join().is_err() {
            error!("actuation thread panicked");
        }
    }
}

/// Start a new scheduler instance with a fresh stop token.
///
/// Called by the engine under the state lock, which is what guarantees at
/// most one live instance.
pub(crate) fn spawn<S: KeySink + 'static>(
    shared: Arc<Mutex<Shared>>,
    sink: Arc<Mutex<S>>,
    policy: SteeringPolicy,
    faults: Sender<ActuationError>,
) -> Result<SchedulerHandle, ActuationError> {
    let stop = Arc::new(StopToken::new());
    let loop_stop = Arc::clone(&stop);

    let thread = thread::Builder::new()
        .name("scrollsteer-actuation".into())
        .spawn(move || {
            if let Err(err) = run(&shared, &sink, policy, &loop_stop) {
                error!(error = %err, "actuation loop faulted");
                let _ = faults.send(err);
            }
        })
        .map_err(ActuationError::Spawn)?;

    Ok(SchedulerHandle { thread, stop })
}

fn run<S: KeySink>(
    shared: &Mutex<Shared>,
    sink: &Mutex<S>,
    policy: SteeringPolicy,
    stop: &StopToken,
) -> ActuationResult {
    debug!("actuation loop started");

    while !stop.is_stopped() {
        let snapshot = shared.lock().state;

        match next_cycle(&snapshot, policy) {
            CyclePlan::Idle { wait } => {
                stop.wait_for(wait);
            }
            CyclePlan::Hold { side, press, release } => {
                sink.lock().press(side).map_err(ActuationError::Injection)?;
                stop.wait_for(press);
                // Always pair the press with a release, even when the stop
                // request cut the wait short: no key may be left stuck down.
                sink.lock().release(side).map_err(ActuationError::Injection)?;
                if !release.is_zero() {
                    stop.wait_for(release);
                }
            }
            CyclePlan::Tap { side, delay } => {
                {
                    let mut sink = sink.lock();
                    sink.press(side).map_err(ActuationError::Injection)?;
                    sink.release(side).map_err(ActuationError::Injection)?;
                }
                stop.wait_for(delay);
            }
        }
    }

    debug!("actuation loop stopped");
    Ok(())
}
