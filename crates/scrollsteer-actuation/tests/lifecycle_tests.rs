//! Scheduler lifecycle tests: lazy start, single instance, fault exit,
//! and shutdown.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use scrollsteer_actuation::prelude::*;
use scrollsteer_actuation::testing::{FailingSink, RecordingSink};
use scrollsteer_steering::{ScrollDelta, SteeringPolicy, MAX_LEVEL};

/// Poll `cond` until it holds or `timeout` elapses.
fn eventually(timeout: Duration, cond: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(10));
    }
    cond()
}

#[test]
fn concurrent_scroll_burst_starts_exactly_one_instance() {
    let engine = Arc::new(SteeringEngine::new(
        RecordingSink::new(),
        SteeringPolicy::DutyCycle,
    ));
    engine.toggle();

    let mut workers = Vec::new();
    for _ in 0..100 {
        let engine = Arc::clone(&engine);
        workers.push(thread::spawn(move || {
            engine.handle_scroll(ScrollDelta::vertical(1.0));
        }));
    }
    for worker in workers {
        assert!(worker.join().is_ok());
    }

    assert_eq!(engine.scheduler_starts(), 1);
    assert!(engine.scheduler_alive());
    assert_eq!(engine.state().level, MAX_LEVEL);

    engine.shutdown();
    assert!(!engine.scheduler_alive());
}

#[test]
fn scheduler_survives_toggle_cycles() {
    let engine = SteeringEngine::new(RecordingSink::new(), SteeringPolicy::DutyCycle);
    engine.toggle();
    engine.handle_scroll(ScrollDelta::vertical(1.0));
    assert_eq!(engine.scheduler_starts(), 1);

    // Toggling off and on keeps the same instance running; it just idles.
    engine.toggle();
    engine.toggle();
    engine.handle_scroll(ScrollDelta::vertical(1.0));

    assert_eq!(engine.scheduler_starts(), 1);
    assert!(engine.scheduler_alive());
    engine.shutdown();
}

#[test]
fn scroll_after_shutdown_starts_a_fresh_instance() {
    let engine = SteeringEngine::new(RecordingSink::new(), SteeringPolicy::DutyCycle);
    engine.toggle();
    engine.handle_scroll(ScrollDelta::vertical(1.0));
    engine.shutdown();
    assert!(!engine.scheduler_alive());

    engine.handle_scroll(ScrollDelta::vertical(1.0));
    assert_eq!(engine.scheduler_starts(), 2);
    assert!(engine.scheduler_alive());
    engine.shutdown();
}

#[test]
fn injection_failure_is_fatal_and_reported() {
    let engine = SteeringEngine::new(FailingSink, SteeringPolicy::DutyCycle);
    let faults = engine.faults();

    engine.toggle();
    engine.handle_scroll(ScrollDelta::vertical(1.0));

    let fault = faults.recv_timeout(Duration::from_secs(5));
    assert!(
        matches!(fault, Ok(ActuationError::Injection(_))),
        "expected an injection fault, got {fault:?}"
    );
    assert!(eventually(Duration::from_secs(5), || !engine.scheduler_alive()));

    // The next scroll event lazily starts a replacement instance.
    engine.handle_scroll(ScrollDelta::vertical(1.0));
    assert_eq!(engine.scheduler_starts(), 2);
    engine.shutdown();
}

#[test]
fn shutdown_completes_within_one_iteration() {
    let engine = SteeringEngine::new(RecordingSink::new(), SteeringPolicy::DutyCycle);
    engine.toggle();
    engine.handle_scroll(ScrollDelta::vertical(1.0));
    assert!(engine.scheduler_alive());

    let start = Instant::now();
    engine.shutdown();

    // One duty period is ~67 ms; a generous bound still catches a stuck
    // uncancellable wait.
    assert!(start.elapsed() < Duration::from_secs(2));
    assert!(!engine.scheduler_alive());
}

#[test]
fn shutdown_without_a_scheduler_is_a_no_op() {
    let engine = SteeringEngine::new(RecordingSink::new(), SteeringPolicy::DutyCycle);
    engine.shutdown();
    assert_eq!(engine.scheduler_starts(), 0);
}
