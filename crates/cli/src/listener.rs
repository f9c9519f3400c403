//! Event listener threads feeding the steering engine.
//!
//! Each input device gets a blocking reader thread, matching the model of
//! arbitrary concurrent producers the engine is built for. The threads
//! are detached; they run until the process exits. Events that do not
//! decode to something steering-relevant are skipped, never errors.

use std::io;
use std::sync::Arc;
use std::thread;

use evdev::{Device, InputEventKind, Key, RelativeAxisType};
use tracing::{debug, error};

use scrollsteer_actuation::{KeySink, SteeringEngine};
use scrollsteer_steering::ScrollDelta;

/// Hardware toggle trigger: numpad 0 (virtual key code 96 on the
/// reference platform binding).
pub const TOGGLE_KEY: Key = Key::KEY_KP0;

/// Key-down value of an evdev key event (2 is auto-repeat).
const KEY_DOWN: i32 = 1;

/// Start the thread translating wheel events into scroll deltas.
pub fn spawn_scroll_listener<S>(
    mut device: Device,
    engine: Arc<SteeringEngine<S>>,
) -> io::Result<()>
where
    S: KeySink + 'static,
{
    thread::Builder::new()
        .name("scroll-listener".into())
        .spawn(move || {
            loop {
                let events = match device.fetch_events() {
                    Ok(events) => events,
                    Err(err) => {
                        error!(error = %err, "scroll device lost, listener stopping");
                        return;
                    }
                };

                for event in events {
                    match event.kind() {
                        InputEventKind::RelAxis(RelativeAxisType::REL_WHEEL) => {
                            engine.handle_scroll(ScrollDelta::vertical(f64::from(event.value())));
                        }
                        InputEventKind::RelAxis(RelativeAxisType::REL_HWHEEL) => {
                            // Horizontal motion is part of the event stream
                            // but never steers.
                            engine.handle_scroll(ScrollDelta {
                                dx: f64::from(event.value()),
                                dy: 0.0,
                            });
                        }
                        _ => {}
                    }
                }
            }
        })
        .map(|_| ())
}

/// Start the thread watching the keyboard for the toggle key.
pub fn spawn_toggle_listener<S>(
    mut device: Device,
    engine: Arc<SteeringEngine<S>>,
) -> io::Result<()>
where
    S: KeySink + 'static,
{
    thread::Builder::new()
        .name("toggle-listener".into())
        .spawn(move || {
            loop {
                let events = match device.fetch_events() {
                    Ok(events) => events,
                    Err(err) => {
                        error!(error = %err, "keyboard device lost, listener stopping");
                        return;
                    }
                };

                for event in events {
                    if event.kind() == InputEventKind::Key(TOGGLE_KEY) && event.value() == KEY_DOWN
                    {
                        let enabled = engine.toggle();
                        debug!(enabled, "toggle key pressed");
                    }
                }
            }
        })
        .map(|_| ())
}
