//! Input device discovery.
//!
//! Devices are found by capability rather than by name: anything
//! advertising a vertical wheel axis can deliver scroll events, and
//! anything advertising numpad 0 can host the toggle. Explicit paths
//! bypass discovery entirely.

use std::path::Path;

use evdev::{Device, Key, RelativeAxisType};
use tracing::info;

use crate::error::CliError;

fn open(path: &Path) -> Result<Device, CliError> {
    Device::open(path).map_err(|source| CliError::OpenDevice {
        path: path.to_path_buf(),
        source,
    })
}

fn has_scroll_wheel(device: &Device) -> bool {
    device
        .supported_relative_axes()
        .is_some_and(|axes| axes.contains(RelativeAxisType::REL_WHEEL))
}

fn has_keypad(device: &Device) -> bool {
    device
        .supported_keys()
        .is_some_and(|keys| keys.contains(Key::KEY_KP0))
}

/// Open the scroll source: the given path, or the first device with a
/// vertical wheel.
pub fn open_scroll_device(path: Option<&Path>) -> Result<Device, CliError> {
    if let Some(path) = path {
        return open(path);
    }

    for (path, device) in evdev::enumerate() {
        if has_scroll_wheel(&device) {
            info!(
                path = %path.display(),
                name = device.name().unwrap_or("(unnamed)"),
                "using scroll device"
            );
            return Ok(device);
        }
    }
    Err(CliError::NoScrollDevice)
}

/// Open the toggle source: the given path, or the first device with a
/// numeric keypad.
pub fn open_toggle_device(path: Option<&Path>) -> Result<Device, CliError> {
    if let Some(path) = path {
        return open(path);
    }

    for (path, device) in evdev::enumerate() {
        if has_keypad(&device) {
            info!(
                path = %path.display(),
                name = device.name().unwrap_or("(unnamed)"),
                "using toggle device"
            );
            return Ok(device);
        }
    }
    Err(CliError::NoToggleDevice)
}

/// Print every readable input device with its steering-relevant
/// capabilities.
///
/// # Errors
///
/// Never fails today; the signature matches the other startup paths so
/// `main` can return it directly.
pub fn print_devices() -> anyhow::Result<()> {
    let mut found = false;
    for (path, device) in evdev::enumerate() {
        found = true;
        let name = device.name().unwrap_or("(unnamed)").to_owned();
        let mut capabilities = Vec::new();
        if has_scroll_wheel(&device) {
            capabilities.push("scroll-wheel");
        }
        if has_keypad(&device) {
            capabilities.push("keypad");
        }
        println!(
            "{:<20} {name:<42} {}",
            path.display(),
            capabilities.join(", ")
        );
    }

    if !found {
        println!("no readable input devices (missing 'input' group membership?)");
    }
    Ok(())
}
