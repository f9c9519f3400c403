//! Error types for the scrollsteer binary.

use std::path::PathBuf;

use thiserror::Error;

/// Startup and configuration failures. All of these are fatal: the
/// process prints the message and exits instead of running half-wired.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no input device with a scroll wheel found; pass --scroll-device")]
    NoScrollDevice,

    #[error("no keyboard with a numeric keypad found; pass --keyboard-device")]
    NoToggleDevice,

    #[error("cannot open input device {path}: {source}")]
    OpenDevice {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown key name {0:?} (expected a single letter, e.g. \"a\")")]
    UnknownKey(String),
}
