//! Run configuration: optional TOML file merged with CLI flag overrides.
//!
//! Everything in the file is optional; flags win over file values, and
//! anything left unset falls back to the reference behavior (duty-cycle
//! policy, 'a'/'d' keys, auto-discovered devices).

use std::fs;
use std::path::{Path, PathBuf};

use evdev::Key;
use serde::Deserialize;

use scrollsteer_steering::SteeringPolicy;

use crate::error::CliError;

/// Name of the uinput device as it appears in `evtest` and friends.
const DEFAULT_DEVICE_NAME: &str = "scrollsteer virtual keyboard";

/// On-disk configuration shape. Policy names follow the CLI values
/// (`duty-cycle`, `tap-rate`).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    policy: Option<SteeringPolicy>,
    scroll_device: Option<PathBuf>,
    keyboard_device: Option<PathBuf>,
    left_key: Option<String>,
    right_key: Option<String>,
    device_name: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, CliError> {
        let raw = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| CliError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values the CLI flags force regardless of the file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub policy: Option<SteeringPolicy>,
    pub scroll_device: Option<PathBuf>,
    pub keyboard_device: Option<PathBuf>,
}

/// Fully resolved configuration the rest of the binary runs on.
#[derive(Debug)]
pub struct RunConfig {
    pub policy: SteeringPolicy,
    pub scroll_device: Option<PathBuf>,
    pub keyboard_device: Option<PathBuf>,
    pub left_key: Key,
    pub right_key: Key,
    pub device_name: String,
}

impl RunConfig {
    /// Merge the optional config file with CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] when the file cannot be read or parsed, or
    /// when a configured key name is not a single letter.
    pub fn resolve(file: Option<&Path>, overrides: Overrides) -> Result<Self, CliError> {
        let file = match file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self {
            policy: overrides.policy.or(file.policy).unwrap_or_default(),
            scroll_device: overrides.scroll_device.or(file.scroll_device),
            keyboard_device: overrides.keyboard_device.or(file.keyboard_device),
            left_key: match file.left_key {
                Some(name) => key_from_name(&name)?,
                None => Key::KEY_A,
            },
            right_key: match file.right_key {
                Some(name) => key_from_name(&name)?,
                None => Key::KEY_D,
            },
            device_name: file.device_name.unwrap_or_else(|| DEFAULT_DEVICE_NAME.into()),
        })
    }
}

/// Map a single-letter key name to its evdev key.
fn key_from_name(name: &str) -> Result<Key, CliError> {
    const LETTERS: [Key; 26] = [
        Key::KEY_A,
        Key::KEY_B,
        Key::KEY_C,
        Key::KEY_D,
        Key::KEY_E,
        Key::KEY_F,
        Key::KEY_G,
        Key::KEY_H,
        Key::KEY_I,
        Key::KEY_J,
        Key::KEY_K,
        Key::KEY_L,
        Key::KEY_M,
        Key::KEY_N,
        Key::KEY_O,
        Key::KEY_P,
        Key::KEY_Q,
        Key::KEY_R,
        Key::KEY_S,
        Key::KEY_T,
        Key::KEY_U,
        Key::KEY_V,
        Key::KEY_W,
        Key::KEY_X,
        Key::KEY_Y,
        Key::KEY_Z,
    ];

    let mut chars = name.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Err(CliError::UnknownKey(name.into()));
    };

    letter
        .to_ascii_lowercase()
        .try_into()
        .ok()
        .and_then(|c: u8| c.checked_sub(b'a'))
        .and_then(|index| LETTERS.get(usize::from(index)).copied())
        .ok_or_else(|| CliError::UnknownKey(name.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let config = RunConfig::resolve(None, Overrides::default()).unwrap();
        assert_eq!(config.policy, SteeringPolicy::DutyCycle);
        assert_eq!(config.left_key, Key::KEY_A);
        assert_eq!(config.right_key, Key::KEY_D);
        assert_eq!(config.scroll_device, None);
        assert_eq!(config.device_name, DEFAULT_DEVICE_NAME);
    }

    #[test]
    fn file_values_are_picked_up() {
        let file = write_config(
            r#"
            policy = "tap-rate"
            scroll_device = "/dev/input/event5"
            left_key = "q"
            right_key = "e"
            device_name = "test keyboard"
            "#,
        );

        let config = RunConfig::resolve(Some(file.path()), Overrides::default()).unwrap();
        assert_eq!(config.policy, SteeringPolicy::TapRate);
        assert_eq!(
            config.scroll_device.as_deref(),
            Some(Path::new("/dev/input/event5"))
        );
        assert_eq!(config.left_key, Key::KEY_Q);
        assert_eq!(config.right_key, Key::KEY_E);
        assert_eq!(config.device_name, "test keyboard");
    }

    #[test]
    fn flags_win_over_the_file() {
        let file = write_config(r#"policy = "tap-rate""#);

        let config = RunConfig::resolve(
            Some(file.path()),
            Overrides {
                policy: Some(SteeringPolicy::DutyCycle),
                scroll_device: Some(PathBuf::from("/dev/input/event9")),
                keyboard_device: None,
            },
        )
        .unwrap();

        assert_eq!(config.policy, SteeringPolicy::DutyCycle);
        assert_eq!(
            config.scroll_device.as_deref(),
            Some(Path::new("/dev/input/event9"))
        );
    }

    #[test]
    fn unknown_key_names_are_rejected() {
        let file = write_config(r#"left_key = "shift""#);
        let err = RunConfig::resolve(Some(file.path()), Overrides::default());
        assert!(matches!(err, Err(CliError::UnknownKey(name)) if name == "shift"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let file = write_config(r#"frequency = 10"#);
        assert!(matches!(
            RunConfig::resolve(Some(file.path()), Overrides::default()),
            Err(CliError::ParseConfig { .. })
        ));
    }

    #[test]
    fn key_names_accept_upper_case() {
        assert_eq!(key_from_name("W").unwrap(), Key::KEY_W);
        assert!(key_from_name("").is_err());
        assert!(key_from_name("ab").is_err());
    }
}
