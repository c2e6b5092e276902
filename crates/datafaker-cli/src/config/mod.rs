mod atomic;
mod settings;

pub use settings::{SETTINGS_KEYS, Settings, load_or_create_settings, save_settings};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Default settings file, resolved against the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "datafaker.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("unknown settings key '{0}'")]
    UnknownKey(String),
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

pub fn settings_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}
