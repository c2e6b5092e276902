use std::fmt;
use std::path::{Path, PathBuf};

use datafaker_generate::{LocaleKey, OutputFormat};
use serde::{Deserialize, Serialize};

use super::atomic::write_bytes_atomic;
use super::{ConfigError, ConfigResult};

/// Keys accepted by `config get` and `config set`.
pub const SETTINGS_KEYS: [&str; 5] = ["locale", "seed", "out_dir", "format", "theme"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub out_dir: PathBuf,
    pub format: OutputFormat,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: LocaleKey::default().to_string(),
            seed: None,
            out_dir: PathBuf::from("out"),
            format: OutputFormat::default(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn get(&self, key: &str) -> ConfigResult<String> {
        let value = match key {
            "locale" => self.locale.clone(),
            "seed" => self
                .seed
                .map(|seed| seed.to_string())
                .unwrap_or_else(|| "none".to_string()),
            "out_dir" => self.out_dir.display().to_string(),
            "format" => self.format.to_string(),
            "theme" => self.theme().to_string(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        };
        Ok(value)
    }

    /// Parse and store one key; the settings are unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> ConfigResult<()> {
        let value = value.trim();
        match key {
            "locale" => {
                let locale = LocaleKey::parse(value)
                    .ok_or_else(|| invalid(key, "expected en_US or zh_CN"))?;
                self.locale = locale.to_string();
            }
            "seed" => {
                self.seed = if value.is_empty() || value == "none" {
                    None
                } else {
                    Some(
                        value
                            .parse()
                            .map_err(|_| invalid(key, "expected an unsigned integer or none"))?,
                    )
                };
            }
            "out_dir" => {
                if value.is_empty() {
                    return Err(invalid(key, "must not be empty"));
                }
                self.out_dir = PathBuf::from(value);
            }
            "format" => {
                self.format = value
                    .parse()
                    .map_err(|_| invalid(key, "expected csv, jsonl or sql"))?;
            }
            "theme" => {
                let theme =
                    Theme::parse(value).ok_or_else(|| invalid(key, "expected light or dark"))?;
                self.set_theme(theme);
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

pub fn load_or_create_settings(path: &Path) -> ConfigResult<Settings> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        return Ok(settings);
    }

    let settings = Settings::default();
    save_settings(path, &settings)?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> ConfigResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("datafaker_settings_{}", uuid::Uuid::new_v4()))
            .join("datafaker.toml")
    }

    #[test]
    fn creates_defaults_then_reloads_saved_values() {
        let path = temp_settings_path();
        let mut settings = load_or_create_settings(&path).expect("create");
        assert!(path.exists());
        assert_eq!(settings, Settings::default());

        settings.set("theme", "dark").expect("theme");
        settings.set("seed", "42").expect("seed");
        settings.set("format", "jsonl").expect("format");
        save_settings(&path, &settings).expect("save");

        let reloaded = load_or_create_settings(&path).expect("reload");
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_eq!(reloaded.get("seed").expect("seed"), "42");
        assert_eq!(reloaded.format, OutputFormat::Jsonl);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let settings: Settings = toml::from_str("theme = \"dark\"\n").expect("parse");
        assert_eq!(settings.theme(), Theme::Dark);
        assert_eq!(settings.locale, "en_US");
        assert_eq!(settings.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn invalid_values_leave_settings_untouched() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.set("theme", "sepia"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(settings.set("locale", "fr_FR").is_err());
        assert!(settings.set("seed", "-1").is_err());
        assert!(matches!(
            settings.set("colour", "x"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert_eq!(settings, Settings::default());
        settings.set("seed", "none").expect("clear seed");
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn every_key_can_be_read() {
        let settings = Settings::default();
        for key in SETTINGS_KEYS {
            settings.get(key).expect("known key");
        }
    }
}
