use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::logging;
use crate::session::Mode;
use crate::speech::Voice;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub start_mode: Mode,
    #[serde(default = "default_feedback_delay_ms")]
    pub feedback_delay_ms: u64,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_speech_enabled")]
    pub speech_enabled: bool,
    #[serde(default = "default_speech_program")]
    pub speech_program: String,
    #[serde(default = "default_speech_voice")]
    pub speech_voice: String,
    #[serde(default = "default_speech_rate")]
    pub speech_rate: f32,
}

fn default_theme() -> String {
    "chalkboard".to_string()
}
fn default_feedback_delay_ms() -> u64 {
    2000
}
fn default_tick_rate_ms() -> u64 {
    100
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_speech_enabled() -> bool {
    true
}
fn default_speech_program() -> String {
    "espeak-ng".to_string()
}
fn default_speech_voice() -> String {
    "en-us".to_string()
}
fn default_speech_rate() -> f32 {
    0.8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            start_mode: Mode::default(),
            feedback_delay_ms: default_feedback_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
            speech_enabled: default_speech_enabled(),
            speech_program: default_speech_program(),
            speech_voice: default_speech_voice(),
            speech_rate: default_speech_rate(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lettr")
    }

    /// Clamp numeric settings to usable ranges and reset unknown log levels.
    /// Returns a note per corrected setting, since this runs before the
    /// logger is installed.
    pub fn normalize(&mut self) -> Vec<String> {
        let mut notes = Vec::new();

        let delay = self.feedback_delay_ms.clamp(250, 10_000);
        if delay != self.feedback_delay_ms {
            notes.push(format!(
                "feedback_delay_ms {} out of range, using {delay}",
                self.feedback_delay_ms
            ));
            self.feedback_delay_ms = delay;
        }
        let tick = self.tick_rate_ms.clamp(16, 1000);
        if tick != self.tick_rate_ms {
            notes.push(format!("tick_rate_ms {} out of range, using {tick}", self.tick_rate_ms));
            self.tick_rate_ms = tick;
        }
        let rate = if self.speech_rate.is_finite() {
            self.speech_rate.clamp(0.25, 2.0)
        } else {
            default_speech_rate()
        };
        if rate != self.speech_rate {
            notes.push(format!("speech_rate {} out of range, using {rate}", self.speech_rate));
            self.speech_rate = rate;
        }
        if logging::parse_level(&self.log_level).is_none() {
            notes.push(format!("unknown log level '{}', using info", self.log_level));
            self.log_level = default_log_level();
        }
        notes
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn voice(&self) -> Voice {
        Voice {
            program: self.speech_program.clone(),
            language: self.speech_voice.clone(),
            rate: self.speech_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "chalkboard");
        assert_eq!(config.start_mode, Mode::Learn);
        assert_eq!(config.feedback_delay_ms, 2000);
        assert_eq!(config.feedback_delay(), Duration::from_secs(2));
        assert!(config.speech_enabled);
        assert_eq!(config.speech_voice, "en-us");
    }

    #[test]
    fn test_config_partial_file() {
        let toml_str = r#"
theme = "crayon"
start_mode = "game"
speech_enabled = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "crayon");
        assert_eq!(config.start_mode, Mode::Game);
        assert!(!config.speech_enabled);
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_normalize_clamps_ranges() {
        let mut config = Config {
            feedback_delay_ms: 5,
            tick_rate_ms: 60_000,
            speech_rate: f32::NAN,
            log_level: "chatty".to_string(),
            ..Config::default()
        };
        let notes = config.normalize();
        assert_eq!(config.feedback_delay_ms, 250);
        assert_eq!(config.tick_rate_ms, 1000);
        assert_eq!(config.speech_rate, 0.8);
        assert_eq!(config.log_level, "info");
        assert_eq!(notes.len(), 4);
    }

    #[test]
    fn test_normalize_reports_log_level_reset() {
        let mut config = Config {
            log_level: "chatty".to_string(),
            ..Config::default()
        };
        let notes = config.normalize();
        assert_eq!(notes, vec!["unknown log level 'chatty', using info".to_string()]);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_normalize_valid_config_is_silent() {
        let mut config = Config::default();
        assert!(config.normalize().is_empty());
        assert_eq!(config.feedback_delay_ms, 2000);
    }

    #[test]
    fn test_load_does_not_normalize() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"chatty\"\nfeedback_delay_ms = 1").unwrap();
        let mut loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.log_level, "chatty");
        assert_eq!(loaded.normalize().len(), 2);
        assert_eq!(loaded.feedback_delay_ms, 250);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lettr").join("config.toml");
        let config = Config {
            theme: "crayon".to_string(),
            start_mode: Mode::Game,
            feedback_delay_ms: 1500,
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme, "crayon");
        assert_eq!(loaded.start_mode, Mode::Game);
        assert_eq!(loaded.feedback_delay_ms, 1500);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.theme, "chalkboard");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "feedback_delay_ms = \"soon\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
