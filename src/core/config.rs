//! Game configuration.
//!
//! Loaded from TOML (all keys optional) or built in code with the `with_*`
//! methods:
//!
//! ```toml
//! first_turn = "right"
//! seed = 42
//!
//! [ai]
//! enabled = true
//! side = "left"
//! delay_ms = 1000
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::side::Side;
use crate::error::ConfigError;

/// Longest AI decision delay accepted from a config file.
pub const MAX_AI_DELAY_MS: u64 = 60_000;

/// Top-level configuration for a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side that moves first in every new game.
    pub first_turn: Side,

    /// Seed for the AI's random choices.
    pub seed: u64,

    /// Computer opponent settings.
    pub ai: AiConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_turn: Side::Right,
            seed: 42,
            ai: AiConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.delay_ms > MAX_AI_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "ai.delay_ms must be <= {MAX_AI_DELAY_MS}, got {}",
                self.ai.delay_ms
            )));
        }
        Ok(())
    }

    /// Set the side that moves first.
    #[must_use]
    pub fn with_first_turn(mut self, side: Side) -> Self {
        self.first_turn = side;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the AI opponent.
    #[must_use]
    pub fn with_ai_enabled(mut self, enabled: bool) -> Self {
        self.ai.enabled = enabled;
        self
    }

    /// Set the AI decision delay, clamped to `MAX_AI_DELAY_MS`.
    #[must_use]
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.ai.delay_ms = millis.min(MAX_AI_DELAY_MS);
        self
    }
}

/// Computer opponent settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Whether the AI controls `side`.
    pub enabled: bool,

    /// Side played by the AI.
    pub side: Side,

    /// Delay before the AI commits to a move, in milliseconds.
    pub delay_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            side: Side::Left,
            delay_ms: 1000,
        }
    }
}

impl AiConfig {
    /// The decision delay as a `Duration`.
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.first_turn, Side::Right);
        assert!(!config.ai.enabled);
        assert_eq!(config.ai.side, Side::Left);
        assert_eq!(config.ai.delay(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_first_turn(Side::Left)
            .with_seed(7)
            .with_ai_enabled(true)
            .with_ai_delay(Duration::from_millis(250));

        assert_eq!(config.first_turn, Side::Left);
        assert_eq!(config.seed, 7);
        assert!(config.ai.enabled);
        assert_eq!(config.ai.delay_ms, 250);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: GameConfig = toml::from_str(
            r#"
            first_turn = "left"

            [ai]
            enabled = true
            "#,
        )
        .unwrap();

        assert_eq!(config.first_turn, Side::Left);
        assert_eq!(config.seed, 42);
        assert!(config.ai.enabled);
        assert_eq!(config.ai.delay_ms, 1000);
    }

    #[test]
    fn test_validate_rejects_long_delay() {
        let mut config = GameConfig::default();
        config.ai.delay_ms = 120_000;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_with_ai_delay_clamps() {
        let config = GameConfig::default().with_ai_delay(Duration::from_secs(120));
        assert_eq!(config.ai.delay_ms, MAX_AI_DELAY_MS);
        assert!(config.validate().is_ok());

        let config = GameConfig::default().with_ai_delay(Duration::MAX);
        assert_eq!(config.ai.delay_ms, MAX_AI_DELAY_MS);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 99\n[ai]\ndelay_ms = 10").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.ai.delay_ms, 10);
    }

    #[test]
    fn test_load_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = \"not a number\"").unwrap();

        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
