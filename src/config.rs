use std::path::Path;

use tracing::warn;

use crate::ai::{Difficulty, HARD_PLIES};
use crate::error::ConfigError;
use crate::game::{COLS, ROWS};

/// Who sits at the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsHuman,
    HumanVsBot,
}

impl GameMode {
    pub fn name(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsBot => "Human vs Bot",
        }
    }
}

/// Game setup.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// The bot plays Red and moves first.
    pub bot_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::HumanVsBot,
            difficulty: Difficulty::Hard,
            bot_first: false,
        }
    }
}

/// Bot tuning.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Plies searched by the hard bot, its own move included.
    pub search_plies: u32,
    /// Seed for the bots' random choices. Unset means a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            search_plies: HARD_PLIES,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub bot: BotConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
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
        if self.bot.search_plies == 0 {
            return Err(ConfigError::Validation(
                "bot.search_plies must be >= 1".into(),
            ));
        }
        if self.bot.search_plies as usize > ROWS * COLS {
            return Err(ConfigError::Validation(format!(
                "bot.search_plies must be <= {}",
                ROWS * COLS
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.mode, GameMode::HumanVsBot);
        assert_eq!(config.game.difficulty, Difficulty::Hard);
        assert_eq!(config.bot.search_plies, 7);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
difficulty = "medium"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.difficulty, Difficulty::Medium);
        // Other fields should be defaults
        assert_eq!(config.game.mode, GameMode::HumanVsBot);
        assert!(!config.game.bot_first);
        assert_eq!(config.bot.search_plies, HARD_PLIES);
        assert_eq!(config.bot.seed, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.game.mode, default.game.mode);
        assert_eq!(config.bot.search_plies, default.bot.search_plies);
    }

    #[test]
    fn test_mode_names_are_kebab_case() {
        let config: AppConfig = toml::from_str(
            r#"
[game]
mode = "human-vs-human"
"#,
        )
        .unwrap();
        assert_eq!(config.game.mode, GameMode::HumanVsHuman);
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
[game]
difficulty = "impossible"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_plies() {
        let mut config = AppConfig::default();
        config.bot.search_plies = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_plies_beyond_board() {
        let mut config = AppConfig::default();
        config.bot.search_plies = 43;
        assert!(config.validate().is_err());
        config.bot.search_plies = 42;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.bot.search_plies, HARD_PLIES);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[bot]
search_plies = 5
seed = 42
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.bot.search_plies, 5);
        assert_eq!(config.bot.seed, Some(42));
        // Others are defaults
        assert_eq!(config.game.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[bot]\nsearch_plies = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
