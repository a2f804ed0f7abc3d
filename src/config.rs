//! Game configuration
//!
//! Everything has a built-in default; a TOML file may override any field.
//!
//! ```toml
//! start_date = "2025-01-01"
//! words = ["PYTHON", "LIMACE", "PIMENT"]
//! lock_first_letter = true
//! reveal_stagger_ms = 300
//! ```

use crate::errors::ConfigError;
use crate::game::Rules;
use crate::wordlists::{WordList, loader};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Day 0 of the built-in word list
pub const DEFAULT_START_DATE: NaiveDate = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");

/// Looked up in the working directory when no file is given
pub const DEFAULT_CONFIG_FILE: &str = "sutom.toml";

const DEFAULT_STAGGER_MS: u64 = 300;
const DEFAULT_FOOTER: &str = "Play SUTOM perso every day, one new word at midnight!";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Local date of puzzle #1
    pub start_date: NaiveDate,
    /// Inline word list, takes precedence over `word_file`
    pub words: Option<Vec<String>>,
    /// One word per line, `#` comments allowed
    pub word_file: Option<PathBuf>,
    pub lock_first_letter: bool,
    pub reveal_stagger_ms: u64,
    /// Last line of the share text
    pub share_footer: String,
    /// Where saved games and the TUI log go
    pub data_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_date: DEFAULT_START_DATE,
            words: None,
            word_file: None,
            lock_first_letter: true,
            reveal_stagger_ms: DEFAULT_STAGGER_MS,
            share_footer: DEFAULT_FOOTER.to_owned(),
            data_dir: PathBuf::from(".sutom"),
        }
    }
}

impl GameConfig {
    /// Read `path`, or [`DEFAULT_CONFIG_FILE`] if present, or use defaults
    ///
    /// # Errors
    /// The file cannot be read or is not valid configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadConfig {
            path: path.to_owned(),
            source,
        })?;

        let config = toml::from_str(&text).map_err(|source| ConfigError::ParseConfig {
            path: path.to_owned(),
            source,
        })?;

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The configured word list
    ///
    /// # Errors
    /// The word file cannot be read or no valid word remains.
    pub fn word_list(&self) -> Result<WordList, ConfigError> {
        if let Some(words) = &self.words {
            return WordList::new(loader::words_from_slice(words));
        }

        if let Some(path) = &self.word_file {
            let words = loader::load_from_file(path).map_err(|source| ConfigError::ReadWordFile {
                path: path.clone(),
                source,
            })?;
            return WordList::new(words);
        }

        WordList::embedded()
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        Rules {
            lock_first_letter: self.lock_first_letter,
        }
    }

    #[must_use]
    pub const fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.start_date.to_string(), "2025-01-01");
        assert!(config.rules().lock_first_letter);
        assert_eq!(config.reveal_stagger(), Duration::from_millis(300));
    }

    #[test]
    fn fields_override_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            start_date = "2024-06-01"
            words = ["tigres", "orange"]
            lock_first_letter = false
            reveal_stagger_ms = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(!config.rules().lock_first_letter);
        assert_eq!(config.reveal_stagger(), Duration::from_millis(50));

        let words = config.word_list().unwrap();
        assert_eq!(words.words()[0].text(), "TIGRES");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<GameConfig>("start_dat = \"2024-06-01\"").is_err());
    }

    #[test]
    fn empty_word_list_is_fatal() {
        let config = GameConfig {
            words: Some(vec!["".to_owned(), "ÉTÉ".to_owned()]),
            ..GameConfig::default()
        };
        assert!(matches!(config.word_list(), Err(ConfigError::EmptyWordList)));
    }

    #[test]
    fn missing_word_file_is_reported() {
        let config = GameConfig {
            word_file: Some(PathBuf::from("/definitely/not/here.txt")),
            ..GameConfig::default()
        };
        assert!(matches!(config.word_list(), Err(ConfigError::ReadWordFile { .. })));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = GameConfig::load(Some(Path::new("/definitely/not/sutom.toml")));
        assert!(matches!(result, Err(ConfigError::ReadConfig { .. })));
    }

    #[test]
    fn default_list_is_embedded() {
        let words = GameConfig::default().word_list().unwrap();
        assert_eq!(words.words()[0].text(), "PYTHON");
    }
}
