//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the termcard application.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::CardDefinition;
use crate::error::{ConfigError, Result};
use crate::languages::LanguageColors;
use crate::layout::LayoutConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Default output path of the dark-mode document.
pub const DEFAULT_DARK_OUTPUT: &str = "dark.svg";

/// Default output path of the light-mode document.
pub const DEFAULT_LIGHT_OUTPUT: &str = "light.svg";

/// Where and how the rendered documents are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the dark-mode document.
    #[serde(default = "default_dark")]
    pub dark: PathBuf,

    /// Path of the light-mode document.
    #[serde(default = "default_light")]
    pub light: PathBuf,

    /// Whether to wrap the documents in macOS-style window chrome.
    #[serde(default)]
    pub macos_window: bool,
}

fn default_dark() -> PathBuf {
    PathBuf::from(DEFAULT_DARK_OUTPUT)
}

fn default_light() -> PathBuf {
    PathBuf::from(DEFAULT_LIGHT_OUTPUT)
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dark: default_dark(),
            light: default_light(),
            macos_window: false,
        }
    }
}

/// The main configuration struct for the termcard application.
///
/// # Examples
///
/// ```
/// use termcard_config::{Config, LayoutConfig};
///
/// // Create a default config
/// let config = Config::default();
/// assert!(config.username.is_none());
/// assert_eq!(config.layout, LayoutConfig::default());
///
/// // Create a custom config
/// let config = Config {
///     username: Some("octocat".to_string()),
///     layout: LayoutConfig::with_width(60),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// GitHub user to profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// GitHub token.
    ///
    /// If not set, the application falls back to `GITHUB_TOKEN` and then the
    /// `gh` CLI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,

    /// Years of contribution history to fetch. Defaults to the account age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,

    /// Column budgets of the card.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Lines shown in the card body.
    #[serde(default)]
    pub card: CardDefinition,

    /// Language colour overrides, merged over the built-in table.
    #[serde(default, skip_serializing_if = "is_builtin_colors")]
    pub language_colors: LanguageColors,

    /// Output documents.
    #[serde(default)]
    pub output: OutputConfig,
}

fn is_builtin_colors(colors: &LanguageColors) -> bool {
    *colors == LanguageColors::default()
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./termcard.json5` or `./termcard.json`
    /// 2. User: `~/.config/termcard/config.json5` or `~/.config/termcard/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use termcard_config::Config;
    ///
    /// # fn example() -> termcard_config::Result<()> {
    /// let config = Config::load_from("termcard.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config file");
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout budgets are inconsistent, a card item
    /// is malformed, or `years` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcard_config::{Config, LayoutConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.layout = LayoutConfig::with_width(8);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.card.validate()?;
        if self.years == Some(0) {
            return Err(ConfigError::InvalidYears);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardItem, StatKind};
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.username.is_none());
        assert!(config.github_token.is_none());
        assert_eq!(config.output.dark, PathBuf::from("dark.svg"));
        assert_eq!(config.output.light, PathBuf::from("light.svg"));
        assert!(!config.output.macos_window);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn validate_zero_years() {
        let config = Config {
            years: Some(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidYears)));
    }

    #[test]
    fn validate_invalid_layout() {
        let mut config = Config::default();
        config.layout.min_dots = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn builtin_colors_not_serialized() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(!json.contains("language_colors"));
        assert!(!json.contains("github_token"));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("termcard.json5");
        std::fs::write(
            &path,
            r##"
            {
                username: "octocat",
                years: 3,
                layout: { total_width: 60, overflow_line_width: 40 },
                card: [
                    "bio",
                    { key: "OS", value: "macOS" },
                    "gap",
                    { section: "Stats" },
                    "commits",
                ],
                language_colors: { Rust: "#ff0000" },
                output: { macos_window: true },
            }
            "##,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.username.as_deref(), Some("octocat"));
        assert_eq!(config.years, Some(3));
        assert_eq!(config.layout.total_width, 60);
        assert_eq!(config.layout.overflow_line_width, 40);
        assert_eq!(config.layout.min_dots, 8);
        assert_eq!(config.card.items().len(), 5);
        assert_eq!(config.card.items()[4], CardItem::Stat(StatKind::Commits));
        assert_eq!(config.language_colors.get("Rust"), Some("#ff0000"));
        assert_eq!(config.language_colors.get("Go"), Some("#00ADD8"));
        assert!(config.output.macos_window);
        assert_eq!(config.output.dark, PathBuf::from("dark.svg"));
    }

    #[test]
    fn load_from_file_rejects_invalid_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("termcard.json");
        std::fs::write(&path, r#"{"layout": {"total_width": 5}}"#).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLayout { .. }));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut original = Config {
            username: Some("octocat".to_string()),
            github_token: Some("ghp_xxx".to_string()),
            layout: LayoutConfig::with_width(70),
            ..Default::default()
        };
        original.language_colors.insert("Gleam", "#ffaff3");

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(original, loaded);
    }
}
