//! # Configuration Persistence
//!
//! User preferences stored in `~/.config/hanzi-cards/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. It holds startup defaults only; the card
//! deck itself is never persisted. Every field has a default, so a partial
//! file is fine and a missing one means "all defaults".
//!
//! ```json
//! {
//!   "theme": "Nord",
//!   "variant": "browser",
//!   "page_size": 8,
//!   "cell_width_px": 9
//! }
//! ```
//!
//! Command-line flags take precedence over anything in this file.

use crate::deck::Dataset;
use crate::paging::PageSizeMode;
use crate::ui::features::Variant;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Pixel width assumed for one terminal column.
pub const DEFAULT_CELL_WIDTH_PX: u16 = 8;

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Preset bundle of dataset, features and page size.
    #[serde(default)]
    pub variant: Variant,

    /// Overrides the variant's dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<Dataset>,

    /// Overrides the variant's page size: `"auto"` or a number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageSizeMode>,

    /// Pixel width of one terminal column, used for the width breakpoints
    /// and the swipe threshold.
    #[serde(default = "default_cell_width")]
    pub cell_width_px: u16,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_cell_width() -> u16 {
    DEFAULT_CELL_WIDTH_PX
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            variant: Variant::default(),
            dataset: None,
            page_size: None,
            cell_width_px: default_cell_width(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location when
    /// `None`. A missing file means defaults. A broken one is logged and
    /// replaced by defaults.
    ///
    /// The flag is `false` when the file exists but could not be loaded, so
    /// callers know not to overwrite it.
    pub fn load(path: Option<&Path>) -> (Self, bool) {
        let result = match path {
            Some(path) => Self::load_from(path),
            None => Self::try_load(),
        };
        match result {
            Ok(config) => (config, true),
            Err(e) => {
                tracing::warn!("Using default config: {:#}", e);
                (Self::default(), false)
            }
        }
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save the configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "hanzi-cards")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }

    /// Dataset after applying the override to the variant preset.
    pub fn effective_dataset(&self) -> Dataset {
        self.dataset.unwrap_or_else(|| self.variant.dataset())
    }

    /// Page size mode after applying the override to the variant preset.
    pub fn effective_page_size(&self) -> PageSizeMode {
        self.page_size.unwrap_or_else(|| self.variant.page_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "Catppuccin Mocha");
        assert_eq!(config.variant, Variant::Full);
        assert_eq!(config.cell_width_px, 8);
        assert_eq!(config.effective_dataset(), Dataset::Greetings);
        assert_eq!(config.effective_page_size(), PageSizeMode::Auto);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_deserialize_overrides() {
        let json = r#"{"variant": "glossary", "dataset": "basics", "page_size": "auto"}"#;
        let config: Config = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.variant, Variant::Glossary);
        assert_eq!(config.effective_dataset(), Dataset::Basics);
        // explicit "auto" wins over the glossary's fixed six
        assert_eq!(config.effective_page_size(), PageSizeMode::Auto);
    }

    #[test]
    fn test_variant_page_size_used_without_override() {
        let json = r#"{"variant": "glossary"}"#;
        let config: Config = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.effective_page_size(), PageSizeMode::Manual(6));
    }

    #[test]
    fn test_save_to_load_from_roundtrip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("subdir").join("config.json");

        let config = Config {
            theme: "Nord".to_string(),
            variant: Variant::Browser,
            dataset: None,
            page_size: Some(PageSizeMode::Manual(12)),
            cell_width_px: 10,
        };

        config.save_to(&config_path).expect("save_to");
        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("does_not_exist.json");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_from_invalid_json_errors() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").expect("write");

        let err = Config::load_from(&config_path).expect_err("should fail");
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_broken_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").expect("write");

        let (config, writable) = Config::load(Some(&config_path));
        assert_eq!(config, Config::default());
        assert!(!writable);
    }

    #[test]
    fn test_load_missing_or_valid_file_is_writable() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");

        let (config, writable) = Config::load(Some(&config_path));
        assert_eq!(config, Config::default());
        assert!(writable);

        fs::write(&config_path, r#"{"theme": "Nord"}"#).expect("write");
        let (config, writable) = Config::load(Some(&config_path));
        assert_eq!(config.theme, "Nord");
        assert!(writable);
    }

    #[test]
    fn test_odd_page_size_value_means_auto() {
        for value in ["8.5", "true", "[6]"] {
            let json = format!(r#"{{"variant": "glossary", "page_size": {}}}"#, value);
            let config: Config = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(config.effective_page_size(), PageSizeMode::Auto, "{}", value);
        }
    }

    #[test]
    fn test_deny_unknown_fields() {
        let json = r#"{"theme": "Nord", "unknown_field": true}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err(), "should reject unknown fields");
    }
}
