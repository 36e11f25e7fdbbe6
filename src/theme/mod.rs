mod palette;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{app_config_path, config_env_dirs, ConfigPathError, APP_DIR};
use crate::tokens::try_parse_hex;

pub use palette::{ColorToken, Palette, Theme};

const THEME_CONFIG_FILE: &str = "theme.json";

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read theme config: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to write theme config: {path}")]
    WriteConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse theme config")]
    ParseConfig(#[from] serde_json::Error),
}

/// Per-mode color overrides, all optional. Values are hex strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destructive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
}

impl ColorOverrides {
    pub fn get(&self, token: ColorToken) -> Option<&str> {
        let value = match token {
            ColorToken::Primary => &self.primary,
            ColorToken::Secondary => &self.secondary,
            ColorToken::Success => &self.success,
            ColorToken::Warning => &self.warning,
            ColorToken::Destructive => &self.destructive,
            ColorToken::TextPrimary => &self.text_primary,
            ColorToken::TextSecondary => &self.text_secondary,
            ColorToken::BackgroundPrimary => &self.background_primary,
            ColorToken::BackgroundSecondary => &self.background_secondary,
            ColorToken::Border => &self.border,
        };
        value.as_deref()
    }
}

/// Color overrides with optional shared defaults + per-mode overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    #[serde(default)]
    pub common: ColorOverrides,
    #[serde(default)]
    pub dark: ColorOverrides,
    #[serde(default)]
    pub light: ColorOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ThemeColors>,
}

impl Theme {
    /// Builds the theme for the config's own mode.
    pub fn from_config(config: &ThemeConfig) -> Self {
        resolve_theme(config.mode, config.colors.as_ref())
    }

    /// Loads `theme.json` from the user config directory.
    pub fn load() -> ThemeResult<Self> {
        let config = load_theme_config()?;
        Ok(Self::from_config(&config))
    }
}

/// Resolve overrides for a given mode: shared block first, then the mode block.
pub fn resolve_theme(mode: ThemeMode, overrides: Option<&ThemeColors>) -> Theme {
    let mut theme = Theme::new();

    if let Some(colors) = overrides {
        apply_overrides(&mut theme, &colors.common);
        let mode_overrides = match mode {
            ThemeMode::Dark | ThemeMode::System => &colors.dark,
            ThemeMode::Light => &colors.light,
        };
        apply_overrides(&mut theme, mode_overrides);
    }

    tracing::debug!(mode = ?mode, overrides = theme.len(), "resolved theme");
    theme
}

fn apply_overrides(theme: &mut Theme, overrides: &ColorOverrides) {
    for token in ColorToken::ALL {
        let Some(value) = overrides.get(token) else {
            continue;
        };
        match try_parse_hex(value) {
            Ok(color) => theme.set_color(token, color),
            Err(err) => tracing::warn!(
                field = token.config_key(),
                value,
                %err,
                "invalid color override; keeping fallback"
            ),
        }
    }
}

pub fn load_theme_config() -> ThemeResult<ThemeConfig> {
    let (xdg_config_home, home) = config_env_dirs();
    load_theme_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_theme_config_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ThemeResult<ThemeConfig> {
    let path = theme_config_path_with(xdg_config_home, home)?;
    if !path.exists() {
        tracing::debug!(?path, "no theme config; using defaults");
        return Ok(ThemeConfig::default());
    }

    let serialized = fs::read_to_string(&path).map_err(|source| ThemeError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let config: ThemeConfig = serde_json::from_str(&serialized)?;
    tracing::info!(?path, mode = ?config.mode, "loaded theme config");
    Ok(config)
}

pub fn save_theme_preference(mode: ThemeMode) -> ThemeResult<()> {
    let (xdg_config_home, home) = config_env_dirs();
    save_theme_preference_with(mode, xdg_config_home.as_deref(), home.as_deref())
}

fn save_theme_preference_with(
    mode: ThemeMode,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ThemeResult<()> {
    // An unreadable or malformed file is left untouched so its overrides survive.
    let existing = load_theme_config_with(xdg_config_home, home)?;
    let path = theme_config_path_with(xdg_config_home, home)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ThemeError::WriteConfig {
            path: path.clone(),
            source,
        })?;
    }

    let config = ThemeConfig {
        mode,
        colors: existing.colors,
    };
    let serialized = serde_json::to_string_pretty(&config)?;
    fs::write(&path, serialized).map_err(|source| ThemeError::WriteConfig {
        path: path.clone(),
        source,
    })?;
    tracing::info!(?path, mode = ?mode, "saved theme preference");
    Ok(())
}

fn theme_config_path_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ThemeResult<PathBuf> {
    app_config_path(APP_DIR, THEME_CONFIG_FILE, xdg_config_home, home).map_err(|error| {
        match error {
            ConfigPathError::MissingHomeDirectory => ThemeError::MissingHomeDirectory,
        }
    })
}
