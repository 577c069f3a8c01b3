// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Only preferences live here (language, theme, transition delay). Playback
//! state such as the current slide index is deliberately never persisted.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "DotShow";

/// Crossfade duration between two diagrams, in milliseconds.
pub const TRANSITION_DURATION_MS: u64 = 750;

/// Pause inserted before each crossfade starts, in milliseconds.
pub const DEFAULT_TRANSITION_DELAY_MS: u64 = 0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub transition_delay_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
            transition_delay_ms: Some(DEFAULT_TRANSITION_DELAY_MS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
