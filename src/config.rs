// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::ocr::OcrConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use strum::EnumIter;

fn default_language() -> String {
    "heb".to_string()
}
fn default_page_seg_mode() -> String {
    "6".to_string()
}
fn default_scale_factor() -> f32 {
    1.5
}
fn default_day_start() -> u32 {
    8
}
fn default_day_end() -> u32 {
    22
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum AppTheme {
    #[default]
    Dark,
    Light,
    Dracula,
    Nord,
    GruvboxDark,
    CatppuccinMocha,
    TokyoNight,
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppTheme::Dark => write!(f, "Dark"),
            AppTheme::Light => write!(f, "Light"),
            AppTheme::Dracula => write!(f, "Dracula"),
            AppTheme::Nord => write!(f, "Nord"),
            AppTheme::GruvboxDark => write!(f, "Gruvbox Dark"),
            AppTheme::CatppuccinMocha => write!(f, "Catppuccin Mocha"),
            AppTheme::TokyoNight => write!(f, "Tokyo Night"),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_language")]
    pub ocr_language: String,
    #[serde(default = "default_page_seg_mode")]
    pub ocr_page_seg_mode: String,
    #[serde(default = "default_scale_factor")]
    pub ocr_scale_factor: f32,
    #[serde(default)]
    pub tessdata_path: Option<String>,
    /// First hour shown on the grid.
    #[serde(default = "default_day_start")]
    pub day_start_hour: u32,
    /// Last hour shown on the grid.
    #[serde(default = "default_day_end")]
    pub day_end_hour: u32,
    #[serde(default)]
    pub theme: AppTheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            ocr_language: default_language(),
            ocr_page_seg_mode: default_page_seg_mode(),
            ocr_scale_factor: default_scale_factor(),
            tessdata_path: None,
            day_start_hour: default_day_start(),
            day_end_hour: default_day_end(),
            theme: AppTheme::default(),
        }
    }
}

impl Config {
    fn config_file_path() -> Result<PathBuf> {
        let proj = ProjectDirs::from("org", "luach", "luach")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        let dir = proj.config_dir();
        if !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {:?}", dir))?;
        }
        Ok(dir.join("config.toml"))
    }

    /// Loads the configuration from disk, falling back to defaults when the
    /// file does not exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;
        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
        Ok(())
    }

    /// OCR engine configuration derived from the user settings.
    pub fn ocr_config(&self) -> OcrConfig {
        OcrConfig {
            language: self.ocr_language.clone(),
            page_seg_mode: self.ocr_page_seg_mode.clone(),
            scale_factor: self.ocr_scale_factor,
            tessdata_path: self.tessdata_path.clone(),
        }
    }
}
