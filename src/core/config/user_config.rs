//! User configuration file handling
//!
//! Manages settings from ~/.config/typecase/settings.json. The file is only
//! read at startup; changes made while the editor runs are not written back.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::errors::{TypecaseContext, TypecaseResult};
use crate::core::settings::{
    APP_NAME, DEFAULT_FONT_SIZE, DEFAULT_FONT_WEIGHT, DEFAULT_LINE_HEIGHT,
};
use crate::editor::snippets::DEFAULT_LANGUAGE;

/// User configuration from ~/.config/typecase/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    /// Name of the font to start with (e.g., "JetBrains Mono")
    pub font: Option<String>,
    /// Font size in pixels
    pub font_size: Option<u32>,
    /// Line height as a multiple of the font size
    pub line_height: Option<f32>,
    /// CSS font weight, e.g. "400"
    pub font_weight: Option<String>,
    /// Language selected at startup
    pub language: Option<String>,
    /// Start with vim mode enabled
    pub vim_mode: Option<bool>,
    /// Key for the remote font listing service
    pub google_fonts_api_key: Option<String>,
}

impl ConfigFile {
    /// Get the path to the typecase config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join(APP_NAME)
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is not an error. Unreadable or malformed files are
    /// logged and ignored.
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> TypecaseResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_file_context("create", parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).with_file_context("write", path)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// The settings written by `--new-config`
    pub fn example() -> Self {
        Self {
            font: Some("Fira Code".to_string()),
            font_size: Some(DEFAULT_FONT_SIZE),
            line_height: Some(DEFAULT_LINE_HEIGHT),
            font_weight: Some(DEFAULT_FONT_WEIGHT.to_string()),
            language: Some(DEFAULT_LANGUAGE.to_string()),
            vim_mode: Some(false),
            google_fonts_api_key: None,
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/typecase directory
    /// 2. A settings.json file with default values
    /// 3. A logs/ directory for application logs
    pub fn initialize_config_directory() -> TypecaseResult<()> {
        Self::initialize_in(&Self::config_dir())
    }

    fn initialize_in(config_dir: &Path) -> TypecaseResult<()> {
        fs::create_dir_all(config_dir).with_file_context("create", config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir).with_file_context("create", &logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join("settings.json");
        if !settings_path.exists() {
            Self::example().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - Add a google_fonts_api_key to enable font search");
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }
}
