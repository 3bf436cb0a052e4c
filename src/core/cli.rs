//! Command line interface for the typecase editor playground
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs. Many CLI options are documented with
//! examples to help users understand the expected format.

use clap::Parser;
use tracing::{debug, warn};

use crate::core::config::ConfigFile;
use crate::core::settings::{
    API_KEY_ENV, DEFAULT_FONT_SIZE, DEFAULT_FONT_WEIGHT, DEFAULT_LINE_HEIGHT, FONT_SIZE_RANGE,
    FONT_WEIGHTS, LINE_HEIGHT_RANGE,
};
use crate::editor::input::parse_font_weight;
use crate::editor::snippets::DEFAULT_LANGUAGE;
use crate::editor::EditorConfig;
use crate::fonts::{curated_fonts, find_curated, Font};

/// typecase CLI arguments
///
/// Examples:
///   typecase                                  # Start with the defaults
///   typecase --font "JetBrains Mono"          # Start with a curated font
///   typecase --font-size 18 --line-height 1.6 # Bigger text, looser lines
///   typecase --language rust --vim            # Rust snippet with vim mode on
///   typecase --search mono                    # Print matching fonts and exit
///   typecase --new-config                     # Write ~/.config/typecase/settings.json
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "typecase",
    version,
    about = "A terminal playground for programming fonts and typography settings",
    long_about = "typecase shows sample code in several languages and lets you switch fonts, font size, line height and weight live. Fonts can be searched on the Google Fonts catalog, and a vim-style modal editing mode can be toggled on and off."
)]
pub struct CliArgs {
    /// Name of the font to start with
    ///
    /// Must be one of the curated fonts (e.g. "Fira Code", "JetBrains Mono").
    /// Unknown names fall back to the first curated font.
    #[clap(
        long = "font",
        short = 'f',
        help = "Font to start with",
        long_help = "Name of the curated font to start with, for example \"Fira Code\" or \"JetBrains Mono\". Unknown names fall back to Fira Code."
    )]
    pub font: Option<String>,

    /// Editor font size in pixels
    #[clap(long = "font-size", short = 's', help = "Font size in pixels (8-72)")]
    pub font_size: Option<u32>,

    /// Line height multiplier
    #[clap(
        long = "line-height",
        short = 'l',
        help = "Line height as a multiple of the font size (1.0-3.0)"
    )]
    pub line_height: Option<f32>,

    /// CSS font weight
    #[clap(
        long = "font-weight",
        short = 'w',
        help = "Font weight (300, 400, 500, 600 or 700)"
    )]
    pub font_weight: Option<String>,

    /// Language of the sample snippet
    ///
    /// Languages without a sample start with a placeholder buffer.
    #[clap(
        long = "language",
        short = 'L',
        help = "Language to start with",
        long_help = "Language to start with: javascript, typescript, python, html, css, json, rust, go, java or cpp. Other identifiers start with a placeholder buffer."
    )]
    pub language: Option<String>,

    /// Start with vim mode enabled
    #[clap(long = "vim", help = "Start with vim mode enabled")]
    pub vim: bool,

    /// API key for the Google Fonts developer API
    ///
    /// Without a key, font search shows no results.
    #[clap(
        long = "api-key",
        help = "Google Fonts API key",
        long_help = "Key for the Google Fonts developer API. Falls back to google_fonts_api_key in settings.json and then to the GOOGLE_FONTS_API_KEY environment variable. Without a key, font search shows no results."
    )]
    pub api_key: Option<String>,

    /// Search the font catalog, print the matches and exit
    #[clap(
        long = "search",
        help = "Print fonts matching a query and exit",
        long_help = "Run a single font search and print one line per match (name and CSS font-family value). An empty query prints the curated fonts."
    )]
    pub search: Option<String>,

    /// Log level filter
    #[clap(
        long = "log-level",
        default_value = "info",
        help = "Log level (error, warn, info, debug, trace)"
    )]
    pub log_level: String,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Initialize the ~/.config/typecase directory with a settings.json file and a logs directory."
    )]
    pub new_config: bool,

    /// Disable the Terminal User Interface
    ///
    /// Prints the resolved startup configuration as JSON instead.
    #[clap(
        long = "no-tui",
        help = "Print the resolved configuration instead of starting the TUI"
    )]
    pub no_tui: bool,
}

/// Everything the application needs to start, after merging CLI
/// arguments, the settings file and built-in defaults
#[derive(Debug, Clone, PartialEq)]
pub struct StartupOptions {
    pub font: Font,
    pub editor: EditorConfig,
    pub vim_mode: bool,
    pub api_key: Option<String>,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    pub fn validate(&self) -> Result<(), String> {
        if let Some(size) = self.font_size {
            if !FONT_SIZE_RANGE.contains(&size) {
                return Err(format!(
                    "Font size out of range: {size}\nFont size must be between {} and {} pixels.",
                    FONT_SIZE_RANGE.start(),
                    FONT_SIZE_RANGE.end()
                ));
            }
        }

        if let Some(multiplier) = self.line_height {
            if !LINE_HEIGHT_RANGE.contains(&multiplier) {
                return Err(format!(
                    "Line height out of range: {multiplier}\nLine height must be between {} and {}.",
                    LINE_HEIGHT_RANGE.start(),
                    LINE_HEIGHT_RANGE.end()
                ));
            }
        }

        if let Some(weight) = &self.font_weight {
            if parse_font_weight(weight).is_none() {
                return Err(format!(
                    "Unknown font weight: '{weight}'\nAvailable weights: {}",
                    FONT_WEIGHTS.join(", ")
                ));
            }
        }

        Ok(())
    }

    /// Whether this invocation runs without the terminal UI
    pub fn is_headless(&self) -> bool {
        self.no_tui || self.search.is_some()
    }

    /// Merge CLI arguments, the settings file and built-in defaults
    ///
    /// Priority order:
    /// 1. CLI argument
    /// 2. Config file setting (~/.config/typecase/settings.json)
    /// 3. Built-in default
    pub fn resolve(&self, config: Option<&ConfigFile>) -> StartupOptions {
        let font = self.startup_font(config);

        let font_size = self
            .font_size
            .or_else(|| {
                config
                    .and_then(|c| c.font_size)
                    .filter(|size| in_range_or_warn("font_size", FONT_SIZE_RANGE.contains(size)))
            })
            .unwrap_or(DEFAULT_FONT_SIZE);

        let line_height = self
            .line_height
            .or_else(|| {
                config.and_then(|c| c.line_height).filter(|multiplier| {
                    in_range_or_warn("line_height", LINE_HEIGHT_RANGE.contains(multiplier))
                })
            })
            .unwrap_or(DEFAULT_LINE_HEIGHT);

        let font_weight = self
            .font_weight
            .as_deref()
            .or_else(|| {
                config
                    .and_then(|c| c.font_weight.as_deref())
                    .filter(|weight| {
                        in_range_or_warn("font_weight", parse_font_weight(weight).is_some())
                    })
            })
            .unwrap_or(DEFAULT_FONT_WEIGHT);

        let language = self
            .language
            .as_deref()
            .or_else(|| config.and_then(|c| c.language.as_deref()))
            .unwrap_or(DEFAULT_LANGUAGE);

        let vim_mode = self.vim || config.and_then(|c| c.vim_mode).unwrap_or(false);

        StartupOptions {
            editor: EditorConfig::new(
                font.value.clone(),
                font_size,
                line_height,
                font_weight,
                language,
            ),
            font,
            vim_mode,
            api_key: self.api_key(config),
        }
    }

    /// Get the startup font from CLI args, config file, or default
    fn startup_font(&self, config: Option<&ConfigFile>) -> Font {
        let requested = self
            .font
            .as_deref()
            .or_else(|| config.and_then(|c| c.font.as_deref()));

        if let Some(name) = requested {
            if let Some(font) = find_curated(name) {
                debug!("Using startup font: {}", font.name);
                return font;
            }
            warn!("Unknown font '{}', using the default font", name);
        }

        curated_fonts()
            .into_iter()
            .next()
            .unwrap_or_else(Font::system_monospace)
    }

    /// API key from the CLI, the config file, or the environment
    fn api_key(&self, config: Option<&ConfigFile>) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| config.and_then(|c| c.google_fonts_api_key.clone()))
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

fn in_range_or_warn(setting: &str, valid: bool) -> bool {
    if !valid {
        warn!("Ignoring out-of-range {} in settings.json", setting);
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let mut argv = vec!["typecase"];
        argv.extend_from_slice(args);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let startup = parse(&["--api-key", "k"]).resolve(None);
        assert_eq!(startup.font.name, "Fira Code");
        assert_eq!(startup.editor.font_family, "'Fira Code', monospace");
        assert_eq!(startup.editor.font_size_px, 16);
        assert_eq!(startup.editor.line_height_px, 24);
        assert_eq!(startup.editor.font_weight, "400");
        assert_eq!(startup.editor.active_language, "javascript");
        assert!(!startup.vim_mode);
        assert_eq!(startup.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let config = ConfigFile {
            font: Some("Inconsolata".to_string()),
            font_size: Some(14),
            language: Some("python".to_string()),
            vim_mode: Some(true),
            ..Default::default()
        };
        let startup = parse(&["--font", "ubuntu mono", "--font-size", "20"]).resolve(Some(&config));

        assert_eq!(startup.font.name, "Ubuntu Mono");
        assert_eq!(startup.editor.font_size_px, 20);
        assert_eq!(startup.editor.line_height_px, 30);
        assert_eq!(startup.editor.active_language, "python");
        assert!(startup.vim_mode);
    }

    #[test]
    fn test_out_of_range_config_values_fall_back() {
        let config = ConfigFile {
            font_size: Some(500),
            line_height: Some(9.0),
            font_weight: Some("heavy".to_string()),
            ..Default::default()
        };
        let startup = parse(&[]).resolve(Some(&config));
        assert_eq!(startup.editor.font_size_px, DEFAULT_FONT_SIZE);
        assert_eq!(startup.editor.line_height_multiplier, DEFAULT_LINE_HEIGHT);
        assert_eq!(startup.editor.font_weight, DEFAULT_FONT_WEIGHT);
    }

    #[test]
    fn test_unknown_font_falls_back_to_first_curated() {
        let startup = parse(&["--font", "Comic Sans"]).resolve(None);
        assert_eq!(startup.font.name, "Fira Code");
    }

    #[test]
    fn test_validate() {
        assert!(parse(&[]).validate().is_ok());
        assert!(parse(&["--font-size", "4"]).validate().is_err());
        assert!(parse(&["--line-height", "5"]).validate().is_err());
        assert!(parse(&["--font-weight", "bold"]).validate().is_err());
        assert!(parse(&["--font-weight", "600", "--font-size", "72"]).validate().is_ok());
    }

    #[test]
    fn test_headless() {
        assert!(!parse(&[]).is_headless());
        assert!(parse(&["--no-tui"]).is_headless());
        assert!(parse(&["--search", "mono"]).is_headless());
    }
}
