//! Built-in defaults and control ranges
//!
//! These values are used when neither the CLI nor the user settings file
//! provide an override.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Application name, used for config paths and log file names
pub const APP_NAME: &str = "typecase";

/// Default editor font size in pixels
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Default line height as a multiple of the font size
pub const DEFAULT_LINE_HEIGHT: f32 = 1.5;

/// Default CSS font weight
pub const DEFAULT_FONT_WEIGHT: &str = "400";

/// Accepted font sizes (px) for the font size control
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 8..=72;

/// Accepted line height multipliers for the line height control
pub const LINE_HEIGHT_RANGE: RangeInclusive<f32> = 1.0..=3.0;

/// Step used when nudging the line height control up or down
pub const LINE_HEIGHT_STEP: f32 = 0.1;

/// Font weights offered by the weight selector
pub const FONT_WEIGHTS: &[&str] = &["300", "400", "500", "600", "700"];

/// Quiet period before a typed font query hits the remote service
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Maximum number of remote results shown for one query
pub const SEARCH_RESULT_LIMIT: usize = 20;

/// Request timeout for the remote font listing
pub const SEARCH_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable consulted for the font service API key
pub const API_KEY_ENV: &str = "GOOGLE_FONTS_API_KEY";
