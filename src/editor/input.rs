//! Parsing of the numeric typography controls
//!
//! Raw control text that doesn't parse, or falls outside the accepted range,
//! yields `None` and the editor keeps its previous value.

use crate::core::settings::{FONT_SIZE_RANGE, FONT_WEIGHTS, LINE_HEIGHT_RANGE};

/// Parse the font size control (integer pixels)
pub fn parse_font_size(raw: &str) -> Option<u32> {
    let px = raw.trim().parse::<u32>().ok()?;
    FONT_SIZE_RANGE.contains(&px).then_some(px)
}

/// Parse the line height control (multiplier of the font size)
pub fn parse_line_height(raw: &str) -> Option<f32> {
    let multiplier = raw.trim().parse::<f32>().ok()?;
    (multiplier.is_finite() && LINE_HEIGHT_RANGE.contains(&multiplier)).then_some(multiplier)
}

/// Accept a font weight only if the weight selector offers it
pub fn parse_font_weight(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    FONT_WEIGHTS.iter().copied().find(|weight| *weight == raw)
}

/// Format a multiplier the way the line height control displays it
pub fn format_line_height(multiplier: f32) -> String {
    let rounded = (multiplier * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}
