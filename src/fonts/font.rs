//! Font entries shown in the font picker

use serde::{Deserialize, Serialize};

/// CSS generic family keywords accepted as the last entry of a stack
const GENERIC_FAMILIES: &[&str] = &["serif", "sans-serif", "monospace", "cursive", "fantasy"];

/// A font the editor can switch to
///
/// Fonts are immutable once created. `name` is the display key,
/// `value` the CSS font-family stack handed to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub name: String,
    pub value: String,
    pub category: Option<String>,
}

impl Font {
    /// A curated font: `'<name>', monospace`
    pub fn curated(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: format!("'{name}', monospace"),
            category: Some("monospace".to_string()),
        }
    }

    /// The platform monospace font, always available
    pub fn system_monospace() -> Self {
        Self {
            name: "System Monospace".to_string(),
            value: "monospace".to_string(),
            category: Some("monospace".to_string()),
        }
    }

    /// A font built from a remote listing record
    ///
    /// The stack ends in the record's category when that is a CSS generic
    /// family, and in `monospace` otherwise.
    pub fn from_remote(family: &str, category: Option<&str>) -> Self {
        let generic = category
            .filter(|category| GENERIC_FAMILIES.contains(category))
            .unwrap_or("monospace");
        Self {
            name: family.to_string(),
            value: format!("'{family}', {generic}"),
            category: category.map(str::to_string),
        }
    }
}

/// The fixed, always-available default font list
pub fn curated_fonts() -> Vec<Font> {
    let mut fonts: Vec<Font> = [
        "Fira Code",
        "JetBrains Mono",
        "Roboto Mono",
        "Source Code Pro",
        "Inconsolata",
        "IBM Plex Mono",
        "Ubuntu Mono",
    ]
    .into_iter()
    .map(Font::curated)
    .collect();

    fonts.push(Font::system_monospace());
    fonts
}

/// Find a curated font by display name, ignoring case
pub fn find_curated(name: &str) -> Option<Font> {
    curated_fonts()
        .into_iter()
        .find(|font| font.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_list() {
        let fonts = curated_fonts();
        assert_eq!(fonts.len(), 8);
        assert_eq!(fonts[0].name, "Fira Code");
        assert_eq!(fonts[0].value, "'Fira Code', monospace");
        assert_eq!(fonts[7].value, "monospace");
    }

    #[test]
    fn test_remote_value_uses_generic_category() {
        let font = Font::from_remote("Lora", Some("serif"));
        assert_eq!(font.value, "'Lora', serif");
        assert_eq!(font.category.as_deref(), Some("serif"));

        let font = Font::from_remote("Space Mono", None);
        assert_eq!(font.value, "'Space Mono', monospace");
    }

    #[test]
    fn test_remote_value_falls_back_for_non_generic_category() {
        let font = Font::from_remote("Lobster", Some("display"));
        assert_eq!(font.value, "'Lobster', monospace");
        assert_eq!(font.category.as_deref(), Some("display"));
    }

    #[test]
    fn test_find_curated() {
        assert_eq!(find_curated("jetbrains mono").unwrap().name, "JetBrains Mono");
        assert!(find_curated("Comic Sans").is_none());
    }
}
