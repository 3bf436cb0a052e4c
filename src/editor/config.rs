//! Editor configuration and the facade that owns the editor instance
//!
//! Every setter writes the new value into [`EditorConfig`] and forwards it to
//! the host right away. There is no batching: the last write to a field wins.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::settings::{
    DEFAULT_FONT_SIZE, DEFAULT_FONT_WEIGHT, DEFAULT_LINE_HEIGHT,
};
use crate::editor::host::{EditorHost, EditorOptionsPatch};
use crate::editor::snippets;
use crate::fonts::curated_fonts;

/// Visual and language configuration of the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// CSS font-family stack
    pub font_family: String,
    pub font_size_px: u32,
    /// Line height as a multiple of the font size
    pub line_height_multiplier: f32,
    /// Always `round(font_size_px * line_height_multiplier)`
    pub line_height_px: u32,
    pub font_weight: String,
    pub active_language: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let font_family = curated_fonts()
            .first()
            .map(|font| font.value.clone())
            .unwrap_or_else(|| "monospace".to_string());
        Self::new(
            font_family,
            DEFAULT_FONT_SIZE,
            DEFAULT_LINE_HEIGHT,
            DEFAULT_FONT_WEIGHT,
            snippets::DEFAULT_LANGUAGE,
        )
    }
}

impl EditorConfig {
    pub fn new(
        font_family: impl Into<String>,
        font_size_px: u32,
        line_height_multiplier: f32,
        font_weight: impl Into<String>,
        active_language: impl Into<String>,
    ) -> Self {
        Self {
            font_family: font_family.into(),
            font_size_px,
            line_height_multiplier,
            line_height_px: line_height_px(font_size_px, line_height_multiplier),
            font_weight: font_weight.into(),
            active_language: active_language.into(),
        }
    }

    /// The option set pushed to a freshly created editor
    pub fn full_patch(&self) -> EditorOptionsPatch {
        EditorOptionsPatch {
            font_family: Some(self.font_family.clone()),
            font_size: Some(self.font_size_px),
            line_height: Some(self.line_height_px),
            font_weight: Some(self.font_weight.clone()),
        }
    }
}

/// Line height in pixels for a font size and multiplier
pub fn line_height_px(font_size_px: u32, multiplier: f32) -> u32 {
    (font_size_px as f32 * multiplier).round() as u32
}

/// Owns the editor instance and its [`EditorConfig`]
pub struct EditorFacade<E: EditorHost> {
    host: E,
    config: EditorConfig,
}

impl<E: EditorHost> EditorFacade<E> {
    /// Take ownership of an editor and push the full configuration into it,
    /// including the snippet for the configured language.
    pub fn create(mut host: E, config: EditorConfig) -> Self {
        host.update_options(&config.full_patch());
        host.set_language(&config.active_language);
        host.set_value(snippets::snippet_or_placeholder(&config.active_language));
        debug!(
            "Editor created with {} ({})",
            config.font_family, config.active_language
        );
        Self { host, config }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn host(&self) -> &E {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut E {
        &mut self.host
    }

    pub fn set_font_family(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.config.font_family = value.clone();
        self.apply(EditorOptionsPatch::font_family(value));
    }

    /// Change the font size; the line height follows the current multiplier.
    pub fn set_font_size(&mut self, px: u32) {
        self.config.font_size_px = px;
        self.config.line_height_px = line_height_px(px, self.config.line_height_multiplier);
        self.apply(EditorOptionsPatch {
            font_size: Some(px),
            line_height: Some(self.config.line_height_px),
            ..Default::default()
        });
    }

    pub fn set_line_height(&mut self, multiplier: f32) {
        self.config.line_height_multiplier = multiplier;
        self.config.line_height_px = line_height_px(self.config.font_size_px, multiplier);
        self.apply(EditorOptionsPatch::line_height(self.config.line_height_px));
    }

    pub fn set_font_weight(&mut self, weight: impl Into<String>) {
        let weight = weight.into();
        self.config.font_weight = weight.clone();
        self.apply(EditorOptionsPatch::font_weight(weight));
    }

    /// Switch language mode and load that language's snippet.
    ///
    /// Unknown languages still switch mode; the buffer gets the placeholder.
    pub fn set_language(&mut self, id: &str) {
        self.config.active_language = id.to_string();
        self.host.set_language(id);
        let text = match snippets::snippet(id) {
            Some(text) => text,
            None => {
                debug!("No snippet for language '{}', using placeholder", id);
                snippets::PLACEHOLDER
            }
        };
        self.host.set_value(text);
        debug!("Language set to {}", id);
    }

    fn apply(&mut self, patch: EditorOptionsPatch) {
        debug!("Editor options updated: {}", patch.to_log_string());
        self.host.update_options(&patch);
    }
}
