//! The narrow interface through which the playground drives an editor
//!
//! The editing engine itself lives outside this crate's logic. Anything that
//! can accept option updates, switch language mode and replace its buffer can
//! be driven by the [`EditorFacade`](super::EditorFacade).

use serde::Serialize;

/// An editor instance owned by the host environment
pub trait EditorHost {
    /// Apply a partial option update; absent fields are left untouched
    fn update_options(&mut self, patch: &EditorOptionsPatch);

    /// Switch the language mode of the current model
    fn set_language(&mut self, language: &str);

    /// Replace the whole buffer
    fn set_value(&mut self, text: &str);
}

/// Partial editor options, mirroring the option object the host accepts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptionsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

impl EditorOptionsPatch {
    pub fn font_family(value: impl Into<String>) -> Self {
        Self {
            font_family: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn font_weight(value: impl Into<String>) -> Self {
        Self {
            font_weight: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn line_height(px: u32) -> Self {
        Self {
            line_height: Some(px),
            ..Default::default()
        }
    }

    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.font_size.is_none()
            && self.line_height.is_none()
            && self.font_weight.is_none()
    }

    /// Compact JSON form for log lines
    pub fn to_log_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serializes_only_present_keys() {
        let patch = EditorOptionsPatch {
            font_size: Some(20),
            line_height: Some(30),
            ..Default::default()
        };
        assert_eq!(patch.to_log_string(), r#"{"fontSize":20,"lineHeight":30}"#);
        assert!(!patch.is_empty());
        assert!(EditorOptionsPatch::default().is_empty());
    }
}
