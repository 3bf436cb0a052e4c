//! The configuration controls and keyboard focus

use crate::core::settings::{FONT_SIZE_RANGE, LINE_HEIGHT_RANGE, LINE_HEIGHT_STEP};
use crate::editor::input::format_line_height;

/// Everything that can hold keyboard focus, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    FontButton,
    FontSize,
    LineHeight,
    FontWeight,
    Language,
    VimToggle,
    Editor,
}

impl Control {
    pub const ALL: [Control; 7] = [
        Control::FontButton,
        Control::FontSize,
        Control::LineHeight,
        Control::FontWeight,
        Control::Language,
        Control::VimToggle,
        Control::Editor,
    ];

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|control| *control == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::FontButton => "Font",
            Control::FontSize => "Size",
            Control::LineHeight => "Line height",
            Control::FontWeight => "Weight",
            Control::Language => "Language",
            Control::VimToggle => "Vim mode",
            Control::Editor => "Editor",
        }
    }
}

/// Free text typed into a numeric control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberField {
    text: String,
}

impl NumberField {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Only digits and a decimal point are accepted
    pub fn push(&mut self, ch: char) -> bool {
        if ch.is_ascii_digit() || ch == '.' {
            self.text.push(ch);
            true
        } else {
            false
        }
    }

    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }
}

/// Font size one step up or down, kept in range
pub fn step_font_size(current: u32, up: bool) -> u32 {
    let next = if up {
        current.saturating_add(1)
    } else {
        current.saturating_sub(1)
    };
    next.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
}

/// Line height one step up or down, formatted for the control
pub fn step_line_height(current: f32, up: bool) -> String {
    let next = if up {
        current + LINE_HEIGHT_STEP
    } else {
        current - LINE_HEIGHT_STEP
    };
    format_line_height(next.clamp(*LINE_HEIGHT_RANGE.start(), *LINE_HEIGHT_RANGE.end()))
}

/// Index one step along a cyclic list of `len` entries
pub fn cycle(current: Option<usize>, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    match current {
        None => 0,
        Some(index) if forward => (index + 1) % len,
        Some(index) => (index + len - 1) % len,
    }
}
