//! The terminal preview editor
//!
//! Implements [`EditorHost`] so the configuration facade can drive it the same
//! way it would drive any other editor. Typography options can't change the
//! terminal font, so they are shown in the header and approximated where a
//! terminal can: heavy weights render bold and loose line heights add spacer
//! rows.

use crate::editor::{EditorHost, EditorOptionsPatch};

/// Options last pushed by the facade
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewOptions {
    pub font_family: String,
    pub font_size: u32,
    pub line_height: u32,
    pub font_weight: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    /// Column in characters
    pub col: usize,
}

#[derive(Debug, Clone)]
pub struct PreviewEditor {
    lines: Vec<String>,
    cursor: Cursor,
    language: String,
    options: PreviewOptions,
    block_cursor: bool,
}

impl Default for PreviewEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewEditor {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Cursor::default(),
            language: String::new(),
            options: PreviewOptions::default(),
            block_cursor: false,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    pub fn is_block_cursor(&self) -> bool {
        self.block_cursor
    }

    pub fn set_block_cursor(&mut self, block: bool) {
        self.block_cursor = block;
    }

    /// Weights of 600 and above render bold
    pub fn is_bold(&self) -> bool {
        self.options
            .font_weight
            .parse::<u32>()
            .map(|weight| weight >= 600)
            .unwrap_or(false)
    }

    /// Blank rows drawn between two text lines
    pub fn spacer_rows(&self) -> usize {
        if self.options.font_size > 0 && self.options.line_height >= self.options.font_size * 2 {
            1
        } else {
            0
        }
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(|line| line.chars().count()).unwrap_or(0)
    }

    fn clamp_col(&mut self) {
        self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.row));
    }

    pub fn move_left(&mut self) {
        self.cursor.col = self.cursor.col.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.row) {
            self.cursor.col += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.row + 1 < self.lines.len() {
            self.cursor.row += 1;
            self.clamp_col();
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor.col = 0;
    }

    pub fn move_line_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.row);
    }

    pub fn insert_char(&mut self, ch: char) {
        let Cursor { row, col } = self.cursor;
        let line = &mut self.lines[row];
        let at = byte_index(line, col);
        line.insert(at, ch);
        self.cursor.col += 1;
    }

    /// Split the current line at the cursor
    pub fn insert_newline(&mut self) {
        let Cursor { row, col } = self.cursor;
        let line = &mut self.lines[row];
        let at = byte_index(line, col);
        let rest = line.split_off(at);
        self.lines.insert(row + 1, rest);
        self.cursor = Cursor { row: row + 1, col: 0 };
    }

    /// Open an empty line below the cursor and move onto it
    pub fn open_line_below(&mut self) {
        let row = self.cursor.row + 1;
        self.lines.insert(row, String::new());
        self.cursor = Cursor { row, col: 0 };
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn backspace(&mut self) {
        let Cursor { row, col } = self.cursor;
        if col > 0 {
            let line = &mut self.lines[row];
            let at = byte_index(line, col - 1);
            line.remove(at);
            self.cursor.col -= 1;
        } else if row > 0 {
            let line = self.lines.remove(row);
            let previous = &mut self.lines[row - 1];
            let joined_at = previous.chars().count();
            previous.push_str(&line);
            self.cursor = Cursor {
                row: row - 1,
                col: joined_at,
            };
        }
    }

    /// Delete the character under the cursor
    pub fn delete_char(&mut self) {
        let Cursor { row, col } = self.cursor;
        if col < self.line_len(row) {
            let line = &mut self.lines[row];
            let at = byte_index(line, col);
            line.remove(at);
        }
    }
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(index, _)| index)
        .unwrap_or(line.len())
}

impl EditorHost for PreviewEditor {
    fn update_options(&mut self, patch: &EditorOptionsPatch) {
        if let Some(family) = &patch.font_family {
            self.options.font_family = family.clone();
        }
        if let Some(size) = patch.font_size {
            self.options.font_size = size;
        }
        if let Some(line_height) = patch.line_height {
            self.options.line_height = line_height;
        }
        if let Some(weight) = &patch.font_weight {
            self.options.font_weight = weight.clone();
        }
    }

    fn set_language(&mut self, language: &str) {
        self.language = language.to_string();
    }

    fn set_value(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.cursor = Cursor::default();
    }
}
