//! A small vim-style modal layer for the preview editor
//!
//! Normal mode moves the cursor and enters insert mode; insert mode types.
//! The status line shows the current mode while the layer is attached.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::modal::{ModalHandle, ModalLayer, StatusLine};
use crate::tui::preview::PreviewEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VimMode {
    Normal,
    Insert,
}

impl VimMode {
    pub fn label(self) -> &'static str {
        match self {
            VimMode::Normal => "-- NORMAL --",
            VimMode::Insert => "-- INSERT --",
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct VimEmulation;

#[derive(Debug)]
pub struct VimHandle {
    mode: VimMode,
}

impl ModalLayer<PreviewEditor> for VimEmulation {
    type Handle = VimHandle;

    fn attach(&mut self, editor: &mut PreviewEditor, status: &mut StatusLine) -> VimHandle {
        editor.set_block_cursor(true);
        status.set(VimMode::Normal.label());
        VimHandle {
            mode: VimMode::Normal,
        }
    }
}

impl ModalHandle<PreviewEditor> for VimHandle {
    fn dispose(self, editor: &mut PreviewEditor, status: &mut StatusLine) {
        editor.set_block_cursor(false);
        status.clear();
    }
}

impl VimHandle {
    pub fn mode(&self) -> VimMode {
        self.mode
    }

    fn set_mode(&mut self, mode: VimMode, editor: &mut PreviewEditor, status: &mut StatusLine) {
        self.mode = mode;
        editor.set_block_cursor(mode == VimMode::Normal);
        status.set(mode.label());
    }

    /// Handle a key in the editor pane. Returns false when the key isn't
    /// used by the layer.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        editor: &mut PreviewEditor,
        status: &mut StatusLine,
    ) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match self.mode {
            VimMode::Normal => self.handle_normal(key, editor, status),
            VimMode::Insert => self.handle_insert(key, editor, status),
        }
    }

    fn handle_normal(
        &mut self,
        key: KeyEvent,
        editor: &mut PreviewEditor,
        status: &mut StatusLine,
    ) -> bool {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => editor.move_left(),
            KeyCode::Char('j') | KeyCode::Down => editor.move_down(),
            KeyCode::Char('k') | KeyCode::Up => editor.move_up(),
            KeyCode::Char('l') | KeyCode::Right => editor.move_right(),
            KeyCode::Char('0') | KeyCode::Home => editor.move_line_start(),
            KeyCode::Char('$') | KeyCode::End => editor.move_line_end(),
            KeyCode::Char('x') => editor.delete_char(),
            KeyCode::Char('i') => self.set_mode(VimMode::Insert, editor, status),
            KeyCode::Char('a') => {
                editor.move_right();
                self.set_mode(VimMode::Insert, editor, status);
            }
            KeyCode::Char('A') => {
                editor.move_line_end();
                self.set_mode(VimMode::Insert, editor, status);
            }
            KeyCode::Char('o') => {
                editor.open_line_below();
                self.set_mode(VimMode::Insert, editor, status);
            }
            // Unmapped keys are swallowed in normal mode
            KeyCode::Char(_) | KeyCode::Esc => {}
            _ => return false,
        }
        true
    }

    fn handle_insert(
        &mut self,
        key: KeyEvent,
        editor: &mut PreviewEditor,
        status: &mut StatusLine,
    ) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.set_mode(VimMode::Normal, editor, status);
                editor.move_left();
            }
            KeyCode::Char(ch) => editor.insert_char(ch),
            KeyCode::Enter => editor.insert_newline(),
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Left => editor.move_left(),
            KeyCode::Right => editor.move_right(),
            KeyCode::Up => editor.move_up(),
            KeyCode::Down => editor.move_down(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorHost;
    use crate::modal::ModalModeController;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn attached(text: &str) -> (PreviewEditor, StatusLine, VimHandle) {
        let mut editor = PreviewEditor::new();
        editor.set_value(text);
        let mut status = StatusLine::new();
        let handle = VimEmulation.attach(&mut editor, &mut status);
        (editor, status, handle)
    }

    #[test]
    fn test_attach_starts_in_normal_mode() {
        let (editor, status, handle) = attached("abc");
        assert_eq!(handle.mode(), VimMode::Normal);
        assert_eq!(status.text(), "-- NORMAL --");
        assert!(editor.is_block_cursor());
    }

    #[test]
    fn test_normal_mode_does_not_type() {
        let (mut editor, mut status, mut handle) = attached("abc");
        assert!(handle.handle_key(key(KeyCode::Char('l')), &mut editor, &mut status));
        assert!(handle.handle_key(key(KeyCode::Char('z')), &mut editor, &mut status));
        assert_eq!(editor.text(), "abc");
        assert_eq!(editor.cursor().col, 1);
    }

    #[test]
    fn test_insert_then_escape() {
        let (mut editor, mut status, mut handle) = attached("abc");
        handle.handle_key(key(KeyCode::Char('A')), &mut editor, &mut status);
        assert_eq!(status.text(), "-- INSERT --");
        assert!(!editor.is_block_cursor());

        handle.handle_key(key(KeyCode::Char('d')), &mut editor, &mut status);
        handle.handle_key(key(KeyCode::Esc), &mut editor, &mut status);
        assert_eq!(editor.text(), "abcd");
        assert_eq!(handle.mode(), VimMode::Normal);
        assert_eq!(editor.cursor().col, 3);
    }

    #[test]
    fn test_dispose_restores_editor() {
        let mut editor = PreviewEditor::new();
        let mut status = StatusLine::new();
        let mut controller = ModalModeController::new(VimEmulation);

        controller.enable(&mut editor, &mut status);
        assert!(editor.is_block_cursor());
        controller.disable(&mut editor, &mut status);
        controller.disable(&mut editor, &mut status);

        assert!(!editor.is_block_cursor());
        assert!(status.is_empty());
        assert!(controller.handle_mut().is_none());
    }
}
