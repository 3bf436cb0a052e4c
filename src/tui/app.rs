use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Result};
use crossterm::cursor::SetCursorStyle;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tracing::debug;

use crate::core::cli::StartupOptions;
use crate::core::settings::{FONT_WEIGHTS, SEARCH_DEBOUNCE};
use crate::core::state::AppState;
use crate::editor::input::format_line_height;
use crate::editor::snippets::SELECTOR_LANGUAGES;
use crate::fonts::{
    curated_fonts, FontSource, GoogleFontsClient, QueryTicket, SearchDebouncer, SearchOutcome,
};
use crate::tui::controls::{cycle, step_font_size, step_line_height, Control, NumberField};
use crate::tui::events::{spawn_input_reader, InputEvent};
use crate::tui::font_picker::FontPickerState;
use crate::tui::preview::PreviewEditor;
use crate::tui::stylesheets::LinkInjector;
use crate::tui::ui;
use crate::tui::vim::VimEmulation;

pub type TuiState = AppState<PreviewEditor, LinkInjector, VimEmulation>;

const PICKER_PAGE: usize = 10;

pub struct App<S: FontSource = GoogleFontsClient> {
    pub state: TuiState,
    pub focus: Control,
    pub picker: FontPickerState,
    pub font_size_field: NumberField,
    pub line_height_field: NumberField,
    pub weight_index: usize,
    pub language_index: Option<usize>,
    pub has_api_key: bool,
    pub editor_scroll: usize,
    pub should_quit: bool,
    debouncer: SearchDebouncer<S>,
    applied_block_cursor: Option<bool>,
}

impl<S: FontSource> App<S> {
    /// Build the app and the receiver its font search results arrive on
    pub fn new(startup: StartupOptions, source: S) -> (Self, mpsc::UnboundedReceiver<SearchOutcome>) {
        let (debouncer, outcome_rx) =
            SearchDebouncer::new(Arc::new(source), curated_fonts(), SEARCH_DEBOUNCE);
        let has_api_key = startup.api_key.is_some();
        let state = AppState::new(
            PreviewEditor::new(),
            LinkInjector::new(),
            VimEmulation,
            startup,
        );

        let config = state.editor_config();
        let font_size_field = NumberField::new(config.font_size_px.to_string());
        let line_height_field = NumberField::new(format_line_height(config.line_height_multiplier));
        let weight_index = FONT_WEIGHTS
            .iter()
            .position(|weight| *weight == config.font_weight)
            .unwrap_or(1);
        let language_index = SELECTOR_LANGUAGES
            .iter()
            .position(|language| *language == config.active_language);

        let app = Self {
            state,
            focus: Control::FontButton,
            picker: FontPickerState::new(),
            font_size_field,
            line_height_field,
            weight_index,
            language_index,
            has_api_key,
            editor_scroll: 0,
            should_quit: false,
            debouncer,
            applied_block_cursor: None,
        };
        (app, outcome_rx)
    }

    pub async fn run<B: Backend + Write>(
        &mut self,
        terminal: &mut Terminal<B>,
        outcome_rx: &mut mpsc::UnboundedReceiver<SearchOutcome>,
    ) -> Result<()> {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let _input_reader = spawn_input_reader(input_tx);
        self.run_with_input(terminal, input_rx, outcome_rx).await
    }

    /// Drive the draw/dispatch loop from an already running input source.
    /// Fails if the input source stops before the user quits.
    pub async fn run_with_input<B: Backend + Write>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut input_rx: mpsc::UnboundedReceiver<InputEvent>,
        outcome_rx: &mut mpsc::UnboundedReceiver<SearchOutcome>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;
            self.sync_cursor_style(terminal)?;

            tokio::select! {
                input_event = input_rx.recv() => {
                    let Some(input_event) = input_event else {
                        self.debouncer.cancel();
                        bail!("Terminal input closed");
                    };
                    match input_event {
                        InputEvent::Key(key) => self.handle_key_event(key),
                        InputEvent::Resize(_, _) => {
                            // Redrawn at the top of the loop
                        }
                    }
                }
                Some(outcome) = outcome_rx.recv() => {
                    self.handle_search_outcome(outcome);
                }
            }

            if self.should_quit {
                break;
            }
        }

        self.debouncer.cancel();
        Ok(())
    }

    fn sync_cursor_style<B: Backend + Write>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let block = self.state.editor.host().is_block_cursor();
        if self.applied_block_cursor != Some(block) {
            let style = if block {
                SetCursorStyle::SteadyBlock
            } else {
                SetCursorStyle::SteadyBar
            };
            execute!(terminal.backend_mut(), style)?;
            self.applied_block_cursor = Some(block);
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        if self.picker.is_open {
            self.handle_picker_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.previous()),
            _ => match self.focus {
                Control::FontButton => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.open_font_picker();
                    }
                }
                Control::FontSize => self.handle_font_size_key(key),
                Control::LineHeight => self.handle_line_height_key(key),
                Control::FontWeight => {
                    if let Some(forward) = arrow_direction(key.code) {
                        self.weight_index = cycle(Some(self.weight_index), FONT_WEIGHTS.len(), forward);
                        self.state.set_font_weight_input(FONT_WEIGHTS[self.weight_index]);
                    }
                }
                Control::Language => {
                    if let Some(forward) = arrow_direction(key.code) {
                        let index = cycle(self.language_index, SELECTOR_LANGUAGES.len(), forward);
                        self.language_index = Some(index);
                        self.state.set_language(SELECTOR_LANGUAGES[index]);
                        self.editor_scroll = 0;
                    }
                }
                Control::VimToggle => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.state.toggle_modal_mode();
                    }
                }
                Control::Editor => self.handle_editor_key(key),
            },
        }
    }

    /// Move focus, resetting a numeric control that was left holding text
    /// the editor didn't accept
    fn set_focus(&mut self, focus: Control) {
        let config = self.state.editor_config();
        match self.focus {
            Control::FontSize => self.font_size_field.set(config.font_size_px.to_string()),
            Control::LineHeight => self
                .line_height_field
                .set(format_line_height(config.line_height_multiplier)),
            _ => {}
        }
        self.focus = focus;
    }

    fn handle_font_size_key(&mut self, key: KeyEvent) {
        let changed = match key.code {
            KeyCode::Char(ch) => self.font_size_field.push(ch),
            KeyCode::Backspace => self.font_size_field.pop(),
            code => match arrow_direction(code) {
                Some(up) => {
                    let next = step_font_size(self.state.editor_config().font_size_px, up);
                    self.font_size_field.set(next.to_string());
                    true
                }
                None => false,
            },
        };
        if changed {
            self.state.set_font_size_input(self.font_size_field.text());
        }
    }

    fn handle_line_height_key(&mut self, key: KeyEvent) {
        let changed = match key.code {
            KeyCode::Char(ch) => self.line_height_field.push(ch),
            KeyCode::Backspace => self.line_height_field.pop(),
            code => match arrow_direction(code) {
                Some(up) => {
                    let current = self.state.editor_config().line_height_multiplier;
                    self.line_height_field.set(step_line_height(current, up));
                    true
                }
                None => false,
            },
        };
        if changed {
            self.state.set_line_height_input(self.line_height_field.text());
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let state = &mut self.state;
        let editor = state.editor.host_mut();
        if let Some(handle) = state.modal.handle_mut() {
            if handle.handle_key(key, editor, &mut state.status) {
                return;
            }
        }

        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                editor.insert_char(ch)
            }
            KeyCode::Enter => editor.insert_newline(),
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Delete => editor.delete_char(),
            KeyCode::Left => editor.move_left(),
            KeyCode::Right => editor.move_right(),
            KeyCode::Up => editor.move_up(),
            KeyCode::Down => editor.move_down(),
            KeyCode::Home => editor.move_line_start(),
            KeyCode::End => editor.move_line_end(),
            _ => {}
        }
    }

    pub fn open_font_picker(&mut self) {
        self.debouncer.cancel();
        self.state.begin_font_search("");
        self.picker.open(self.state.fonts.selected_index());
        debug!("Font picker opened");
    }

    pub fn close_font_picker(&mut self) {
        self.debouncer.cancel();
        self.picker.close();
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let visible = self.state.fonts.visible().len();
        match key.code {
            KeyCode::Esc => self.close_font_picker(),
            KeyCode::Enter => self.choose_highlighted_font(),
            KeyCode::Down => self.picker.select_next(visible),
            KeyCode::Up => self.picker.select_previous(),
            KeyCode::PageDown => self.picker.page_down(visible, PICKER_PAGE),
            KeyCode::PageUp => self.picker.page_up(PICKER_PAGE),
            KeyCode::Backspace => {
                if self.picker.pop_char() {
                    self.on_search_changed();
                }
            }
            KeyCode::Char(ch) => {
                self.picker.push_char(ch);
                self.on_search_changed();
            }
            _ => {}
        }
    }

    fn on_search_changed(&mut self) {
        match self.state.begin_font_search(&self.picker.search_query) {
            QueryTicket::Immediate => self.debouncer.cancel(),
            QueryTicket::Remote { generation, query } => self.debouncer.schedule(generation, query),
        }
    }

    fn choose_highlighted_font(&mut self) {
        let Some(font) = self.state.fonts.visible().get(self.picker.highlighted).cloned() else {
            return;
        };
        self.state.select_font(font);
        self.close_font_picker();
    }

    pub fn handle_search_outcome(&mut self, outcome: SearchOutcome) {
        if self.state.apply_search_outcome(outcome) {
            self.picker.clamp(self.state.fonts.visible().len());
        }
    }
}

/// Up/Right step forward, Down/Left step back
fn arrow_direction(code: KeyCode) -> Option<bool> {
    match code {
        KeyCode::Up | KeyCode::Right => Some(true),
        KeyCode::Down | KeyCode::Left => Some(false),
        _ => None,
    }
}
