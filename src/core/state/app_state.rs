//! Core application state
//!
//! This module contains the [`AppState`] structure that owns the single
//! editor instance, the font directory with the selected font, and the
//! modal input mode controller. All UI events go through it.

use tracing::{debug, info};

use crate::core::cli::StartupOptions;
use crate::editor::input::{parse_font_size, parse_font_weight, parse_line_height};
use crate::editor::{EditorConfig, EditorFacade, EditorHost};
use crate::fonts::{curated_fonts, Font, FontDirectory, FontLoader, QueryTicket, SearchOutcome};
use crate::modal::{ModalLayer, ModalModeController, StatusLine};

/// The main application state
pub struct AppState<E, L, M>
where
    E: EditorHost,
    L: FontLoader,
    M: ModalLayer<E>,
{
    pub editor: EditorFacade<E>,
    pub fonts: FontDirectory,
    pub loader: L,
    pub modal: ModalModeController<E, M>,
    pub status: StatusLine,
}

impl<E, L, M> AppState<E, L, M>
where
    E: EditorHost,
    L: FontLoader,
    M: ModalLayer<E>,
{
    /// Create the editor from the startup options and wire up fonts and
    /// the modal layer
    pub fn new(host: E, loader: L, modal_layer: M, startup: StartupOptions) -> Self {
        let mut state = Self {
            editor: EditorFacade::create(host, startup.editor),
            fonts: FontDirectory::new(curated_fonts()),
            loader,
            modal: ModalModeController::new(modal_layer),
            status: StatusLine::new(),
        };

        if state.fonts.selected() != &startup.font {
            state.select_font(startup.font);
        }
        if startup.vim_mode {
            state.enable_modal_mode();
        }
        state
    }

    pub fn editor_config(&self) -> &EditorConfig {
        self.editor.config()
    }

    pub fn selected_font(&self) -> &Font {
        self.fonts.selected()
    }

    /// Select a font and hand its family stack to the editor
    pub fn select_font(&mut self, font: Font) {
        self.fonts.select(font, &mut self.loader);
        let value = self.fonts.selected().value.clone();
        self.editor.set_font_family(value);
        info!("Font changed to {}", self.fonts.selected().name);
    }

    /// Update the font search query; see [`FontDirectory::begin_query`]
    pub fn begin_font_search(&mut self, query: &str) -> QueryTicket {
        self.fonts.begin_query(query)
    }

    /// Apply a finished remote search unless a newer query superseded it
    pub fn apply_search_outcome(&mut self, outcome: SearchOutcome) -> bool {
        self.fonts.apply_outcome(outcome)
    }

    /// Font size control changed; unparsable or out-of-range text is ignored
    pub fn set_font_size_input(&mut self, raw: &str) -> bool {
        match parse_font_size(raw) {
            Some(px) => {
                self.editor.set_font_size(px);
                true
            }
            None => {
                debug!("Ignoring font size input '{}'", raw);
                false
            }
        }
    }

    /// Line height control changed; unparsable or out-of-range text is ignored
    pub fn set_line_height_input(&mut self, raw: &str) -> bool {
        match parse_line_height(raw) {
            Some(multiplier) => {
                self.editor.set_line_height(multiplier);
                true
            }
            None => {
                debug!("Ignoring line height input '{}'", raw);
                false
            }
        }
    }

    /// Font weight selector changed
    pub fn set_font_weight_input(&mut self, raw: &str) -> bool {
        match parse_font_weight(raw) {
            Some(weight) => {
                self.editor.set_font_weight(weight);
                true
            }
            None => false,
        }
    }

    /// Language selector changed
    pub fn set_language(&mut self, id: &str) {
        self.editor.set_language(id);
    }

    pub fn is_modal_mode_enabled(&self) -> bool {
        self.modal.is_enabled()
    }

    pub fn enable_modal_mode(&mut self) {
        if !self.modal.is_enabled() {
            self.modal.enable(self.editor.host_mut(), &mut self.status);
        }
    }

    pub fn disable_modal_mode(&mut self) {
        self.modal.disable(self.editor.host_mut(), &mut self.status);
    }

    /// Flip modal mode; returns whether it is enabled afterwards
    pub fn toggle_modal_mode(&mut self) -> bool {
        self.modal.toggle(self.editor.host_mut(), &mut self.status)
    }
}
