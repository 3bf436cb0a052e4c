//! The font directory: curated fonts, the current search, and the selection
//!
//! The visible list is always derived from the current query: the curated
//! list when the query is empty, the latest remote results otherwise. Each
//! query gets a generation number and only the newest generation's results
//! are ever applied.

use tracing::debug;

use crate::fonts::debounce::SearchOutcome;
use crate::fonts::font::Font;
use crate::fonts::loader::{FontLoader, StylesheetRegistry};
use crate::fonts::search::normalize_query;

/// What the caller has to do after a query change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTicket {
    /// The visible list was updated synchronously
    Immediate,
    /// A remote search must run; apply its results with this generation
    Remote { generation: u64, query: String },
}

impl QueryTicket {
    pub fn remote_generation(&self) -> Option<u64> {
        match self {
            QueryTicket::Immediate => None,
            QueryTicket::Remote { generation, .. } => Some(*generation),
        }
    }
}

/// One row of the rendered font list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontRow<'a> {
    pub font: &'a Font,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct FontDirectory {
    curated: Vec<Font>,
    current_query: String,
    visible: Vec<Font>,
    selected: Font,
    latest_generation: u64,
    pending: bool,
    stylesheets: StylesheetRegistry,
}

impl FontDirectory {
    /// Build a directory over the curated list; the first curated font starts
    /// selected.
    pub fn new(curated: Vec<Font>) -> Self {
        let selected = curated
            .first()
            .cloned()
            .unwrap_or_else(Font::system_monospace);
        Self {
            visible: curated.clone(),
            curated,
            current_query: String::new(),
            selected,
            latest_generation: 0,
            pending: false,
            stylesheets: StylesheetRegistry::new(),
        }
    }

    pub fn curated(&self) -> &[Font] {
        &self.curated
    }

    pub fn visible(&self) -> &[Font] {
        &self.visible
    }

    pub fn selected(&self) -> &Font {
        &self.selected
    }

    pub fn current_query(&self) -> &str {
        &self.current_query
    }

    /// True while a remote search for the current query is outstanding
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn stylesheets(&self) -> &StylesheetRegistry {
        &self.stylesheets
    }

    pub fn is_curated(&self, font: &Font) -> bool {
        self.curated.iter().any(|curated| curated.value == font.value)
    }

    /// Change the query. An empty query shows the curated list right away;
    /// anything else returns a ticket for a remote search.
    ///
    /// Every call supersedes all earlier tickets.
    pub fn begin_query(&mut self, query: &str) -> QueryTicket {
        self.latest_generation += 1;
        let query = normalize_query(query);
        self.current_query = query.to_string();

        if query.is_empty() {
            self.visible = self.curated.clone();
            self.pending = false;
            QueryTicket::Immediate
        } else {
            self.pending = true;
            QueryTicket::Remote {
                generation: self.latest_generation,
                query: self.current_query.clone(),
            }
        }
    }

    /// Back to the empty query and the curated list
    pub fn reset_query(&mut self) {
        self.begin_query("");
    }

    /// Apply a finished search. Outcomes from superseded queries are dropped.
    ///
    /// Returns true when the visible list was replaced.
    pub fn apply_outcome(&mut self, outcome: SearchOutcome) -> bool {
        if outcome.generation != self.latest_generation {
            debug!(
                "Dropping stale font search #{} for '{}' (latest is #{})",
                outcome.generation, outcome.query, self.latest_generation
            );
            return false;
        }
        debug!(
            "Font search '{}' produced {} fonts",
            outcome.query,
            outcome.fonts.len()
        );
        self.visible = outcome.fonts;
        self.pending = false;
        true
    }

    /// Make `font` the selected font, loading its stylesheet first when it
    /// is not one of the curated fonts.
    pub fn select(&mut self, font: Font, loader: &mut impl FontLoader) {
        if !self.is_curated(&font) {
            self.stylesheets.ensure_loaded(&font.name, loader);
        }
        debug!("Selected font {}", font.name);
        self.selected = font;
    }

    /// Rows for rendering; the first row whose value matches the selection
    /// is marked selected.
    pub fn rows(&self) -> Vec<FontRow<'_>> {
        let selected_index = self.selected_index();
        self.visible
            .iter()
            .enumerate()
            .map(|(index, font)| FontRow {
                font,
                selected: Some(index) == selected_index,
            })
            .collect()
    }

    /// Position of the selected font in the visible list
    pub fn selected_index(&self) -> Option<usize> {
        self.visible
            .iter()
            .position(|font| font.value == self.selected.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::curated_fonts;
    use crate::testing::RecordingLoader;

    fn outcome(generation: u64, query: &str, fonts: Vec<Font>) -> SearchOutcome {
        SearchOutcome {
            generation,
            query: query.to_string(),
            fonts,
        }
    }

    #[test]
    fn test_defaults_to_first_curated_font() {
        let directory = FontDirectory::new(curated_fonts());
        assert_eq!(directory.selected().name, "Fira Code");
        assert_eq!(directory.visible(), directory.curated());
        assert!(!directory.is_pending());
    }

    #[test]
    fn test_empty_curated_list_still_has_selection() {
        let directory = FontDirectory::new(Vec::new());
        assert_eq!(directory.selected().value, "monospace");
    }

    #[test]
    fn test_empty_query_restores_curated_list() {
        let mut directory = FontDirectory::new(curated_fonts());
        let ticket = directory.begin_query("space");
        let generation = ticket.remote_generation().unwrap();
        assert!(directory.is_pending());
        assert!(directory.apply_outcome(outcome(
            generation,
            "space",
            vec![Font::from_remote("Space Mono", Some("monospace"))],
        )));
        assert_eq!(directory.visible().len(), 1);

        assert_eq!(directory.begin_query(""), QueryTicket::Immediate);
        assert_eq!(directory.visible(), curated_fonts().as_slice());
        assert!(!directory.is_pending());
    }

    #[test]
    fn test_stale_outcome_is_dropped() {
        let mut directory = FontDirectory::new(curated_fonts());
        let first = directory.begin_query("fira").remote_generation().unwrap();
        let second = directory.begin_query("mono").remote_generation().unwrap();

        let mono = vec![Font::from_remote("Space Mono", Some("monospace"))];
        assert!(directory.apply_outcome(outcome(second, "mono", mono.clone())));
        assert!(!directory.apply_outcome(outcome(
            first,
            "fira",
            vec![Font::from_remote("Fira Sans", Some("sans-serif"))],
        )));
        assert_eq!(directory.visible(), mono.as_slice());
    }

    #[test]
    fn test_outcome_after_clearing_query_is_dropped() {
        let mut directory = FontDirectory::new(curated_fonts());
        let generation = directory.begin_query("mono").remote_generation().unwrap();
        directory.reset_query();
        assert!(!directory.apply_outcome(outcome(generation, "mono", Vec::new())));
        assert_eq!(directory.visible(), curated_fonts().as_slice());
    }

    #[test]
    fn test_failed_search_is_empty_not_error() {
        let mut directory = FontDirectory::new(curated_fonts());
        let generation = directory.begin_query("zzz").remote_generation().unwrap();
        assert!(directory.apply_outcome(outcome(generation, "zzz", Vec::new())));
        assert!(directory.visible().is_empty());
        assert!(directory.rows().is_empty());
        assert!(!directory.is_pending());
    }

    #[test]
    fn test_selecting_remote_font_loads_once() {
        let mut directory = FontDirectory::new(curated_fonts());
        let mut loader = RecordingLoader::default();
        let space = Font::from_remote("Space Mono", Some("monospace"));

        directory.select(space.clone(), &mut loader);
        directory.select(curated_fonts()[1].clone(), &mut loader);
        directory.select(space.clone(), &mut loader);

        assert_eq!(loader.requests.len(), 1);
        assert_eq!(loader.requests[0].key, "font-space-mono");
        assert_eq!(directory.selected(), &space);
    }

    #[test]
    fn test_selecting_curated_font_loads_nothing() {
        let mut directory = FontDirectory::new(curated_fonts());
        let mut loader = RecordingLoader::default();
        directory.select(curated_fonts()[3].clone(), &mut loader);
        assert!(loader.requests.is_empty());
        assert_eq!(directory.selected().name, "Source Code Pro");
    }

    #[test]
    fn test_rows_mark_exactly_the_selected_font() {
        let mut directory = FontDirectory::new(curated_fonts());
        let mut loader = RecordingLoader::default();
        directory.select(curated_fonts()[2].clone(), &mut loader);

        let rows = directory.rows();
        let marked: Vec<_> = rows.iter().filter(|row| row.selected).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].font.name, "Roboto Mono");
        assert_eq!(directory.selected_index(), Some(2));
    }

    #[test]
    fn test_rows_without_selected_font_mark_nothing() {
        let mut directory = FontDirectory::new(curated_fonts());
        let generation = directory.begin_query("lora").remote_generation().unwrap();
        directory.apply_outcome(outcome(
            generation,
            "lora",
            vec![Font::from_remote("Lora", Some("serif"))],
        ));
        assert!(directory.rows().iter().all(|row| !row.selected));
    }
}
