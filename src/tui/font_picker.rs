//! State of the font picker popup
//!
//! The picker owns the search text and the highlighted row. The list it
//! shows always comes from the [`FontDirectory`](crate::fonts::FontDirectory).

#[derive(Debug, Clone, Default)]
pub struct FontPickerState {
    pub is_open: bool,
    pub search_query: String,
    pub highlighted: usize,
    pub scroll_offset: usize,
}

impl FontPickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with an empty search, highlighting `selected` when it is listed
    pub fn open(&mut self, selected: Option<usize>) {
        self.is_open = true;
        self.search_query.clear();
        self.highlighted = selected.unwrap_or(0);
        self.scroll_offset = 0;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn push_char(&mut self, ch: char) {
        self.search_query.push(ch);
        self.highlighted = 0;
    }

    /// Returns false when there was nothing to delete
    pub fn pop_char(&mut self) -> bool {
        let removed = self.search_query.pop().is_some();
        if removed {
            self.highlighted = 0;
        }
        removed
    }

    pub fn select_next(&mut self, max_items: usize) {
        if max_items > 0 {
            self.highlighted = (self.highlighted + 1).min(max_items - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn page_down(&mut self, max_items: usize, page_size: usize) {
        if max_items > 0 {
            self.highlighted = (self.highlighted + page_size).min(max_items - 1);
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.highlighted = self.highlighted.saturating_sub(page_size);
    }

    /// Keep the highlight inside a list that may have shrunk
    pub fn clamp(&mut self, max_items: usize) {
        self.highlighted = self.highlighted.min(max_items.saturating_sub(1));
    }

    pub fn update_scroll(&mut self, visible_items: usize) {
        if self.highlighted < self.scroll_offset {
            self.scroll_offset = self.highlighted;
        } else if visible_items > 0 && self.highlighted >= self.scroll_offset + visible_items {
            self.scroll_offset = self.highlighted + 1 - visible_items;
        }
    }
}
