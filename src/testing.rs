//! Test doubles for the editor, font loader, font source and modal layer

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use crate::editor::{EditorHost, EditorOptionsPatch};
use crate::fonts::{FontLoader, FontSource, RawFontRecord, StylesheetRequest};
use crate::modal::{ModalHandle, ModalLayer, StatusLine};

/// Editor that records the latest value of every option it receives
#[derive(Debug, Default)]
pub struct RecordingEditor {
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    pub line_height: Option<u32>,
    pub font_weight: Option<String>,
    pub language: String,
    pub value: String,
    pub patches: Vec<EditorOptionsPatch>,
    pub modal_attached: bool,
}

impl EditorHost for RecordingEditor {
    fn update_options(&mut self, patch: &EditorOptionsPatch) {
        if let Some(family) = &patch.font_family {
            self.font_family = Some(family.clone());
        }
        if let Some(size) = patch.font_size {
            self.font_size = Some(size);
        }
        if let Some(line_height) = patch.line_height {
            self.line_height = Some(line_height);
        }
        if let Some(weight) = &patch.font_weight {
            self.font_weight = Some(weight.clone());
        }
        self.patches.push(patch.clone());
    }

    fn set_language(&mut self, language: &str) {
        self.language = language.to_string();
    }

    fn set_value(&mut self, text: &str) {
        self.value = text.to_string();
    }
}

/// Loader that remembers every stylesheet request
#[derive(Debug, Default)]
pub struct RecordingLoader {
    pub requests: Vec<StylesheetRequest>,
}

impl FontLoader for RecordingLoader {
    fn inject_stylesheet(&mut self, request: &StylesheetRequest) {
        self.requests.push(request.clone());
    }
}

/// In-memory font listing with optional per-query latency
#[derive(Debug, Default)]
pub struct FakeFontSource {
    records: Vec<RawFontRecord>,
    delays: HashMap<String, Duration>,
    failing: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeFontSource {
    pub fn new(records: Vec<RawFontRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// A source whose every request fails
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    /// Queries fetched so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl FontSource for FakeFontSource {
    async fn fetch_by_query(&self, query: &str) -> Vec<RawFontRecord> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(query.to_string());
        }
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing {
            return Vec::new();
        }
        self.records.clone()
    }
}

/// Modal layer that counts attachments and disposals
#[derive(Debug, Default, Clone)]
pub struct CountingLayer {
    attached: Rc<Cell<usize>>,
    disposed: Rc<Cell<usize>>,
}

impl CountingLayer {
    pub fn attached(&self) -> usize {
        self.attached.get()
    }

    pub fn disposed(&self) -> usize {
        self.disposed.get()
    }

    pub fn live_handles(&self) -> usize {
        self.attached() - self.disposed()
    }
}

pub struct CountingHandle {
    disposed: Rc<Cell<usize>>,
}

impl ModalLayer<RecordingEditor> for CountingLayer {
    type Handle = CountingHandle;

    fn attach(&mut self, editor: &mut RecordingEditor, status: &mut StatusLine) -> CountingHandle {
        self.attached.set(self.attached.get() + 1);
        editor.modal_attached = true;
        status.set("-- MODAL --");
        CountingHandle {
            disposed: Rc::clone(&self.disposed),
        }
    }
}

impl ModalHandle<RecordingEditor> for CountingHandle {
    fn dispose(self, editor: &mut RecordingEditor, status: &mut StatusLine) {
        self.disposed.set(self.disposed.get() + 1);
        editor.modal_attached = false;
        status.clear();
    }
}
