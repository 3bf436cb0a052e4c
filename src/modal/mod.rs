//! Modal (vim-style) input mode
//!
//! The modal layer is attached to an editor and a status line and hands back
//! a handle; disposing the handle detaches it again. The controller keeps at
//! most one handle alive.

use std::marker::PhantomData;

use tracing::info;

/// The status line the modal layer reports its mode on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    text: String,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A modal editing layer that can be attached to editors of type `E`
pub trait ModalLayer<E> {
    type Handle: ModalHandle<E>;

    fn attach(&mut self, editor: &mut E, status: &mut StatusLine) -> Self::Handle;
}

/// A live attachment of a modal layer
pub trait ModalHandle<E> {
    /// Detach from the editor and release the status line
    fn dispose(self, editor: &mut E, status: &mut StatusLine);
}

/// Disabled/enabled lifecycle around a [`ModalLayer`]
pub struct ModalModeController<E, L: ModalLayer<E>> {
    layer: L,
    handle: Option<L::Handle>,
    _editor: PhantomData<fn(&mut E)>,
}

impl<E, L: ModalLayer<E>> ModalModeController<E, L> {
    pub fn new(layer: L) -> Self {
        Self {
            layer,
            handle: None,
            _editor: PhantomData,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.handle.is_some()
    }

    /// Attach the layer. Does nothing when already enabled.
    pub fn enable(&mut self, editor: &mut E, status: &mut StatusLine) {
        if self.handle.is_some() {
            return;
        }
        self.handle = Some(self.layer.attach(editor, status));
        info!("Vim mode enabled");
    }

    /// Dispose the handle. Safe to call when already disabled.
    pub fn disable(&mut self, editor: &mut E, status: &mut StatusLine) {
        if let Some(handle) = self.handle.take() {
            handle.dispose(editor, status);
            info!("Vim mode disabled");
        }
    }

    /// Flip the mode; returns whether it is enabled afterwards
    pub fn toggle(&mut self, editor: &mut E, status: &mut StatusLine) -> bool {
        if self.is_enabled() {
            self.disable(editor, status);
        } else {
            self.enable(editor, status);
        }
        self.is_enabled()
    }

    pub fn handle_mut(&mut self) -> Option<&mut L::Handle> {
        self.handle.as_mut()
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }
}
