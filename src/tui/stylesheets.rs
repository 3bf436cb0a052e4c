//! Stylesheet links for fonts picked from the remote catalog
//!
//! A terminal can't load web fonts, so the links are kept and listed in the
//! preview footer. They are exactly what a page would add to its head.

use tracing::info;

use crate::fonts::{FontLoader, StylesheetRequest};

#[derive(Debug, Default)]
pub struct LinkInjector {
    links: Vec<StylesheetRequest>,
}

impl LinkInjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn links(&self) -> &[StylesheetRequest] {
        &self.links
    }

    /// Render each injected link as a `<link>` element
    pub fn link_tags(&self) -> Vec<String> {
        self.links
            .iter()
            .map(|link| {
                format!(
                    r#"<link id="{}" rel="stylesheet" href="{}">"#,
                    link.key, link.href
                )
            })
            .collect()
    }
}

impl FontLoader for LinkInjector {
    fn inject_stylesheet(&mut self, request: &StylesheetRequest) {
        info!("Injected stylesheet {} ({})", request.key, request.href);
        self.links.push(request.clone());
    }
}
