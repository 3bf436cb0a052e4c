//! Font resource loading
//!
//! Selecting a non-curated font injects a stylesheet for it. The
//! [`StylesheetRegistry`] remembers which keys were requested so every font
//! is loaded at most once.

use std::collections::HashSet;

use reqwest::Url;
use tracing::debug;

const STYLESHEET_BASE: &str = "https://fonts.googleapis.com/css2";

/// A stylesheet to inject for one font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetRequest {
    /// Normalised identifier, see [`resource_key`]
    pub key: String,
    pub href: String,
}

impl StylesheetRequest {
    pub fn for_font(name: &str) -> Self {
        Self {
            key: resource_key(name),
            href: stylesheet_href(name),
        }
    }
}

/// Something that can make a stylesheet available to the editor
pub trait FontLoader {
    fn inject_stylesheet(&mut self, request: &StylesheetRequest);
}

/// `font-` followed by the lowercase name, non-alphanumeric runs collapsed to `-`
pub fn resource_key(name: &str) -> String {
    let mut key = String::from("font");
    let mut pending_dash = true;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_dash {
                key.push('-');
                pending_dash = false;
            }
            key.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    key
}

/// Stylesheet URL for a font family, with the family form-encoded
pub fn stylesheet_href(name: &str) -> String {
    let family = name.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut url = match Url::parse(STYLESHEET_BASE) {
        Ok(url) => url,
        Err(_) => return STYLESHEET_BASE.to_string(),
    };
    url.query_pairs_mut()
        .append_pair("family", &family)
        .append_pair("display", "swap");
    url.into()
}

/// Set of stylesheet keys that were already requested
#[derive(Debug, Default, Clone)]
pub struct StylesheetRegistry {
    requested: HashSet<String>,
}

impl StylesheetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the font's stylesheet unless it was requested before.
    ///
    /// Returns true when a load was issued.
    pub fn ensure_loaded(&mut self, name: &str, loader: &mut impl FontLoader) -> bool {
        let request = StylesheetRequest::for_font(name);
        if self.requested.contains(&request.key) {
            debug!("Stylesheet {} already loaded", request.key);
            return false;
        }
        debug!("Injecting stylesheet {} ({})", request.key, request.href);
        loader.inject_stylesheet(&request);
        self.requested.insert(request.key);
        true
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.requested.contains(&resource_key(name))
    }

    pub fn len(&self) -> usize {
        self.requested.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }
}
