//! Editor configuration
//!
//! This module contains everything the playground needs to drive an editor:
//! - The sample snippet catalog
//! - The narrow editor interface ([`EditorHost`])
//! - The configuration facade that owns the editor instance
//! - Parsing of the numeric typography controls

pub mod config;
pub mod host;
pub mod input;
pub mod snippets;

pub use config::{line_height_px, EditorConfig, EditorFacade};
pub use host::{EditorHost, EditorOptionsPatch};
