//! Fonts
//!
//! - `font`: the [`Font`] type and the curated default list
//! - `directory`: curated list, current search results and the selection
//! - `loader`: ensure-loaded stylesheet injection for non-curated fonts
//! - `search`: the remote font listing client and result filtering
//! - `debounce`: debounced search that cancels superseded requests

pub mod debounce;
pub mod directory;
pub mod font;
pub mod loader;
pub mod search;

pub use debounce::{SearchDebouncer, SearchOutcome};
pub use directory::{FontDirectory, FontRow, QueryTicket};
pub use font::{curated_fonts, find_curated, Font};
pub use loader::{FontLoader, StylesheetRegistry, StylesheetRequest};
pub use search::{FontSource, GoogleFontsClient, RawFontRecord};
