//! typecase
pub mod core;
pub mod editor;
pub mod fonts;
pub mod logging;
pub mod modal;
#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;
#[cfg(feature = "tui")]
pub mod tui;
