//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - CLI handling and the user settings file
//! - Built-in defaults
//! - Error helpers
//! - The application state shared by all UI events
//! - Running the application

pub mod cli;
pub mod config;
pub mod errors;
pub mod platform;
pub mod runner;
pub mod settings;
pub mod state;

// Re-export commonly used items
pub use cli::{CliArgs, StartupOptions};
pub use config::ConfigFile;
pub use runner::run_app;
pub use state::AppState;
