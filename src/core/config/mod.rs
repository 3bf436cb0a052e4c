//! Application configuration management
//!
//! This module handles user configuration files. CLI arguments live in
//! `core::cli` and built-in defaults in `core::settings`.

pub mod user_config;

pub use user_config::ConfigFile;
