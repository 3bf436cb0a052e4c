//! Error handling helpers
//!
//! Application errors are `anyhow` errors with context attached at the
//! boundary where they happen.

use std::fmt::Display;
use std::path::Path;

use anyhow::Context;

/// Result type used across the application
pub type TypecaseResult<T> = anyhow::Result<T>;

/// Attach "failed to <action> <path>" context to file operations
pub trait TypecaseContext<T> {
    fn with_file_context(self, action: &str, path: &Path) -> TypecaseResult<T>;
}

impl<T, E> TypecaseContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context(self, action: &str, path: &Path) -> TypecaseResult<T> {
        self.with_context(|| format!("Failed to {} {}", action, path.display()))
    }
}

/// Turn a CLI validation message into an error
pub fn invalid_arguments(message: impl Display) -> anyhow::Error {
    anyhow::anyhow!("Invalid arguments: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_context_message() {
        let path = Path::new("/nonexistent/settings.json");
        let result = std::fs::read_to_string(path).with_file_context("read", path);
        let message = format!("{}", result.unwrap_err());
        assert_eq!(message, "Failed to read /nonexistent/settings.json");
    }
}
