//! Error types for the renderer boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for boundary operations.
pub type Result<T> = std::result::Result<T, FfiError>;

/// Errors that can occur before control is handed to the renderer.
#[derive(Error, Debug)]
pub enum FfiError {
    /// No candidate location yielded a loadable renderer library.
    #[error("failed to load renderer library ({})", describe_attempts(.attempts))]
    LibraryLoad {
        attempts: Vec<(PathBuf, String)>,
    },

    /// The library loaded but does not export the entry point.
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// A forwarded argument cannot be represented as a C string.
    #[error("{field} contains a NUL byte at offset {position}")]
    InteriorNul {
        field: &'static str,
        position: usize,
    },
}

fn describe_attempts(attempts: &[(PathBuf, String)]) -> String {
    if attempts.is_empty() {
        return "no candidates".to_string();
    }
    attempts
        .iter()
        .map(|(path, reason)| format!("{}: {}", path.display(), reason))
        .collect::<Vec<_>>()
        .join("; ")
}
