//! Error types for document rendering.

use std::path::PathBuf;

use termcard_config::ConfigError;
use thiserror::Error;

/// Errors that can occur while rendering or writing a card.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The layout configuration was rejected.
    #[error(transparent)]
    Layout(#[from] ConfigError),

    /// Writing a document failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination of the document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_names_path() {
        let err = RenderError::Write {
            path: PathBuf::from("out/dark.svg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write out/dark.svg: denied");
    }

    #[test]
    fn layout_error_is_transparent() {
        let err: RenderError = ConfigError::InvalidLayout {
            reason: "min_dots must be at least 1".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "invalid layout: min_dots must be at least 1");
    }
}
