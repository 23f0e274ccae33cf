//! Error types for treeviz

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treeviz operations
pub type Result<T> = std::result::Result<T, TreevizError>;

/// Main error type for treeviz operations
#[derive(Error, Debug)]
pub enum TreevizError {
    /// Root path does not exist
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An output file could not be written
    #[error("cannot write '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Graphviz layout or rasterization failed
    #[error("graph rendering failed: {0}")]
    RenderFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_path_not_found() {
        let err = TreevizError::PathNotFound(PathBuf::from("/does/not/exist"));
        assert_eq!(err.to_string(), "path not found: /does/not/exist");
    }

    #[test]
    fn test_error_display_write_failed() {
        let err = TreevizError::WriteFailed {
            path: PathBuf::from("out/tree.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "cannot write 'out/tree.json': denied");
    }

    #[test]
    fn test_error_display_render_failed() {
        let err = TreevizError::RenderFailed("dot not found".to_string());
        assert_eq!(err.to_string(), "graph rendering failed: dot not found");
    }
}
