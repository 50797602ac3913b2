//! Error types for the backend layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. [`BackendError`] wraps
//! whatever a backend library reports; [`ExtractError`] and [`ExportError`]
//! are what the two guarded pipeline steps hand back to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for PDF backend operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from PDF parsing (structure, syntax, object resolution).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading PDF data or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error rasterizing or encoding a page image.
    #[error("render error: {0}")]
    Render(String),

    /// The backend library (or its native part) cannot be used.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend library panicked; the payload message is kept.
    #[error("backend panicked: {0}")]
    Panicked(String),
}

/// Failure of the text extraction step.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No text backend is compiled in.
    #[error("no text extraction backend available")]
    NoBackend,

    /// The selected backend failed.
    #[error("{backend}: {source}")]
    Backend {
        /// Name of the backend that was used.
        backend: &'static str,
        /// What went wrong inside it.
        #[source]
        source: BackendError,
    },
}

impl ExtractError {
    /// Name of the backend that failed, if one was selected.
    pub fn backend(&self) -> Option<&'static str> {
        match self {
            ExtractError::Backend { backend, .. } => Some(*backend),
            ExtractError::NoBackend => None,
        }
    }
}

/// Failure of the image export step.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No rasterizer was probed successfully.
    #[error("no rasterizer available")]
    NoRasterizer,

    /// The output directory could not be created.
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rasterizer failed on the document or a page.
    #[error(transparent)]
    Backend(#[from] BackendError),
}
