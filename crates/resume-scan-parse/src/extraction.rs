//! Text extraction policy.
//!
//! The layout-aware backend is used when present, otherwise the general
//! engine. Selection looks at availability only: whatever the chosen backend
//! returns (even empty text) is final, and the other backend is never tried.

use std::path::Path;

use crate::backend::TextBackend;
use crate::capabilities::Backends;
use crate::error::{BackendError, ExtractError};

/// Text produced by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Name of the backend that produced the text.
    pub backend: &'static str,
    /// Concatenated page text.
    pub text: String,
}

impl Extraction {
    /// Whether the backend produced any non-whitespace text.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// The backend the policy picks from `backends`.
pub fn select_text_backend(backends: &Backends) -> Option<&dyn TextBackend> {
    backends.layout_text().or_else(|| backends.engine_text())
}

/// Extract the text of the PDF at `path`.
///
/// The file is read into memory and dropped before returning.
///
/// # Errors
///
/// Returns [`ExtractError::NoBackend`] if neither text backend is present,
/// and [`ExtractError::Backend`] if reading the file or the backend fails
/// (including a panic inside the backend library).
pub fn extract_text(path: &Path, backends: &Backends) -> Result<Extraction, ExtractError> {
    let backend = select_text_backend(backends).ok_or(ExtractError::NoBackend)?;
    let name = backend.name();
    tracing::debug!(backend = name, path = %path.display(), "extracting text");

    let wrap = |source: BackendError| ExtractError::Backend {
        backend: name,
        source,
    };

    let bytes = std::fs::read(path).map_err(|e| wrap(e.into()))?;
    let text = backend.extract_text(&bytes).map_err(wrap)?;

    tracing::debug!(backend = name, chars = text.len(), "extraction finished");
    Ok(Extraction {
        backend: name,
        text,
    })
}
