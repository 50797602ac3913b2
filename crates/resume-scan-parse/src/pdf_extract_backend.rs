//! Layout-aware text extraction backed by [pdf-extract](https://crates.io/crates/pdf-extract).
//!
//! pdf-extract positions glyphs on the page and emits spaces and line breaks
//! from their geometry, which keeps columns and lines of a resume roughly
//! intact. It is the preferred text backend.

use crate::backend::{TextBackend, guarded};
use crate::error::BackendError;

/// The pdf-extract text backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    /// Library name reported in diagnostics.
    pub const NAME: &'static str = "pdf-extract";
}

impl TextBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String, BackendError> {
        // pdf-extract panics on some malformed fonts and content streams.
        guarded(|| {
            pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| BackendError::Parse(e.to_string()))
        })
    }
}
