//! General-engine text extraction backed by [lopdf](https://crates.io/crates/lopdf).
//!
//! Pages are visited in page-tree order and their text is appended with no
//! marker in between, so a word split across a page break is glued to its
//! neighbour.

use crate::backend::{TextBackend, guarded};
use crate::error::BackendError;

/// The lopdf text backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    /// Library name reported in diagnostics.
    pub const NAME: &'static str = "lopdf";
}

impl TextBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String, BackendError> {
        guarded(|| {
            let doc = lopdf::Document::load_mem(bytes)
                .map_err(|e| BackendError::Parse(e.to_string()))?;

            let mut text = String::new();
            // get_pages() is keyed by 1-based page number, so iteration is in page order.
            for page_number in doc.get_pages().keys() {
                let page_text = doc
                    .extract_text(&[*page_number])
                    .map_err(|e| BackendError::Parse(format!("page {page_number}: {e}")))?;
                tracing::trace!(page = page_number, chars = page_text.len(), "lopdf page text");
                text.push_str(&page_text);
            }
            Ok(text)
        })
    }
}
