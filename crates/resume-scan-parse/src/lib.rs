//! resume-scan-parse: PDF backends for resume-scan.
//!
//! This crate wraps the third-party libraries that do the real PDF work
//! behind two small traits, probes which of them are usable at startup, and
//! implements the two guarded pipeline steps built on them:
//!
//! - [`extraction::extract_text`]: layout-aware text (pdf-extract) if
//!   present, otherwise general-engine text (lopdf).
//! - [`export::export_pages`]: render every page to PNG (pdfium).
//!
//! Each backend is behind a cargo feature (`layout-text`, `engine-text`,
//! `raster`), all enabled by default. The `test-pdf` feature exposes the
//! lopdf PDF builders in `test_pdf` for integration tests.

pub mod backend;
pub mod capabilities;
pub mod error;
pub mod export;
pub mod extraction;

#[cfg(feature = "engine-text")]
pub mod lopdf_backend;
#[cfg(feature = "layout-text")]
pub mod pdf_extract_backend;
#[cfg(feature = "raster")]
pub mod pdfium_backend;

#[cfg(any(test, feature = "test-pdf"))]
pub mod test_pdf;

pub use backend::{PageRasterizer, PageSink, TextBackend};
pub use capabilities::{Backends, Capabilities, Dependency, ProbeOptions, Requirements};
pub use error::{BackendError, ExportError, ExtractError};
pub use export::{DEFAULT_DPI, DEFAULT_OUTPUT_DIR, ExportOptions, ExportSummary, export_pages};
pub use extraction::{Extraction, extract_text, select_text_backend};
