//! Backend traits.
//!
//! [`TextBackend`] turns PDF bytes into plain text and [`PageRasterizer`]
//! renders pages to PNG. Both are object-safe so the probed set of backends
//! can be held as trait objects in [`Backends`](crate::Backends).
//!
//! Calls into backend libraries go through [`guarded`], which turns a panic
//! into [`BackendError::Panicked`]. While a guarded call runs, the panic hook
//! logs the panic at debug level instead of printing it to stderr.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe, catch_unwind};
use std::path::Path;
use std::sync::Once;

use crate::error::BackendError;

/// A library capability that converts PDF page content into plain text.
pub trait TextBackend {
    /// Short name used in diagnostics (the library name).
    fn name(&self) -> &'static str;

    /// Extract the text of every page, concatenated in page order.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a readable PDF.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, BackendError>;
}

/// Receives rendered pages from a [`PageRasterizer`].
pub trait PageSink {
    /// Called once with the number of pages before any page is delivered.
    fn begin(&mut self, page_count: usize);

    /// Called for each page in order with its PNG encoding.
    ///
    /// # Errors
    ///
    /// An error stops rendering and is returned from
    /// [`PageRasterizer::render_pages`].
    fn page(&mut self, index: usize, png: &[u8]) -> Result<(), BackendError>;
}

/// A library capability that converts PDF pages into raster images.
pub trait PageRasterizer {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Render every page of the PDF at `pdf_path` at `dpi`, delivering each
    /// page to `sink`. Returns the number of pages rendered.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded, a page cannot be
    /// rendered or encoded, or the sink rejects a page.
    fn render_pages(
        &self,
        pdf_path: &Path,
        dpi: u16,
        sink: &mut dyn PageSink,
    ) -> Result<usize, BackendError>;
}

thread_local! {
    static IN_GUARD: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wrap the current panic hook so that panics on a thread inside [`guarded`]
/// are logged instead of printed. Other panics reach the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if IN_GUARD.with(Cell::get) {
                tracing::debug!("backend panicked: {info}");
            } else {
                previous(info);
            }
        }));
    });
}

/// Run a backend call, turning a panic inside the library into
/// [`BackendError::Panicked`].
pub(crate) fn guarded<T>(f: impl FnOnce() -> Result<T, BackendError>) -> Result<T, BackendError> {
    install_quiet_hook();
    let outer = IN_GUARD.with(|g| g.replace(true));
    let result = catch_unwind(AssertUnwindSafe(f));
    IN_GUARD.with(|g| g.set(outer));

    result.unwrap_or_else(|payload| Err(BackendError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
