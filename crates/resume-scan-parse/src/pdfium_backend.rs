//! Page rasterization backed by [pdfium-render](https://crates.io/crates/pdfium-render).
//!
//! pdfium-render is a binding to Google's pdfium, which is loaded as a shared
//! library at runtime. Binding is the availability probe: a build with the
//! `raster` feature but no pdfium library on the machine has no rasterizer.

use std::io::Cursor;
use std::path::Path;

use pdfium_render::prelude::*;

use crate::backend::{PageRasterizer, PageSink, guarded};
use crate::error::BackendError;

/// Directory searched for the platform pdfium library before the system paths.
const LOCAL_LIBRARY_DIR: &str = "./";

/// PDF user space units per inch.
const POINTS_PER_INCH: f32 = 72.0;

/// A rasterizer bound to a pdfium shared library.
pub struct PdfiumRasterizer {
    pdfium: Pdfium,
}

impl std::fmt::Debug for PdfiumRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfiumRasterizer").finish_non_exhaustive()
    }
}

impl PdfiumRasterizer {
    /// Library name reported in diagnostics.
    pub const NAME: &'static str = "pdfium";

    /// Bind to pdfium.
    ///
    /// With `library` set, only that file is tried. Otherwise the platform
    /// library name in the current directory is tried first, then the
    /// system library search path.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Unavailable`] if no pdfium library can be loaded.
    pub fn bind(library: Option<&Path>) -> Result<Self, BackendError> {
        let bindings = match library {
            Some(path) => Pdfium::bind_to_library(path.to_string_lossy().to_string()),
            None => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                LOCAL_LIBRARY_DIR,
            ))
            .or_else(|_| Pdfium::bind_to_system_library()),
        }
        .map_err(|e| BackendError::Unavailable(format!("cannot load pdfium library: {e}")))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl PageRasterizer for PdfiumRasterizer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn render_pages(
        &self,
        pdf_path: &Path,
        dpi: u16,
        sink: &mut dyn PageSink,
    ) -> Result<usize, BackendError> {
        guarded(|| {
            let path = pdf_path.to_string_lossy().to_string();
            let document = self
                .pdfium
                .load_pdf_from_file(&path, None)
                .map_err(|e| BackendError::Parse(e.to_string()))?;

            let config =
                PdfRenderConfig::new().scale_page_by_factor(f32::from(dpi) / POINTS_PER_INCH);

            let pages = document.pages();
            let page_count = pages.len() as usize;
            sink.begin(page_count);

            let mut rendered = 0;
            for (index, page) in pages.iter().enumerate() {
                let image = page
                    .render_with_config(&config)
                    .map_err(|e| BackendError::Render(format!("page {}: {e}", index + 1)))?
                    .as_image();

                let mut png = Vec::new();
                image
                    .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
                    .map_err(|e| BackendError::Render(format!("page {}: {e}", index + 1)))?;

                tracing::debug!(page = index + 1, bytes = png.len(), "rendered page");
                sink.page(index, &png)?;
                rendered += 1;
            }
            Ok(rendered)
        })
    }
}
