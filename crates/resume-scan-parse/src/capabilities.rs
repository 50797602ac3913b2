//! Startup probe of the optional backends.
//!
//! The two text backends are present when their cargo feature is compiled in.
//! The rasterizer additionally needs the pdfium shared library at runtime, so
//! probing it means binding it. The result is a [`Backends`] value that is
//! built once and passed to the extraction and export steps.

use std::fmt;
use std::path::PathBuf;

use crate::backend::{PageRasterizer, TextBackend};

/// One of the three optional backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// Layout-aware text extraction (pdf-extract).
    LayoutText,
    /// General-engine text extraction (lopdf).
    EngineText,
    /// Page rasterization (pdfium).
    Rasterizer,
}

impl Dependency {
    /// Library name shown to the user.
    pub fn name(self) -> &'static str {
        match self {
            Dependency::LayoutText => "pdf-extract",
            Dependency::EngineText => "lopdf",
            Dependency::Rasterizer => "pdfium",
        }
    }

    /// How to make this dependency available.
    pub fn install_hint(self) -> &'static str {
        match self {
            Dependency::LayoutText => "rebuild with `--features layout-text`",
            Dependency::EngineText => "rebuild with `--features engine-text`",
            Dependency::Rasterizer => {
                "build with `--features raster` and install the pdfium shared library \
                 (https://github.com/bblanchon/pdfium-binaries), or point --pdfium-lib at it"
            }
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which dependencies a run needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    /// Whether the rasterizer is required (image export enabled).
    pub raster: bool,
}

impl Default for Requirements {
    fn default() -> Self {
        Self { raster: true }
    }
}

/// Presence flag per backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// pdf-extract is compiled in.
    pub layout_text: bool,
    /// lopdf is compiled in.
    pub engine_text: bool,
    /// pdfium is compiled in and its library was bound.
    pub raster: bool,
}

impl Capabilities {
    /// Required dependencies that are absent, in probe order.
    pub fn missing(&self, requirements: &Requirements) -> Vec<Dependency> {
        let mut missing = Vec::new();
        if !self.layout_text {
            missing.push(Dependency::LayoutText);
        }
        if !self.engine_text {
            missing.push(Dependency::EngineText);
        }
        if requirements.raster && !self.raster {
            missing.push(Dependency::Rasterizer);
        }
        missing
    }

    /// Whether every required dependency is present.
    pub fn all_present(&self, requirements: &Requirements) -> bool {
        self.missing(requirements).is_empty()
    }
}

/// Options for [`Backends::probe`].
#[derive(Debug, Clone, Default)]
pub struct ProbeOptions {
    /// Skip binding pdfium entirely.
    pub skip_raster: bool,
    /// Explicit pdfium library file.
    pub pdfium_library: Option<PathBuf>,
}

/// The backends found at startup.
#[derive(Default)]
pub struct Backends {
    layout_text: Option<Box<dyn TextBackend>>,
    engine_text: Option<Box<dyn TextBackend>>,
    rasterizer: Option<Box<dyn PageRasterizer>>,
}

impl fmt::Debug for Backends {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backends")
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

impl Backends {
    /// Probe every backend compiled into this build.
    pub fn probe(options: &ProbeOptions) -> Self {
        let backends = Self {
            layout_text: probe_layout_text(),
            engine_text: probe_engine_text(),
            rasterizer: if options.skip_raster {
                None
            } else {
                probe_rasterizer(options)
            },
        };
        tracing::debug!(capabilities = ?backends.capabilities(), "probed backends");
        backends
    }

    /// Assemble a set of backends directly.
    pub fn from_parts(
        layout_text: Option<Box<dyn TextBackend>>,
        engine_text: Option<Box<dyn TextBackend>>,
        rasterizer: Option<Box<dyn PageRasterizer>>,
    ) -> Self {
        Self {
            layout_text,
            engine_text,
            rasterizer,
        }
    }

    /// Presence flags for the probed backends.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            layout_text: self.layout_text.is_some(),
            engine_text: self.engine_text.is_some(),
            raster: self.rasterizer.is_some(),
        }
    }

    /// The layout-aware text backend, if present.
    pub fn layout_text(&self) -> Option<&dyn TextBackend> {
        self.layout_text.as_deref()
    }

    /// The general-engine text backend, if present.
    pub fn engine_text(&self) -> Option<&dyn TextBackend> {
        self.engine_text.as_deref()
    }

    /// The rasterizer, if present.
    pub fn rasterizer(&self) -> Option<&dyn PageRasterizer> {
        self.rasterizer.as_deref()
    }
}

#[cfg(feature = "layout-text")]
fn probe_layout_text() -> Option<Box<dyn TextBackend>> {
    Some(Box::new(crate::pdf_extract_backend::PdfExtractBackend))
}

#[cfg(not(feature = "layout-text"))]
fn probe_layout_text() -> Option<Box<dyn TextBackend>> {
    None
}

#[cfg(feature = "engine-text")]
fn probe_engine_text() -> Option<Box<dyn TextBackend>> {
    Some(Box::new(crate::lopdf_backend::LopdfBackend))
}

#[cfg(not(feature = "engine-text"))]
fn probe_engine_text() -> Option<Box<dyn TextBackend>> {
    None
}

#[cfg(feature = "raster")]
fn probe_rasterizer(options: &ProbeOptions) -> Option<Box<dyn PageRasterizer>> {
    use crate::pdfium_backend::PdfiumRasterizer;

    match PdfiumRasterizer::bind(options.pdfium_library.as_deref()) {
        Ok(rasterizer) => Some(Box::new(rasterizer)),
        Err(e) => {
            tracing::warn!("pdfium unavailable: {e}");
            None
        }
    }
}

#[cfg(not(feature = "raster"))]
fn probe_rasterizer(_options: &ProbeOptions) -> Option<Box<dyn PageRasterizer>> {
    None
}
