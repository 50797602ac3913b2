//! Rasterize every page of a PDF into a directory of PNG files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::{PageRasterizer, PageSink};
use crate::error::{BackendError, ExportError};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "resume_images";

/// Default render resolution.
pub const DEFAULT_DPI: u16 = 200;

/// Where and how pages are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Directory the PNG files are written to. Created if missing.
    pub output_dir: PathBuf,
    /// Render resolution in dots per inch.
    pub dpi: u16,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dpi: DEFAULT_DPI,
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Directory the files were written to.
    pub output_dir: PathBuf,
    /// Written files, in page order.
    pub files: Vec<PathBuf>,
}

impl ExportSummary {
    /// Number of pages converted.
    pub fn page_count(&self) -> usize {
        self.files.len()
    }
}

/// File name for 0-based page `index` of a document with file stem `stem`.
pub fn page_file_name(stem: &str, index: usize) -> String {
    format!("{stem}_page{}.png", index + 1)
}

/// Writes each delivered page to `<dir>/<stem>_page<N>.png`.
struct PngDirectoryWriter<'a, 'p> {
    dir: &'a Path,
    stem: String,
    files: Vec<PathBuf>,
    progress: &'p mut dyn FnMut(usize, usize),
    total: usize,
}

impl PageSink for PngDirectoryWriter<'_, '_> {
    fn begin(&mut self, page_count: usize) {
        self.total = page_count;
        self.files.reserve(page_count);
    }

    fn page(&mut self, index: usize, png: &[u8]) -> Result<(), BackendError> {
        (self.progress)(index + 1, self.total);
        let path = self.dir.join(page_file_name(&self.stem, index));
        fs::write(&path, png)?;
        self.files.push(path);
        Ok(())
    }
}

/// Render every page of `pdf_path` into `options.output_dir`.
///
/// `progress` is called with `(page, total)` (1-based page) before each page
/// is written. Existing files with the same names are overwritten.
///
/// # Errors
///
/// Returns [`ExportError::NoRasterizer`] if `rasterizer` is `None`,
/// [`ExportError::CreateDir`] if the directory cannot be created, and
/// [`ExportError::Backend`] if rendering or writing fails.
pub fn export_pages(
    pdf_path: &Path,
    options: &ExportOptions,
    rasterizer: Option<&dyn PageRasterizer>,
    progress: &mut dyn FnMut(usize, usize),
) -> Result<ExportSummary, ExportError> {
    let rasterizer = rasterizer.ok_or(ExportError::NoRasterizer)?;
    let dir = options.output_dir.as_path();

    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let stem = pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    let mut writer = PngDirectoryWriter {
        dir,
        stem,
        files: Vec::new(),
        progress,
        total: 0,
    };

    tracing::debug!(
        rasterizer = rasterizer.name(),
        dpi = options.dpi,
        dir = %dir.display(),
        "exporting pages"
    );
    rasterizer.render_pages(pdf_path, options.dpi, &mut writer)?;

    Ok(ExportSummary {
        output_dir: dir.to_path_buf(),
        files: writer.files,
    })
}
