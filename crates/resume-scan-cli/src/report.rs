//! Report rendering.
//!
//! The analysis run announces each outcome to a [`Report`]. [`TextReport`]
//! writes the human-readable report as it goes, diagnostics included, to one
//! writer (stdout). [`JsonReport`] keeps stdout for a single JSON object
//! written at the end and sends diagnostics to stderr.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use resume_scan_core::TextAnalysis;
use resume_scan_parse::{Dependency, ExportError, ExportSummary, ExtractError};

const HEADER_RULE: usize = 50;
const PREVIEW_RULE: usize = 30;

/// Receives the outcome of each pipeline step, in order.
pub trait Report {
    /// Required dependencies are missing; the run stops.
    fn missing_dependencies(&mut self, missing: &[Dependency]) -> io::Result<()>;

    /// The input file does not exist; the run stops.
    fn file_not_found(&mut self, path: &Path) -> io::Result<()>;

    /// Analysis of `path` starts.
    fn start(&mut self, path: &Path) -> io::Result<()>;

    /// The text backend failed.
    fn extraction_error(&mut self, err: &ExtractError) -> io::Result<()>;

    /// Text was extracted by `backend` and analyzed.
    fn analysis(&mut self, backend: &'static str, analysis: &TextAnalysis) -> io::Result<()>;

    /// No usable text was extracted. `backend` is the backend that was
    /// tried, if any.
    fn no_text(&mut self, backend: Option<&'static str>) -> io::Result<()>;

    /// Pages were exported.
    fn images_exported(&mut self, summary: &ExportSummary) -> io::Result<()>;

    /// Image export failed.
    fn images_failed(&mut self, err: &ExportError) -> io::Result<()>;

    /// Image export was turned off.
    fn images_disabled(&mut self) -> io::Result<()>;

    /// The run is over.
    fn finish(&mut self) -> io::Result<()>;
}

/// Human-readable report.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

/// Print a missing-dependency notice to `out`.
fn write_missing<W: Write>(out: &mut W, missing: &[Dependency]) -> io::Result<()> {
    let names: Vec<&str> = missing.iter().map(|d| d.name()).collect();
    writeln!(out, "Missing dependencies: {}", names.join(", "))?;
    for dep in missing {
        writeln!(out, "  {}: {}", dep.name(), dep.install_hint())?;
    }
    writeln!(out)?;
    writeln!(out, "To install all dependencies:")?;
    writeln!(out, "cargo install --path crates/resume-scan-cli --features layout-text,engine-text,raster")
}

fn write_extraction_error<W: Write>(out: &mut W, err: &ExtractError) -> io::Result<()> {
    match err {
        ExtractError::Backend { backend, source } => {
            writeln!(out, "Error extracting text with {backend}: {source}")
        }
        ExtractError::NoBackend => writeln!(out, "Error extracting text: {err}"),
    }
}

fn write_images_failed<W: Write>(out: &mut W, err: &ExportError) -> io::Result<()> {
    match err {
        ExportError::NoRasterizer => writeln!(out, "pdfium not available for image conversion"),
        _ => writeln!(out, "Error converting to images: {err}"),
    }
}

impl<W: Write> Report for TextReport<W> {
    fn missing_dependencies(&mut self, missing: &[Dependency]) -> io::Result<()> {
        write_missing(&mut self.out, missing)
    }

    fn file_not_found(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "File not found: {}", path.display())
    }

    fn start(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Analyzing resume: {}", path.display())?;
        writeln!(self.out, "{}", "-".repeat(HEADER_RULE))
    }

    fn extraction_error(&mut self, err: &ExtractError) -> io::Result<()> {
        write_extraction_error(&mut self.out, err)
    }

    fn analysis(&mut self, _backend: &'static str, analysis: &TextAnalysis) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "Text extraction successful!")?;
        writeln!(out, "Word count: {}", analysis.stats.word_count)?;
        writeln!(out, "Character count: {}", analysis.stats.char_count)?;
        writeln!(out, "Lines: {}", analysis.stats.line_count)?;
        writeln!(out)?;
        writeln!(out, "First 300 characters:")?;
        writeln!(out, "{}", "-".repeat(PREVIEW_RULE))?;
        writeln!(out, "{}", analysis.preview)?;
        writeln!(out, "{}", "-".repeat(PREVIEW_RULE))?;

        if !analysis.emails.is_empty() {
            writeln!(out)?;
            writeln!(out, "Potential emails found: {:?}", analysis.emails)?;
        }
        let phones = analysis.reported_phones();
        if !phones.is_empty() {
            writeln!(out, "Potential phone numbers found: {phones:?}")?;
        }
        if !analysis.skills.is_empty() {
            writeln!(out, "Technical skills detected: {:?}", analysis.skills)?;
        }
        Ok(())
    }

    fn no_text(&mut self, _backend: Option<&'static str>) -> io::Result<()> {
        writeln!(self.out, "Failed to extract text from PDF")
    }

    fn images_exported(&mut self, summary: &ExportSummary) -> io::Result<()> {
        writeln!(
            self.out,
            "Converted {} pages to images in {}/",
            summary.page_count(),
            summary.output_dir.display()
        )
    }

    fn images_failed(&mut self, err: &ExportError) -> io::Result<()> {
        write_images_failed(&mut self.out, err)
    }

    fn images_disabled(&mut self) -> io::Result<()> {
        writeln!(self.out, "Image export disabled")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Machine-readable report: one JSON object on `out`, diagnostics on `diag`.
pub struct JsonReport<W: Write, D: Write> {
    out: W,
    diag: D,
    file: Option<PathBuf>,
    backend: Option<&'static str>,
    analysis: Option<TextAnalysis>,
    images: Option<ExportSummary>,
}

impl<W: Write, D: Write> JsonReport<W, D> {
    pub fn new(out: W, diag: D) -> Self {
        Self {
            out,
            diag,
            file: None,
            backend: None,
            analysis: None,
            images: None,
        }
    }

    fn to_value(&self) -> serde_json::Value {
        let a = self.analysis.as_ref();
        serde_json::json!({
            "file": self.file.as_ref().map(|p| p.display().to_string()),
            "backend": self.backend,
            "extracted": a.is_some(),
            "stats": a.map(|a| a.stats),
            "preview": a.map(|a| a.preview.as_str()),
            "emails": a.map(|a| &a.emails),
            "phones": a.map(|a| a.reported_phones()),
            "skills": a.map(|a| &a.skills),
            "images": self.images.as_ref().map(|s| serde_json::json!({
                "output_dir": s.output_dir.display().to_string(),
                "pages": s.page_count(),
            })),
        })
    }

    #[cfg(test)]
    fn into_parts(self) -> (W, D) {
        (self.out, self.diag)
    }
}

impl<W: Write, D: Write> Report for JsonReport<W, D> {
    fn missing_dependencies(&mut self, missing: &[Dependency]) -> io::Result<()> {
        write_missing(&mut self.diag, missing)
    }

    fn file_not_found(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.diag, "File not found: {}", path.display())
    }

    fn start(&mut self, path: &Path) -> io::Result<()> {
        self.file = Some(path.to_path_buf());
        Ok(())
    }

    fn extraction_error(&mut self, err: &ExtractError) -> io::Result<()> {
        self.backend = err.backend();
        write_extraction_error(&mut self.diag, err)
    }

    fn analysis(&mut self, backend: &'static str, analysis: &TextAnalysis) -> io::Result<()> {
        self.backend = Some(backend);
        self.analysis = Some(analysis.clone());
        Ok(())
    }

    fn no_text(&mut self, backend: Option<&'static str>) -> io::Result<()> {
        self.backend = backend.or(self.backend);
        writeln!(self.diag, "Failed to extract text from PDF")
    }

    fn images_exported(&mut self, summary: &ExportSummary) -> io::Result<()> {
        self.images = Some(summary.clone());
        Ok(())
    }

    fn images_failed(&mut self, err: &ExportError) -> io::Result<()> {
        write_images_failed(&mut self.diag, err)
    }

    fn images_disabled(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        // Nothing to print when the run stopped before analysis started.
        if self.file.is_none() {
            return Ok(());
        }
        let value = self.to_value();
        serde_json::to_writer_pretty(&mut self.out, &value)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use resume_scan_core::analyze;
    use resume_scan_parse::BackendError;

    use super::*;

    const SAMPLE: &str = "John Doe\njohn@example.com\n1234567890\nSkills: Python, React";

    fn text_output(f: impl FnOnce(&mut TextReport<Vec<u8>>) -> io::Result<()>) -> String {
        let mut report = TextReport::new(Vec::new());
        f(&mut report).unwrap();
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn text_header() {
        let out = text_output(|r| r.start(Path::new("cv.pdf")));
        assert_eq!(out, format!("Analyzing resume: cv.pdf\n{}\n", "-".repeat(50)));
    }

    #[test]
    fn text_analysis_section() {
        let out = text_output(|r| r.analysis("pdf-extract", &analyze(SAMPLE)));
        assert!(out.starts_with("Text extraction successful!\nWord count: 7\n"));
        assert!(out.contains(&format!("Character count: {}\n", SAMPLE.len())));
        assert!(out.contains("Lines: 4\n"));
        assert!(out.contains(&format!(
            "First 300 characters:\n{rule}\n{SAMPLE}\n{rule}\n",
            rule = "-".repeat(30)
        )));
        assert!(out.contains("\nPotential emails found: [\"john@example.com\"]\n"));
        assert!(out.contains("Potential phone numbers found: [\"1234567890\"]\n"));
        assert!(out.contains("Technical skills detected: [\"Python\", \"React\"]\n"));
    }

    #[test]
    fn text_omits_empty_sections() {
        let out = text_output(|r| r.analysis("lopdf", &analyze("hello there")));
        assert!(!out.contains("Potential emails"));
        assert!(!out.contains("Potential phone"));
        assert!(!out.contains("Technical skills"));
    }

    #[test]
    fn text_reports_substring_skill_matches() {
        // "plain" contains "ai".
        let out = text_output(|r| r.analysis("lopdf", &analyze("plain words only")));
        assert!(out.contains("Technical skills detected: [\"AI\"]\n"));
    }

    #[test]
    fn text_caps_phone_list() {
        let out = text_output(|r| {
            r.analysis(
                "lopdf",
                &analyze("111111111 222222222 333333333 444444444"),
            )
        });
        assert!(out.contains(
            "Potential phone numbers found: [\"111111111\", \"222222222\", \"333333333\"]\n"
        ));
        assert!(!out.contains("444444444\"]"));
    }

    #[test]
    fn text_extraction_error_names_backend() {
        let err = ExtractError::Backend {
            backend: "pdf-extract",
            source: BackendError::Parse("bad xref".to_string()),
        };
        let out = text_output(|r| r.extraction_error(&err));
        assert_eq!(
            out,
            "Error extracting text with pdf-extract: PDF parse error: bad xref\n"
        );
    }

    #[test]
    fn text_image_outcomes() {
        let summary = ExportSummary {
            output_dir: PathBuf::from("resume_images"),
            files: vec![PathBuf::from("a"), PathBuf::from("b")],
        };
        let out = text_output(|r| r.images_exported(&summary));
        assert_eq!(out, "Converted 2 pages to images in resume_images/\n");

        let out = text_output(|r| r.images_failed(&ExportError::NoRasterizer));
        assert_eq!(out, "pdfium not available for image conversion\n");

        let err = ExportError::Backend(BackendError::Render("page 1: oom".to_string()));
        let out = text_output(|r| r.images_failed(&err));
        assert!(out.starts_with("Error converting to images: "));
    }

    #[test]
    fn text_missing_dependencies() {
        let out = text_output(|r| {
            r.missing_dependencies(&[Dependency::EngineText, Dependency::Rasterizer])
        });
        assert!(out.starts_with("Missing dependencies: lopdf, pdfium\n"));
        assert!(out.contains("To install all dependencies:"));
    }

    #[test]
    fn json_report_after_analysis() {
        let mut report = JsonReport::new(Vec::new(), Vec::new());
        report.start(Path::new("cv.pdf")).unwrap();
        report.analysis("pdf-extract", &analyze(SAMPLE)).unwrap();
        report.images_disabled().unwrap();
        report.finish().unwrap();
        let (out, diag) = report.into_parts();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["file"], "cv.pdf");
        assert_eq!(value["backend"], "pdf-extract");
        assert_eq!(value["extracted"], true);
        assert_eq!(value["stats"]["word_count"], 7);
        assert_eq!(value["emails"][0], "john@example.com");
        assert_eq!(value["skills"], serde_json::json!(["Python", "React"]));
        assert!(value["images"].is_null());
        assert!(diag.is_empty());
    }

    #[test]
    fn json_report_without_text() {
        let mut report = JsonReport::new(Vec::new(), Vec::new());
        report.start(Path::new("scan.pdf")).unwrap();
        report.no_text(Some("lopdf")).unwrap();
        report.finish().unwrap();
        let (out, diag) = report.into_parts();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["backend"], "lopdf");
        assert_eq!(value["extracted"], false);
        assert!(value["stats"].is_null());
        assert!(value["phones"].is_null());
        assert_eq!(
            String::from_utf8(diag).unwrap(),
            "Failed to extract text from PDF\n"
        );
    }

    #[test]
    fn json_report_names_failed_backend() {
        let err = ExtractError::Backend {
            backend: "pdf-extract",
            source: BackendError::Panicked("index out of bounds".to_string()),
        };
        let mut report = JsonReport::new(Vec::new(), Vec::new());
        report.start(Path::new("broken.pdf")).unwrap();
        report.extraction_error(&err).unwrap();
        report.no_text(err.backend()).unwrap();
        report.finish().unwrap();
        let (out, diag) = report.into_parts();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["backend"], "pdf-extract");
        assert_eq!(value["extracted"], false);
        assert!(String::from_utf8(diag)
            .unwrap()
            .starts_with("Error extracting text with pdf-extract: backend panicked"));
    }

    #[test]
    fn json_report_caps_phones() {
        let mut report = JsonReport::new(Vec::new(), Vec::new());
        report.start(Path::new("cv.pdf")).unwrap();
        report
            .analysis("lopdf", &analyze("111111111 222222222 333333333 444444444"))
            .unwrap();
        report.finish().unwrap();
        let (out, _) = report.into_parts();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["phones"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn json_report_prints_nothing_before_start() {
        let mut report = JsonReport::new(Vec::new(), Vec::new());
        report.file_not_found(Path::new("gone.pdf")).unwrap();
        report.finish().unwrap();
        let (out, diag) = report.into_parts();
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(diag).unwrap(), "File not found: gone.pdf\n");
    }
}
