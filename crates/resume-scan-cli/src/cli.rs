use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use resume_scan_parse::{DEFAULT_DPI, DEFAULT_OUTPUT_DIR};

/// Extract text from a resume PDF, report counts and naive contact/skill
/// matches, and render its pages to PNG.
#[derive(Debug, Parser)]
#[command(
    name = "resume-scan",
    about,
    version,
    after_help = "Example: resume-scan public/resume.pdf"
)]
pub struct Cli {
    /// Path to the PDF file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory for rendered page images
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Render resolution for page images
    #[arg(long, default_value_t = DEFAULT_DPI, value_parser = clap::value_parser!(u16).range(1..=1200))]
    pub dpi: u16,

    /// Skip image export (pdfium is then not required)
    #[arg(long)]
    pub no_images: bool,

    /// Path to the pdfium shared library
    #[arg(long, value_name = "PATH", env = "RESUME_SCAN_PDFIUM_LIB")]
    pub pdfium_lib: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report
    Text,
    /// Single JSON object
    Json,
}

/// Print a clap parse error and return the process exit code for it.
///
/// `--help` and `--version` exit 0; every usage error exits 1.
pub fn report_parse_error(err: &clap::Error) -> i32 {
    // Printing only fails if stdout/stderr is closed; the exit code still applies.
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => {
            eprintln!("Example: resume-scan public/resume.pdf");
            1
        }
    }
}
