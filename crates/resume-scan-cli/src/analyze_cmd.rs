use std::io;

use resume_scan_core::analyze;
use resume_scan_parse::{
    Backends, ExportOptions, ProbeOptions, Requirements, export_pages, extract_text,
};

use crate::cli::Cli;
use crate::report::Report;
use crate::shared::ProgressReporter;

/// Run the probe, extraction, analysis, and export steps, announcing each
/// outcome to `report`.
///
/// Returns `Err(1)` for missing dependencies (or an unwritable report);
/// a missing input file, failed extraction, or failed export still return
/// `Ok(())`.
pub fn run(cli: &Cli, report: &mut dyn Report) -> Result<(), i32> {
    let backends = Backends::probe(&ProbeOptions {
        skip_raster: cli.no_images,
        pdfium_library: cli.pdfium_lib.clone(),
    });
    run_with(cli, &backends, report).map_err(|e| {
        eprintln!("Error writing report: {e}");
        1
    })?
}

fn run_with(cli: &Cli, backends: &Backends, report: &mut dyn Report) -> io::Result<Result<(), i32>> {
    let requirements = Requirements {
        raster: !cli.no_images,
    };
    let missing = backends.capabilities().missing(&requirements);
    if !missing.is_empty() {
        report.missing_dependencies(&missing)?;
        report.finish()?;
        return Ok(Err(1));
    }

    let file = cli.file.as_path();
    if !file.exists() {
        report.file_not_found(file)?;
        report.finish()?;
        return Ok(Ok(()));
    }

    report.start(file)?;

    match extract_text(file, backends) {
        Ok(extraction) if extraction.has_text() => {
            let analysis = analyze(&extraction.text);
            tracing::info!(
                backend = extraction.backend,
                words = analysis.stats.word_count,
                "analyzed text"
            );
            report.analysis(extraction.backend, &analysis)?;
        }
        Ok(extraction) => {
            tracing::info!(backend = extraction.backend, "backend returned no text");
            report.no_text(Some(extraction.backend))?;
        }
        Err(e) => {
            tracing::warn!("text extraction failed: {e}");
            report.extraction_error(&e)?;
            report.no_text(e.backend())?;
        }
    }

    if cli.no_images {
        report.images_disabled()?;
    } else {
        let options = ExportOptions {
            output_dir: cli.output_dir.clone(),
            dpi: cli.dpi,
        };
        let mut progress = ProgressReporter::new();
        let exported = export_pages(file, &options, backends.rasterizer(), &mut |page, total| {
            progress.report(page, total)
        });
        progress.finish();
        match exported {
            Ok(summary) => report.images_exported(&summary)?,
            Err(e) => {
                tracing::warn!("image export failed: {e}");
                report.images_failed(&e)?;
            }
        }
    }

    report.finish()?;
    Ok(Ok(()))
}
