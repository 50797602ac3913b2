//! End-to-end runs of `resume-scan` against PDFs built with lopdf.
//!
//! Every test except the dependency check passes `--no-images`, so the
//! pdfium library is never bound.

use assert_cmd::Command;
use predicates::prelude::*;
use resume_scan_parse::test_pdf::pdf_with_lines;
use std::io::Write;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("resume-scan").unwrap();
    cmd.env_remove("RESUME_SCAN_PDFIUM_LIB").env_remove("RUST_LOG");
    cmd
}

/// Write PDF bytes to a temporary file and return it (kept alive by the caller).
fn write_temp_pdf(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}

fn sample_resume() -> tempfile::NamedTempFile {
    write_temp_pdf(&pdf_with_lines(&[
        "John Doe",
        "john@example.com",
        "1234567890",
        "Skills: Python, React",
    ])
    .unwrap())
}

#[test]
fn sample_resume_text_report() {
    let pdf = sample_resume();
    cmd()
        .arg(pdf.path())
        .arg("--no-images")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "Analyzing resume: {}\n",
            pdf.path().display()
        )))
        .stdout(predicate::str::contains("Text extraction successful!"))
        .stdout(predicate::str::contains("First 300 characters:"))
        .stdout(predicate::str::contains("john@example.com"))
        .stdout(predicate::str::contains("\"Python\""))
        .stdout(predicate::str::contains("\"React\""))
        .stdout(predicate::str::contains("\"Java\"").not())
        .stdout(predicate::str::contains("Image export disabled"));
}

#[test]
fn missing_file_is_reported_without_failure() {
    cmd()
        .args(["/nonexistent/resume.pdf", "--no-images"])
        .assert()
        .success()
        .stdout("File not found: /nonexistent/resume.pdf\n");
}

#[test]
fn page_without_text_reports_failure() {
    let pdf = write_temp_pdf(&pdf_with_lines(&[]).unwrap());
    cmd()
        .arg(pdf.path())
        .arg("--no-images")
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to extract text from PDF"))
        .stdout(predicate::str::contains("Word count").not());
}

#[test]
fn json_report_names_backend_without_text() {
    let pdf = write_temp_pdf(&pdf_with_lines(&[]).unwrap());
    let output = cmd()
        .arg(pdf.path())
        .args(["--no-images", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["extracted"], false);
    assert_eq!(value["backend"], "pdf-extract");
    assert!(value["stats"].is_null());
}

#[test]
fn phone_list_is_capped_at_three() {
    let pdf = write_temp_pdf(&pdf_with_lines(&[
        "555-000-0001",
        "555-000-0002",
        "555-000-0003",
        "555-000-0004",
    ])
    .unwrap());
    cmd()
        .arg(pdf.path())
        .arg("--no-images")
        .assert()
        .success()
        .stdout(predicate::str::contains("555-000-0003"))
        .stdout(predicate::str::contains("Potential phone numbers found: ["))
        .stdout(
            predicate::str::is_match(r#"Potential phone numbers found: \[[^\]]*555-000-0004"#)
                .unwrap()
                .not(),
        );
}

#[test]
fn json_report_is_parseable() {
    let pdf = sample_resume();
    let output = cmd()
        .arg(pdf.path())
        .args(["--no-images", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["extracted"], true);
    assert_eq!(value["backend"], "pdf-extract");
    assert_eq!(value["emails"], serde_json::json!(["john@example.com"]));
    assert_eq!(value["skills"], serde_json::json!(["Python", "React"]));
    assert!(value["images"].is_null());
}

#[test]
fn missing_pdfium_stops_before_file_check() {
    cmd()
        .args([
            "/nonexistent/resume.pdf",
            "--pdfium-lib",
            "/nonexistent/libpdfium.so",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Missing dependencies: pdfium\n"))
        .stdout(predicate::str::contains("To install all dependencies:"))
        .stdout(predicate::str::contains("File not found").not());
}

#[test]
fn repeated_runs_are_identical() {
    let pdf = sample_resume();
    let first = cmd().arg(pdf.path()).arg("--no-images").output().unwrap();
    let second = cmd().arg(pdf.path()).arg("--no-images").output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
