//! Integration tests for the pdfsmith CLI
//!
//! Tests command-line interface functionality including:
//! - Command parsing and validation
//! - PDF creation with metadata and page options
//! - Error handling for bad arguments and unwritable paths

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

/// Test helper to create a temporary directory
fn setup_temp_dir() -> TempDir {
    tempdir().expect("Failed to create temp directory")
}

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pdfsmith"))
}

/// Test helper to run CLI command and return output
fn run_cli_command(args: &[&str]) -> Result<Output> {
    let output = cli().args(args).output()?;
    Ok(output)
}

/// Test helper to check that a PDF file exists and is framed correctly
fn assert_pdf_exists_and_valid(path: &Path) -> Vec<u8> {
    assert!(path.exists(), "PDF file should exist: {}", path.display());
    let content = fs::read(path).expect("Failed to read PDF file");
    assert!(
        content.len() > 100,
        "PDF file should have content (> 100 bytes)"
    );
    assert!(
        content.starts_with(b"%PDF-1.4\n"),
        "File should start with PDF header"
    );
    assert!(content.ends_with(b"%%EOF\n"), "File should end with %%EOF");
    content
}

#[test]
fn test_cli_create_command() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("test_create.pdf");

    let output = run_cli_command(&[
        "create",
        "-o",
        output_path.to_str().unwrap(),
        "-t",
        "Hello, World!",
    ])
    .expect("CLI command should succeed");

    assert!(output.status.success(), "Command should succeed");
    assert_pdf_exists_and_valid(&output_path);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("PDF created successfully"),
        "Should show success message"
    );
}

#[test]
fn test_cli_create_with_metadata_uncompressed() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("test_meta.pdf");

    let output = run_cli_command(&[
        "create",
        "-o",
        output_path.to_str().unwrap(),
        "-t",
        "Line 1\nLine 2\nLine 3",
        "--title",
        "Quarterly Report",
        "--author",
        "Finance",
        "--no-compress",
        "--page-size",
        "letter",
    ])
    .expect("CLI command should succeed");
    assert!(output.status.success(), "Command should succeed");

    let content = assert_pdf_exists_and_valid(&output_path);
    let text = String::from_utf8_lossy(&content);
    assert!(text.contains("/Title (Quarterly Report)"));
    assert!(text.contains("/Author (Finance)"));
    assert!(text.contains("(Line 3) Tj"));
    assert!(text.contains("/MediaBox [ 0 0 612 792 ]"));
    assert!(!text.contains("/FlateDecode"));
}

#[test]
fn test_cli_demo_command() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("test_demo.pdf");

    let output = run_cli_command(&["demo", "-o", output_path.to_str().unwrap()])
        .expect("CLI command should succeed");

    assert!(output.status.success(), "Command should succeed");
    let content = assert_pdf_exists_and_valid(&output_path);
    let text = String::from_utf8_lossy(&content);
    assert!(text.contains("/Count 2"));
    assert!(text.contains("/BaseFont /ZapfDingbats"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Demo PDF created successfully"),
        "Should show success message"
    );
}

#[test]
fn test_cli_demo_command_default_output() {
    let temp_dir = setup_temp_dir();

    let output = cli()
        .arg("demo")
        .current_dir(temp_dir.path())
        .output()
        .expect("CLI command should succeed");

    assert!(output.status.success(), "Command should succeed");
    assert_pdf_exists_and_valid(&temp_dir.path().join("demo.pdf"));
}

#[test]
fn test_cli_create_into_missing_directory_fails() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("missing").join("out.pdf");

    let output = run_cli_command(&[
        "create",
        "-o",
        output_path.to_str().unwrap(),
        "-t",
        "nowhere",
    ])
    .expect("Command should run");

    assert!(!output.status.success(), "Command should fail");
    assert!(!output_path.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to write"), "Should name the failing path");
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("verbose.pdf");

    let output = cli()
        .args(["-v", "create", "-o", output_path.to_str().unwrap(), "-t", "x"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Command should run");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("writing document"), "Should emit debug logs");
}

#[test]
fn test_cli_help_command() {
    let output = run_cli_command(&["--help"]).expect("Help command should work");

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pdfsmith"), "Should show program name");
    assert!(
        stdout.contains("Commands"),
        "Should show available commands"
    );
    assert!(stdout.contains("create"), "Should list create command");
    assert!(stdout.contains("demo"), "Should list demo command");
}

#[test]
fn test_cli_version_command() {
    let output = run_cli_command(&["--version"]).expect("Version command should work");

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pdfsmith"), "Should show program name");
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Should show version number"
    );
}

#[test]
fn test_cli_invalid_command() {
    let output = run_cli_command(&["invalid-command"]).expect("Command should run");

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("unrecognized"),
        "Should show error for invalid command"
    );
}

#[test]
fn test_cli_missing_required_arguments() {
    let output = run_cli_command(&["create"]).expect("Command should run");

    assert!(
        !output.status.success(),
        "Command should fail without required args"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("required") || stderr.contains("missing"),
        "Should show missing argument error"
    );
}

#[test]
fn test_cli_rejects_unknown_page_size() {
    let output = run_cli_command(&["create", "-o", "x.pdf", "-t", "x", "--page-size", "a0"])
        .expect("Command should run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"));
}
