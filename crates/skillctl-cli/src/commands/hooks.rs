use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use skillctl_hooks::{HooksReport, validate_file};

/// Validate a settings file and print the result. Exit status is the verdict.
pub(crate) fn cmd_validate(file: &Path, json: bool) -> skillctl_core::Result<ExitCode> {
    let report = validate_file(file);
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    if json {
        write_json(&mut stdout, file, &report)?;
    } else {
        write_report(&mut stdout, &mut stderr, file, &report)?;
    }

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Human-readable verdict: success to `out`, failures to `err`.
///
/// Multi-line messages (regex errors) are indented under their bullet.
pub(crate) fn write_report(
    out: &mut dyn Write,
    err: &mut dyn Write,
    file: &Path,
    report: &HooksReport,
) -> std::io::Result<()> {
    if report.is_valid() {
        writeln!(out, "✓ Valid hooks configuration: {}", file.display())?;
        return Ok(());
    }

    writeln!(err, "✗ Invalid hooks configuration: {}", file.display())?;
    for issue in &report.issues {
        let text = issue.to_string().replace('\n', "\n    ");
        writeln!(err, "  - {text}")?;
    }
    Ok(())
}

/// Machine-readable verdict on `out`.
pub(crate) fn write_json(out: &mut dyn Write, file: &Path, report: &HooksReport) -> skillctl_core::Result<()> {
    let doc = serde_json::json!({
        "file": file.display().to_string(),
        "valid": report.is_valid(),
        "issues": report.issues,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}
