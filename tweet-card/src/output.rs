//! Shared output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters for `ValidationReport`.
//! Color/terminal formatting is intentionally excluded from this core module —
//! that concern belongs to the CLI layer.

use std::io::Write;

use crate::report::ValidationReport;

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as human-readable plain text to a writer.
///
/// Color/ANSI formatting is the responsibility of the caller (CLI layer).
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  TWEET CARD VALIDATOR")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Errors found:   {}", report.errors_count())?;
    writeln!(writer)?;

    if !report.errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  VALIDATION ERRORS")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for error in &report.errors {
            writeln!(writer, "  - {error}")?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok() {
        writeln!(writer, "\u{2713} Card content passed validation")?;
    } else {
        writeln!(
            writer,
            "\u{2717} {} validation error(s) found",
            report.errors_count()
        )?;
        writeln!(writer)?;
        writeln!(writer, "  To fix:")?;

        let has_description_error = report.errors.iter().any(|e| e.contains("description"));
        let has_url_error = report
            .errors
            .iter()
            .any(|e| e.contains("reply") || e.contains("Retweets"));
        let has_length_error = report.errors.iter().any(|e| e.contains("too long"));

        if has_description_error {
            writeln!(
                writer,
                "    - Add a description section to the issue body"
            )?;
        }
        if has_url_error {
            writeln!(
                writer,
                "    - Reply/retweet sections take exactly one tweet URL"
            )?;
            writeln!(
                writer,
                "      (https://twitter.com/<user>/status/<id>)"
            )?;
        }
        if has_length_error {
            writeln!(
                writer,
                "    - Shorten the tweet; CJK and emoji count double"
            )?;
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
