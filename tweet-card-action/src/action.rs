//! GitHub Actions invocation boundary.
//!
//! Follows the runner's conventions: action inputs arrive as `INPUT_*`
//! environment variables, step outputs are appended to the file named by
//! `GITHUB_OUTPUT`, and failure is surfaced via an `::error::` workflow
//! command plus a non-zero exit code.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tweet_card::{CardContent, ValidationConfig, validate};

use crate::event;

/// Whether this process is running inside a GitHub Actions job.
#[must_use]
pub fn running_in_actions() -> bool {
    env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Resolved action inputs.
#[derive(Debug)]
struct Inputs {
    card_content: CardContent,
    fail_on_validation_error: bool,
}

/// Environment variable name the runner uses for an action input.
fn input_var(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

fn read_input(name: &str) -> Option<String> {
    env::var(input_var(name)).ok()
}

/// Boolean input parsing, matching the runner's `getBooleanInput`
/// contract: only YAML 1.2 "core schema" booleans are accepted.
fn parse_bool_input(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

fn read_inputs() -> anyhow::Result<Inputs> {
    let raw_card = read_input("cardContent").context("Input `cardContent` is not set")?;
    let card_content: CardContent =
        serde_json::from_str(&raw_card).context("Input `cardContent` is not valid JSON")?;

    let raw_flag =
        read_input("failOnValidationError").context("Input `failOnValidationError` is not set")?;
    let fail_on_validation_error = parse_bool_input(&raw_flag).with_context(|| {
        format!("Input `failOnValidationError` is not a boolean: `{raw_flag}`")
    })?;

    Ok(Inputs {
        card_content,
        fail_on_validation_error,
    })
}

/// Append one step output to the output file, using the runner's heredoc
/// format so multi-line values survive.
fn write_output(path: &Path, name: &str, value: &str) -> anyhow::Result<()> {
    // Fixed delimiter; reject values that could smuggle a terminator.
    let delimiter = "TWEET_CARD_EOF";
    anyhow::ensure!(
        !name.contains(delimiter) && !value.contains(delimiter),
        "Output value must not contain the delimiter `{delimiter}`"
    );
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open output file {}", path.display()))?;
    writeln!(file, "{name}<<{delimiter}")?;
    writeln!(file, "{value}")?;
    writeln!(file, "{delimiter}")?;
    Ok(())
}

fn set_output(name: &str, value: &str) -> anyhow::Result<()> {
    let path = env::var("GITHUB_OUTPUT").context("GITHUB_OUTPUT is not set")?;
    write_output(Path::new(&path), name, value)
}

/// Escape a message for use in a workflow command's data position.
fn escape_command_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Emit an `::error::` workflow command, marking the job annotation.
pub fn issue_error(message: &str) {
    println!("::error::{}", escape_command_data(message));
}

/// Run the action: gate on the event payload, validate the card, publish
/// the error list, and decide the exit status.
///
/// # Errors
///
/// Returns an error for tier-2 faults: unreadable payload, malformed
/// inputs, non-text card content, or an unwritable output file. The
/// caller reports these and fails the job.
pub fn run() -> anyhow::Result<ExitCode> {
    let payload = event::load_payload()?;
    if !event::has_card_issue(&payload) {
        println!("Not running on an event with an associated issue.");
        return Ok(ExitCode::SUCCESS);
    }

    let inputs = read_inputs()?;

    let mut config = ValidationConfig::default();
    config.strict = inputs.fail_on_validation_error;

    let report = validate(&inputs.card_content, &config)?;

    // Always published, even when empty, so downstream steps can consume it.
    let errors_json = serde_json::to_string(&report.errors)
        .context("Failed to serialize validation errors")?;
    set_output("validationErrors", &errors_json)?;

    if report.should_fail {
        eprintln!("Content validations failed");
        for error in &report.errors {
            eprintln!("  - {error}");
        }
        issue_error("Content validations failed");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
