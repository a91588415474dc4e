//! Local CLI mode.
//!
//! Outside of a GitHub Actions job the binary doubles as a small
//! command-line validator, so card payloads can be checked while drafting
//! an issue or debugging the parser.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tweet_card::{CardContent, ValidationConfig, output, validate};

#[derive(Debug, Parser)]
#[command(
    name = "tweet-card-action",
    about = "Validate issue-driven tweet card content",
    version
)]
struct Cli {
    /// Path to the JSON-encoded card content, or `-` to read stdin.
    #[arg(long, value_name = "PATH")]
    card_content: PathBuf,

    /// Exit non-zero when any validation error is found.
    #[arg(long)]
    strict: bool,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = Format::Human)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Human,
    Json,
}

/// Run the CLI against a card payload on disk or stdin.
///
/// # Errors
///
/// Returns an error if the payload cannot be read or parsed, if
/// validation faults, or if the report cannot be written.
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let raw = if cli.card_content.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read card content from stdin")?;
        buf
    } else {
        fs::read_to_string(&cli.card_content).with_context(|| {
            format!("Failed to read card content from {}", cli.card_content.display())
        })?
    };

    let card: CardContent =
        serde_json::from_str(&raw).context("Card content is not valid JSON")?;

    let mut config = ValidationConfig::default();
    config.strict = cli.strict;

    let report = validate(&card, &config)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match cli.format {
        Format::Human => output::write_human(&report, &mut writer)?,
        Format::Json => output::write_json(&report, &mut writer)?,
    }

    if report.should_fail {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
