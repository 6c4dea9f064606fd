//! `rrule-text` CLI — describe RRULE recurrence rules in plain English.
//!
//! ## Usage
//!
//! ```sh
//! # Describe a single rule
//! rrule-text describe "FREQ=MONTHLY;BYDAY=+3TU"
//!
//! # Anchor the rule so implicit weekdays/days come from a known start
//! rrule-text describe "FREQ=WEEKLY" --dtstart 2026-02-17T14:00:00
//!
//! # Show UNTIL in the rule's own timezone
//! rrule-text describe "FREQ=DAILY;UNTIL=20660101T050000Z" --timezone America/Los_Angeles
//!
//! # Emit JSON (text, approximation reasons, parsed descriptor)
//! rrule-text describe "FREQ=DAILY;BYHOUR=9,17" --json
//!
//! # Describe one rule per line from a file (or stdin)
//! rrule-text batch -i rules.txt
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rrule_text::{Approximation, RuleDescriptor};
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rrule-text",
    version,
    about = "Describe RFC 5545 recurrence rules in plain English"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Local start datetime the rule is anchored to (defaults to now)
    #[arg(long, global = true)]
    dtstart: Option<String>,

    /// IANA timezone of the rule
    #[arg(long, global = true, default_value = "UTC")]
    timezone: String,

    /// Log clause selection details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a single RRULE
    Describe {
        /// RRULE value, e.g. "FREQ=WEEKLY;BYDAY=TU" (the RRULE: prefix is optional)
        rrule: String,
        /// Print a JSON object instead of the sentence
        #[arg(long)]
        json: bool,
    },
    /// Describe one RRULE per line
    Batch {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// JSON output of `describe --json`.
#[derive(Serialize)]
struct DescriptionDto<'a> {
    text: &'a str,
    approximate: bool,
    reasons: &'a [Approximation],
    descriptor: &'a RuleDescriptor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dtstart = match cli.dtstart {
        Some(dtstart) => dtstart,
        None => chrono::Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string(),
    };
    tracing::debug!(%dtstart, timezone = %cli.timezone, "anchoring rules");

    match cli.command {
        Commands::Describe { rrule, json } => {
            let descriptor = rrule_text::parse_rrule(&rrule, &dtstart, &cli.timezone)
                .with_context(|| format!("Failed to parse RRULE: {}", rrule))?;
            let description = rrule_text::describe(&descriptor);

            if json {
                let dto = DescriptionDto {
                    text: description.text(),
                    approximate: description.is_approximate(),
                    reasons: description.approximations(),
                    descriptor: &descriptor,
                };
                println!("{}", serde_json::to_string_pretty(&dto)?);
            } else {
                println!("{}", description);
            }
        }
        Commands::Batch { input } => {
            let content = read_input(input.as_deref())?;
            for line in describe_lines(&content, &dtstart, &cli.timezone)? {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Describe every rule in `content`, one per line.
///
/// Blank lines and lines starting with `#` are skipped. The first invalid rule
/// aborts the batch with its 1-based line number.
fn describe_lines(content: &str, dtstart: &str, timezone: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            tracing::trace!(line = idx + 1, "skipping blank or comment line");
            continue;
        }
        let description = rrule_text::describe_rrule(line, dtstart, timezone)
            .with_context(|| format!("Line {}: failed to describe '{}'", idx + 1, line))?;
        out.push(description.to_string());
    }

    Ok(out)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
