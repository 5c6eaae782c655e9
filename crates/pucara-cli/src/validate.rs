//! # Validate Subcommand
//!
//! Full RUT validation for one-off checks and batch runs over owner
//! exports.
//!
//! ```bash
//! pucara validate 12.345.678-5 12.345.678-9
//! pucara validate --file propietarios.txt --output json
//! ```
//!
//! Exit codes: `0` when every input is valid, `1` when any is not, and `2`
//! when `strict_shape` is configured and any input is not shaped like a RUT.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use pucara_core::rut;

use crate::config::{CliConfig, OutputFormat};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// RUTs to validate, in any common notation (`12.345.678-5`, `123456785`).
    #[arg(required_unless_present = "file")]
    pub ruts: Vec<String>,

    /// Read more RUTs from a file, one per line (`#` starts a comment line).
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Report format; overrides the configuration file.
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Shorthand for `--output json`.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,
}

/// Outcome of validating one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RutReport {
    /// The input exactly as given.
    pub input: String,
    /// Normalized form.
    pub normalized: String,
    /// Shape check result (7-8 digits plus digit or `K`).
    pub shape_ok: bool,
    /// Full validation result, including the check character.
    pub valid: bool,
    /// Canonical dotted form.
    pub canonical: String,
    /// Check character the body calls for; absent when the shape is wrong.
    pub expected_check: Option<char>,
}

impl RutReport {
    /// Run every check on a single input.
    pub fn inspect(input: &str) -> Self {
        let normalized = rut::normalize(input);
        let shape_ok = rut::has_valid_shape(normalized.as_str());
        let expected_check = shape_ok
            .then(|| rut::compute_check_digit(&normalized[..normalized.len() - 1]));
        Self {
            input: input.to_string(),
            valid: rut::is_valid(normalized.as_str()),
            canonical: rut::format_canonical(normalized.as_str()),
            normalized,
            shape_ok,
            expected_check,
        }
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let inputs = crate::collect_inputs(&args.ruts, args.file.as_deref())?;
    if inputs.is_empty() {
        tracing::warn!("no RUTs to validate");
    }

    let reports: Vec<RutReport> = inputs.iter().map(|s| RutReport::inspect(s)).collect();
    for report in reports.iter().filter(|r| !r.valid) {
        tracing::debug!(
            input = %report.input,
            shape_ok = report.shape_ok,
            expected_check = ?report.expected_check,
            "rejected RUT"
        );
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        args.output.unwrap_or(config.output)
    };
    let stdout = std::io::stdout();
    write_reports(&mut stdout.lock(), &reports, format)?;

    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(total = reports.len(), invalid, "validation finished");
    Ok(exit_code(&reports, config.strict_shape))
}

/// Render reports in the requested format.
pub fn write_reports(
    out: &mut impl Write,
    reports: &[RutReport],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for r in reports {
                let verdict = if r.valid { "valid" } else { "invalid" };
                writeln!(out, "{}\t{}\t{}", r.input, verdict, r.canonical)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Process exit code for a set of reports.
pub fn exit_code(reports: &[RutReport], strict_shape: bool) -> u8 {
    if reports.iter().all(|r| r.valid) {
        0
    } else if strict_shape && reports.iter().any(|r| !r.shape_ok) {
        2
    } else {
        1
    }
}
