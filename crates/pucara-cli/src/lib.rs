//! # pucara-cli — Command-Line Interface for the Pucara Stack
//!
//! Exposes the RUT and date primitives of `pucara-core` to scripts, batch
//! checks of owner exports, and support staff at the front desk.
//!
//! ## Subcommands
//!
//! - `pucara validate`: Full RUT validation with text or JSON reports.
//! - `pucara format`: Canonical, live-typing, or stored-value display form.
//! - `pucara normalize`: Normalized owner-records key.
//! - `pucara check-digit`: Complete a body with its Módulo 11 check character.
//! - `pucara date`: Calendar-date display and submit forms.
//!
//! ```bash
//! pucara validate 12.345.678-5 1000005-K
//! pucara validate --file propietarios.txt --json
//! pucara format --typing 12345678k
//! pucara check-digit 12345678
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in the `*Args` structs; handlers delegate to
//!   `pucara-core` and only decide what to print and which exit code to use.
//! - Reports go to stdout, logs go to stderr.

pub mod check_digit;
pub mod config;
pub mod date;
pub mod format;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

/// Gather inputs from positional arguments followed by the lines of `file`.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
pub fn collect_inputs(args: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut inputs = args.to_vec();
    if let Some(path) = file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {}", path.display()))?;
        inputs.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        );
        tracing::debug!(path = %path.display(), total = inputs.len(), "read input file");
    }
    Ok(inputs)
}
