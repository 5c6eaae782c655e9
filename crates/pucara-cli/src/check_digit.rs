//! # Check-Digit Subcommand
//!
//! Completes a RUT body with its Módulo 11 check character, for staff
//! re-entering owners whose paperwork lost the trailing digit.

use anyhow::Result;
use clap::Args;

use pucara_core::{rut, Rut};

/// Arguments for the check-digit subcommand.
#[derive(Args, Debug)]
pub struct CheckDigitArgs {
    /// RUT body: 7 or 8 digits, dots allowed (`12.345.678`).
    pub body: String,
}

/// Execute the check-digit subcommand.
///
/// Prints the check character and the completed canonical RUT separated by
/// a tab. Exits with `2` when the body is not 7-8 digits.
pub fn run_check_digit(args: &CheckDigitArgs) -> Result<u8> {
    match complete(&args.body) {
        Ok(rut) => {
            println!("{}\t{}", rut.check_char(), rut);
            Ok(0)
        }
        Err(e) => {
            tracing::error!("{e}");
            Ok(2)
        }
    }
}

/// Strip separators from `body` and append its check character.
pub fn complete(body: &str) -> Result<Rut, pucara_core::ValidationError> {
    Rut::from_body(&rut::normalize(body))
}
