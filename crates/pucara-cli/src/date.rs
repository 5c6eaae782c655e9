//! # Date Subcommand
//!
//! Converts API dates to the `DD-MM-YYYY` form shown on screen, or with
//! `--submit` to the strict `YYYY-MM-DD` form the backend accepts.

use anyhow::Result;
use clap::Args;

use pucara_core::temporal;

/// Arguments for the date subcommand.
#[derive(Args, Debug)]
pub struct DateArgs {
    /// Dates or ISO datetimes (`2026-03-05`, `2026-03-05T00:00:00Z`).
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Emit the `YYYY-MM-DD` submit form, rejecting impossible dates.
    #[arg(long)]
    pub submit: bool,
}

/// Execute the date subcommand. Exits with `1` if any `--submit` value is
/// not a real calendar date; the remaining values are still printed.
pub fn run_date(args: &DateArgs) -> Result<u8> {
    let mut code = 0;
    for value in &args.values {
        if !args.submit {
            println!("{}", temporal::format_date(value.as_str()));
            continue;
        }
        match temporal::parse_date(value) {
            Ok(date) => println!("{}", temporal::local_date_for_submit(date)),
            Err(e) => {
                tracing::error!("{e}");
                code = 1;
            }
        }
    }
    Ok(code)
}
