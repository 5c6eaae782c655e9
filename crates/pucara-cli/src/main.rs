//! # pucara CLI entry point
//!
//! Parses command-line arguments, loads configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pucara_cli::check_digit::{run_check_digit, CheckDigitArgs};
use pucara_cli::config::CliConfig;
use pucara_cli::date::{run_date, DateArgs};
use pucara_cli::format::{run_format, run_normalize, FormatArgs, NormalizeArgs};
use pucara_cli::validate::{run_validate, ValidateArgs};

/// Pucara clinic toolkit.
///
/// Validates and formats Chilean RUTs the way the clinic's owner forms do,
/// completes missing check digits, and converts appointment dates.
#[derive(Parser, Debug)]
#[command(name = "pucara", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (defaults to $PUCARA_CONFIG).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate RUTs, including the Módulo 11 check character.
    Validate(ValidateArgs),

    /// Print RUTs in canonical, live-typing, or stored display form.
    Format(FormatArgs),

    /// Print the normalized owner-records key of RUTs.
    Normalize(NormalizeArgs),

    /// Compute the check character for a RUT body.
    CheckDigit(CheckDigitArgs),

    /// Convert API dates for display or submission.
    Date(DateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("pucara CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = CliConfig::resolve(cli.config.as_deref())
        .context("failed to load configuration")
        .and_then(|config| {
            tracing::debug!(?config, "resolved configuration");
            match cli.command {
                Commands::Validate(args) => run_validate(&args, &config),
                Commands::Format(args) => run_format(&args),
                Commands::Normalize(args) => run_normalize(&args),
                Commands::CheckDigit(args) => run_check_digit(&args),
                Commands::Date(args) => run_date(&args),
            }
        });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_validate_positional() {
        let cli =
            Cli::try_parse_from(["pucara", "validate", "12.345.678-5", "1000005-K"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.ruts, vec!["12.345.678-5", "1000005-K"]);
            assert!(args.file.is_none());
            assert!(!args.json);
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_validate_file_only() {
        let cli = Cli::try_parse_from(["pucara", "validate", "--file", "export.txt"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert!(args.ruts.is_empty());
            assert_eq!(args.file, Some(PathBuf::from("export.txt")));
        }
    }

    #[test]
    fn cli_parse_validate_requires_input() {
        assert!(Cli::try_parse_from(["pucara", "validate"]).is_err());
    }

    #[test]
    fn cli_parse_validate_output_formats() {
        let cli = Cli::try_parse_from(["pucara", "validate", "--output", "json", "1"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.output, Some(pucara_cli::config::OutputFormat::Json));
        }
        assert!(
            Cli::try_parse_from(["pucara", "validate", "--json", "--output", "text", "1"]).is_err()
        );
    }

    #[test]
    fn cli_parse_format_flags() {
        let cli = Cli::try_parse_from(["pucara", "format", "--typing", "1234"]).unwrap();
        if let Commands::Format(args) = cli.command {
            assert!(args.typing);
            assert!(!args.display);
        }
        assert!(Cli::try_parse_from(["pucara", "format", "--typing", "--display", "1"]).is_err());
        assert!(Cli::try_parse_from(["pucara", "format"]).is_err());
    }

    #[test]
    fn cli_parse_check_digit() {
        let cli = Cli::try_parse_from(["pucara", "check-digit", "12345678"]).unwrap();
        if let Commands::CheckDigit(args) = cli.command {
            assert_eq!(args.body, "12345678");
        } else {
            panic!("expected check-digit");
        }
    }

    #[test]
    fn cli_parse_date_submit() {
        let cli = Cli::try_parse_from(["pucara", "date", "--submit", "2026-03-05"]).unwrap();
        if let Commands::Date(args) = cli.command {
            assert!(args.submit);
            assert_eq!(args.values, vec!["2026-03-05"]);
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pucara",
            "normalize",
            "12.345.678-5",
            "-vv",
            "--config",
            "pucara.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("pucara.yaml")));
        assert!(matches!(cli.command, Commands::Normalize(_)));
    }
}
