//! # Format and Normalize Subcommands

use std::io::Write;

use anyhow::Result;
use clap::Args;

use pucara_core::rut;

/// Arguments for the format subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Values to format.
    #[arg(required = true)]
    pub ruts: Vec<String>,

    /// Apply the live-typing mask instead of the canonical form.
    #[arg(long, conflicts_with = "display")]
    pub typing: bool,

    /// Apply the lenient stored-value display used in owner tables.
    #[arg(long)]
    pub display: bool,
}

/// Arguments for the normalize subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Values to normalize.
    #[arg(required = true)]
    pub ruts: Vec<String>,
}

/// Format one value according to the selected style.
pub fn format_one(args: &FormatArgs, input: &str) -> String {
    if args.typing {
        rut::format_while_typing(input)
    } else if args.display {
        rut::format_for_display(input)
    } else {
        rut::format_canonical(input)
    }
}

/// Execute the format subcommand. Formatting never fails; invalid values
/// are formatted anyway and reported on stderr.
pub fn run_format(args: &FormatArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    write_formatted(&mut stdout.lock(), args)?;
    Ok(0)
}

/// Write one formatted line per input.
pub fn write_formatted(out: &mut impl Write, args: &FormatArgs) -> Result<()> {
    for input in &args.ruts {
        if !rut::is_valid(input.as_str()) {
            tracing::warn!(input = %input, "not a valid RUT");
        }
        writeln!(out, "{}", format_one(args, input))?;
    }
    Ok(())
}

/// Execute the normalize subcommand.
pub fn run_normalize(args: &NormalizeArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    write_normalized(&mut stdout.lock(), args)?;
    Ok(0)
}

/// Write one normalized line per input.
pub fn write_normalized(out: &mut impl Write, args: &NormalizeArgs) -> Result<()> {
    for input in &args.ruts {
        writeln!(out, "{}", rut::normalize(input.as_str()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(typing: bool, display: bool) -> FormatArgs {
        FormatArgs {
            ruts: Vec::new(),
            typing,
            display,
        }
    }

    fn ruts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn formatted(args: &FormatArgs) -> String {
        let mut out = Vec::new();
        write_formatted(&mut out, args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn canonical_by_default() {
        assert_eq!(format_one(&args(false, false), "123456785"), "12.345.678-5");
        assert_eq!(format_one(&args(false, false), "1234"), "1234");
    }

    #[test]
    fn typing_mask() {
        assert_eq!(format_one(&args(true, false), "1234"), "123-4");
        assert_eq!(format_one(&args(true, false), "12345678k"), "12.345.678-K");
    }

    #[test]
    fn stored_display() {
        assert_eq!(format_one(&args(false, true), "1000005-k"), "1.000.005-k");
        assert_eq!(format_one(&args(false, true), "1"), "1");
    }

    #[test]
    fn writes_one_canonical_line_per_input() {
        let args = FormatArgs {
            ruts: ruts(&["123456785", "1234"]),
            ..args(false, false)
        };
        assert_eq!(formatted(&args), "12.345.678-5\n1234\n");
    }

    #[test]
    fn writes_typing_and_display_lines() {
        let typing = FormatArgs {
            ruts: ruts(&["123456785", "1234"]),
            ..args(true, false)
        };
        assert_eq!(formatted(&typing), "12.345.678-5\n123-4\n");

        let display = FormatArgs {
            ruts: ruts(&["1000005-k", "ABC12345"]),
            ..args(false, true)
        };
        assert_eq!(formatted(&display), "1.000.005-k\nABC1.234-5\n");
    }

    #[test]
    fn invalid_values_are_still_written() {
        let args = FormatArgs {
            ruts: ruts(&["12345678-9"]),
            ..args(false, false)
        };
        assert_eq!(formatted(&args), "12.345.678-9\n");
    }

    #[test]
    fn writes_normalized_keys() {
        let args = NormalizeArgs {
            ruts: ruts(&["12.345.678-5", "1000005-k", "\u{FEFF}1.000.013-0"]),
        };
        let mut out = Vec::new();
        write_normalized(&mut out, &args).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "123456785\n1000005K\n10000130\n"
        );
    }

    #[test]
    fn handlers_exit_zero() {
        let format = FormatArgs {
            ruts: ruts(&["12345678-9"]),
            ..args(false, false)
        };
        assert_eq!(run_format(&format).unwrap(), 0);
        let normalize = NormalizeArgs {
            ruts: ruts(&["12.345.678-5"]),
        };
        assert_eq!(run_normalize(&normalize).unwrap(), 0);
    }
}
