//! `dec2bin-cli` — command-line front ends for `dec2bin`.
//!
//! Provides the logic behind the binary entry points:
//! - `dec2bin`       — convert one decimal read from stdin (or an argument)
//! - `dec2bin-table` — print the conversion table for a fixed set of inputs

use std::fmt::Write as _;

use anyhow::Context;
use dec2bin::{convert, ConvertError};
use tracing_subscriber::EnvFilter;

/// Whole numbers printed by `dec2bin-table`.
pub const SELF_TEST_WHOLE: &[&str] = &[
    "0",
    "0000",
    "01",
    "1",
    "10",
    "2",
    "3",
    "4",
    "5",
    "16",
    "64",
    "127",
    "200",
    "300",
    "167929",
    "83648237389827329",
];

/// Fractional numbers printed by `dec2bin-table`.
pub const SELF_TEST_FRACTIONAL: &[&str] = &[
    "0.02", "0.1", "0.2", "0.3", "0.125", "0.375", "1.5", "3.875", "13.73",
];

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` is honoured unless `verbose` is set, which forces `debug`.
/// The default level is `warn`, so stdout carries only results.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Trims a line of user input and converts it.
pub fn convert_line(line: &str) -> Result<String, ConvertError> {
    convert(line.trim())
}

/// Renders `input ==> output` rows for every fixture, in two titled groups.
pub fn self_test_table() -> anyhow::Result<String> {
    let mut out = String::new();
    render_group(&mut out, "Whole numbers:", SELF_TEST_WHOLE)?;
    out.push('\n');
    render_group(&mut out, "Floating point numbers:", SELF_TEST_FRACTIONAL)?;
    Ok(out)
}

fn render_group(out: &mut String, title: &str, inputs: &[&str]) -> anyhow::Result<()> {
    writeln!(out, "{title}")?;
    for input in inputs {
        let binary = convert(input).with_context(|| format!("converting {input:?}"))?;
        writeln!(out, "{input} ==> {binary}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_line_trims() {
        assert_eq!(convert_line("3.875\n").unwrap(), "11.111");
        assert_eq!(convert_line("  16\r\n").unwrap(), "10000");
        assert_eq!(convert_line("\n").unwrap(), "");
    }

    #[test]
    fn test_convert_line_rejects_inner_space() {
        assert!(convert_line("1 6").is_err());
    }

    #[test]
    fn test_table_groups() {
        let table = self_test_table().unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Whole numbers:");
        assert_eq!(lines[SELF_TEST_WHOLE.len() + 1], "");
        assert_eq!(lines[SELF_TEST_WHOLE.len() + 2], "Floating point numbers:");
        assert_eq!(
            lines.len(),
            SELF_TEST_WHOLE.len() + SELF_TEST_FRACTIONAL.len() + 3
        );
    }
}
