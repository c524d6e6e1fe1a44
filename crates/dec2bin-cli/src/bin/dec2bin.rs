//! `dec2bin` — convert a decimal number to binary.
//!
//! Usage:
//!   echo 3.875 | dec2bin
//!   dec2bin 0.1
//!
//! Reads one line from stdin unless a value is given as the first argument.

use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use dec2bin_cli::{convert_line, init_logging};

#[derive(Parser)]
#[command(name = "dec2bin")]
#[command(about = "Convert a decimal number to its exact binary representation")]
#[command(version)]
struct Cli {
    /// Decimal number to convert; read from stdin when omitted
    value: Option<String>,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let line = match cli.value {
        Some(value) => value,
        None => {
            let mut buf = String::new();
            io::stdin()
                .lock()
                .read_line(&mut buf)
                .context("failed to read from stdin")?;
            buf
        }
    };

    let binary = convert_line(&line)
        .with_context(|| format!("cannot convert {:?}", line.trim()))?;
    println!("{binary}");
    Ok(())
}
