//! `dec2bin-table` — print conversions for a fixed set of whole and
//! fractional numbers, one `input ==> output` pair per line.

use clap::Parser;
use dec2bin_cli::{init_logging, self_test_table};

#[derive(Parser)]
#[command(name = "dec2bin-table")]
#[command(about = "Print the dec2bin conversion table")]
#[command(version)]
struct Cli {
    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    print!("{}", self_test_table()?);
    Ok(())
}
