//! CLI entry point for the `bitvis` tool.
//!
//! `bitvis <TYPE> <LITERAL>` prints the bit pattern of a decimal literal;
//! adding a `RADIX` first converts `LITERAL` from that radix.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

#[derive(clap::Parser)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "Examples:\n  bitvis char 7\n  bitvis double -3.1415\n  bitvis long DEADBEEF 16"
)]
struct Cli {
    /// Scalar type: char, short, int, long, float or double
    #[arg(value_name = "TYPE")]
    type_name: String,

    /// Decimal literal, or digits in RADIX when one is given
    #[arg(allow_hyphen_values = true)]
    literal: String,

    /// Radix (2 to 16) of LITERAL; integer types only
    radix: Option<String>,

    /// Log parsing and conversion decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose {
            LevelFilter::TRACE
        } else {
            LevelFilter::WARN
        })
        .init();

    let rendering = match &cli.radix {
        Some(radix) => bitvis::visualise_from_radix(&cli.type_name, &cli.literal, radix)?,
        None => bitvis::visualise(&cli.type_name, &cli.literal)?,
    };
    writeln!(io::stdout(), "{rendering}")?;
    Ok(())
}
