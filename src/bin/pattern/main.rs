//! `pattern encode` reads unsigned decimal integers from standard input and
//! writes their pattern-delimited frames to standard output. `pattern
//! decode` does the reverse, printing one value per line.

mod logging;

use std::io::{self, BufRead, BufWriter, Write};
use std::num::IntErrorKind;
use std::process;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use pattern_delimited::coding::encode_to;
use pattern_delimited::Frames;

#[derive(Debug, Parser)]
#[command(name = "pattern", version, about = "Pattern-delimited integer codec")]
struct Args {
    /// Write log lines to standard error as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode whitespace-delimited decimal integers read from standard input.
    Encode,
    /// Decode frames read from standard input and print their values.
    Decode {
        /// Print each frame's length in bytes after its value.
        #[arg(long)]
        lengths: bool,
    },
}

fn main() {
    let args = Args::parse();
    logging::setup_logging("warn", args.log_json);

    let result = match args.command {
        Command::Encode => encode(),
        Command::Decode { lengths } => decode(lengths),
    };

    if let Err(err) = result {
        eprintln!("An error occurred: {:#}", err);
        process::exit(1);
    }
}

fn encode() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut count = 0u64;

    for line in stdin.lock().lines() {
        let line = line.context("Error reading from standard input")?;
        for token in line.split_whitespace() {
            let value = parse_value(token)?;
            let len = encode_to(&mut out, value).context("Failure writing to standard output")?;
            debug!(value, len, "encoded");
            count += 1;
        }
    }

    out.flush().context("Failure writing to standard output")?;
    debug!(count, "encoding finished");
    Ok(())
}

fn parse_value(token: &str) -> Result<u64> {
    token.parse().map_err(|err: std::num::ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow => anyhow!("{}: value wider than 64 significant bits", token),
        _ => anyhow!("Unrecognized trailing garbage on standard input: {:?}", token),
    })
}

fn decode(lengths: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut count = 0u64;

    for item in Frames::new(stdin.lock()) {
        let (value, len) = item.context("Error decoding standard input")?;
        let written = if lengths {
            writeln!(out, "{} {}", value, len)
        } else {
            writeln!(out, "{}", value)
        };
        written.context("Failure writing to standard output")?;
        count += 1;
    }

    out.flush().context("Failure writing to standard output")?;
    debug!(count, "decoding finished");
    Ok(())
}
