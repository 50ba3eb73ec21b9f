use std::io;
use std::path::Path;

use clap::Parser;
use clock::SystemClock;
use folder::Outcome;

mod clock;
mod date_to_string;
mod folder;

/// Create a folder named after today's date (YYYY-MM-DD) in the current directory.
#[derive(Parser)]
#[command(version, about)]
struct Arg {
    /// Print the cause of a failure to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Arg::parse();

    let mut stdout = io::stdout().lock();
    let (_, outcome) = folder::run(&SystemClock, Path::new("."), &mut stdout)?;

    if args.verbose && !outcome.is_created() {
        match &outcome {
            Outcome::Other(e) => eprintln!("cause: {} ({:?})", outcome, e.kind()),
            _ => eprintln!("cause: {}", outcome),
        }
    }

    // failure to create the folder still exits 0
    return Ok(());
}
