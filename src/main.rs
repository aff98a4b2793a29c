//! split-intervals: split intervals into overlapping windows of fixed size.
//!
//! Usage: split-intervals [OPTIONS] <FILE>

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use split_intervals::bed::BedError;
use split_intervals::commands::SplitCommand;
use split_intervals::config::{WindowParams, DEFAULT_OVERLAP, DEFAULT_WINDOW_SIZE};

#[derive(Parser)]
#[command(name = "split-intervals")]
#[command(version)]
#[command(about = "Split intervals into overlapping windows of fixed size", long_about = None)]
struct Cli {
    /// Input interval file (chrom, start, stop, optional extra columns; use - for stdin)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Window size
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE as i64, allow_negative_numbers = true)]
    window: i64,

    /// Overlap size
    #[arg(long, default_value_t = DEFAULT_OVERLAP as i64, allow_negative_numbers = true)]
    overlap: i64,

    /// Print split statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        // Downstream stopped reading; nothing left to report.
        if e.is_broken_pipe() {
            log::debug!("output closed early: {}", e);
            return;
        }
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BedError> {
    // Validate before touching the input
    let params = WindowParams::new(cli.window, cli.overlap)?;
    let cmd = SplitCommand::new(params);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let result = cmd.run(&cli.input, &mut handle)?;

    if cli.stats {
        eprintln!("Split stats: {}", result);
    }

    Ok(())
}
