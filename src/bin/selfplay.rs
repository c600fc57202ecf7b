//! Self-play match runner CLI.
//!
//! Plays matches between the two configured players and writes one JSON
//! record per match (JSONL).
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Logging follows `RUST_LOG` (default `info`, `warn` with `--quiet`).

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sternhalma::config::MatchConfig;
use sternhalma::selfplay::{self, SelfPlayConfig, SelfPlayError, Tally};

#[derive(Parser, Debug)]
#[command(name = "selfplay")]
#[command(about = "Play hex jump-board matches between two search strategies")]
struct Args {
    /// Match configuration (JSON). Defaults to GRAVE vs UCT on the standard board.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of matches to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Worker threads; matches run in parallel above 1
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Random seed, 0 for entropy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output file path (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Suppress progress logging and the summary
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), SelfPlayError> {
    let config = match &args.config {
        Some(path) => MatchConfig::from_path(path)?,
        None => MatchConfig::default(),
    };
    let options = SelfPlayConfig {
        games: args.games,
        threads: args.threads,
        seed: args.seed,
    };

    info!(
        games = options.games,
        threads = options.threads,
        players = ?[&config.players[0].name, &config.players[1].name],
        strategies = ?[config.players[0].strategy, config.players[1].strategy],
        "starting self-play"
    );

    let start = Instant::now();
    let records = selfplay::run_matches(&config, &options)?;
    let elapsed = start.elapsed();
    info!(
        games = records.len(),
        seconds = elapsed.as_secs_f64(),
        "self-play finished"
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&records, &mut writer)?;
            info!(path = %path.display(), records = records.len(), "wrote records");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&records, &mut writer)?;
        }
    }

    if !args.quiet {
        eprintln!("{}", Tally::from_records(&records));
    }
    Ok(())
}
