//! word-ladder: load a word list, precompute every ladder, answer queries.

mod output;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_ladder_core::{EngineConfig, PathEngine};

#[derive(Parser, Debug)]
#[command(
    name = "word-ladder",
    version,
    about = "Shortest word ladders over a vocabulary"
)]
struct Cli {
    /// Word list, one word per line
    #[arg(short, long, env = "LADDER_WORDS")]
    words: PathBuf,

    /// Run precompute sweeps on a single thread
    #[arg(long, env = "LADDER_SEQUENTIAL")]
    sequential: bool,

    /// Refuse to precompute graphs larger than this (MB)
    #[arg(long, env = "LADDER_MAX_MEMORY_MB", default_value_t = 4096)]
    max_memory_mb: usize,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one shortest ladder between two words
    Path { from: String, to: String },
    /// Print the number of edits on the shortest ladder
    Distance { from: String, to: String },
    /// List words within N edits of a word
    Neighborhood {
        word: String,
        #[arg(short, long, default_value_t = 1)]
        depth: u32,
    },
    /// Show graph and index statistics
    Stats,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = if cli.sequential {
        EngineConfig::sequential()
    } else {
        EngineConfig::default()
    };
    config.max_memory_mb = cli.max_memory_mb;

    let start = Instant::now();
    let mut engine = PathEngine::with_config(config);
    let added = engine
        .populate_from_path(&cli.words)
        .with_context(|| format!("loading words from {}", cli.words.display()))?;
    engine.precompute().context("precomputing shortest paths")?;
    info!(
        words = added,
        load_time_ms = start.elapsed().as_secs_f64() * 1000.0,
        "engine ready"
    );

    let rendered = match &cli.command {
        Command::Path { from, to } => {
            let path = engine.shortest_path(from, to)?;
            output::path(&path, cli.json)
        }
        Command::Distance { from, to } => {
            let distance = engine.shortest_distance(from, to)?;
            output::distance(from, to, distance, cli.json)
        }
        Command::Neighborhood { word, depth } => {
            let found = engine.neighborhood(word, *depth)?;
            output::neighborhood(&found, cli.json)
        }
        Command::Stats => output::stats(&engine.stats(), cli.json),
    };

    println!("{rendered}");
    Ok(())
}
