//! ticlearn CLI - train a tabular Tic-Tac-Toe policy through self-play
//!
//! A run loads the policy table snapshot (if one exists), plays the requested
//! number of self-play episodes, saves the snapshot back, and prints the
//! aggregate won/lost/drawn counts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ticlearn::{
    PolicyTable,
    output::{format_number, print_kv, print_section},
    training::{ProgressObserver, TrainingConfig, TrainingSession},
};

#[derive(Parser, Debug)]
#[command(name = "ticlearn")]
#[command(version, about = "Tabular self-play trainer for Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Number of self-play episodes to run
    #[arg(long, short = 'g', default_value_t = 500)]
    games: usize,

    /// Policy table snapshot to load and save
    #[arg(long, short = 't', default_value = "policy.txt")]
    table: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut table = if cli.table.exists() {
        PolicyTable::load_from_path(&cli.table)
            .with_context(|| format!("loading policy table from {}", cli.table.display()))?
    } else {
        PolicyTable::new()
    };
    let states_before = table.len();

    let config = TrainingConfig {
        episodes: cli.games,
        seed: cli.seed,
        ..Default::default()
    };

    let mut session = TrainingSession::new(config);
    if !cli.quiet {
        session = session.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = session.run(&mut table).context("training run failed")?;

    table
        .save_to_path(&cli.table)
        .with_context(|| format!("saving policy table to {}", cli.table.display()))?;

    if let Some(summary_path) = &cli.summary {
        result
            .save(summary_path)
            .with_context(|| format!("writing summary to {}", summary_path.display()))?;
    }

    print_section("Training complete");
    print_kv("episodes", &format_number(result.total_episodes));
    print_kv(
        "won/lost/drawn",
        &format!("{}/{}/{}", result.wins, result.losses, result.draws),
    );
    print_kv(
        "win rate",
        &format!("{:.1}%", result.win_rate * 100.0),
    );
    print_kv("known states", &format_number(table.len()));
    print_kv(
        "new states",
        &format_number(table.len().saturating_sub(states_before)),
    );

    Ok(())
}
