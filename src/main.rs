use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pacman_sim::{
    CommandBatch, DEFAULT_GRID_SIZE, DEFAULT_MAX_COMMANDS, SimConfig, SimulationOutcome, Simulator,
    collect_commands,
};
use tracing::{Level, info};

/// Moves a pacman around a square grid according to commands read line by line.
///
/// Commands: PLACE X,Y,F | MOVE | LEFT | RIGHT | REPORT. Input ends at the
/// first REPORT, at end of file, or once the command limit is reached.
#[derive(Debug, Parser)]
#[command(name = "pacman-sim", version, about)]
struct Cli {
    /// Read commands from this file instead of standard input
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Largest valid coordinate on either axis (coordinates run 0..=N)
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE, value_parser = clap::value_parser!(i32).range(0..))]
    grid_size: i32,

    /// Maximum number of commands read before input is cut off
    #[arg(long, default_value_t = DEFAULT_MAX_COMMANDS)]
    max_commands: usize,

    /// Stop when the input has no PLACE or no REPORT command
    #[arg(long)]
    strict: bool,

    /// Print the final state as JSON after processing
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = SimConfig::default()
        .with_grid_size(cli.grid_size)
        .with_max_commands(cli.max_commands)
        .with_halt_on_missing_command(cli.strict);

    let batch = read_batch(cli.input.as_ref(), config.max_commands)?;
    if batch.truncated {
        println!(
            "exceeded maximum number of commands [{}]; continuing with the commands received",
            config.max_commands
        );
    }
    println!();

    let outcome = Simulator::new(config).run(&batch.tokens);
    print_outcome(&outcome);

    if cli.json {
        let json = serde_json::to_string_pretty(&outcome.final_state)
            .context("failed to serialize final state")?;
        println!("{json}");
    }

    Ok(())
}

fn read_batch(path: Option<&PathBuf>, max_commands: usize) -> Result<CommandBatch> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            info!(path = %path.display(), "reading commands from file");
            Ok(collect_commands(BufReader::new(file), max_commands))
        }
        None => {
            println!("Enter the commands: ");
            Ok(collect_commands(io::stdin().lock(), max_commands))
        }
    }
}

fn print_outcome(outcome: &SimulationOutcome) {
    for diagnostic in outcome.diagnostics() {
        println!("{diagnostic}");
    }

    if outcome.halted {
        return;
    }

    if outcome.is_empty() {
        println!("nothing to process; aborting");
        return;
    }

    println!();
    println!("List of valid commands to be processed:");
    let listing: Vec<String> = outcome
        .commands
        .iter()
        .enumerate()
        .map(|(i, command)| format!("{}.{}", i + 1, command))
        .collect();
    println!("{}", listing.join("      "));
    println!();

    for event in &outcome.events {
        println!("{event}");
    }
}
