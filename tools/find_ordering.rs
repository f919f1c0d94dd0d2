//! Generate the Hamiltonian base-cell ordering record.
//!
//! Builds the adjacency graph of the 122 base cells through the grid
//! adapter, searches a Hamiltonian path with a wall-clock budget, verifies
//! it and prints the record JSON.
use clap::Parser;
use h3syl::{CellOrdering, Grid};
use std::{path::PathBuf, process::ExitCode, time::Duration};

/// Generate the Hamiltonian base-cell ordering record.
#[derive(Parser, Debug)]
#[command(name = "find_ordering", version)]
struct Args {
    /// Wall-clock budget for the search, in seconds.
    #[arg(long, default_value_t = 300)]
    timeout: u64,

    /// Write the record to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let budget = Duration::from_secs(args.timeout);
    let ordering = CellOrdering::search(Grid::new(), budget)?;
    let record = ordering.to_record();

    eprintln!(
        "found a verified Hamiltonian path: {} -> {}",
        record.cell_order.first().expect("non-empty path"),
        record.cell_order.last().expect("non-empty path"),
    );

    let json = serde_json::to_string_pretty(&record)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json + "\n")?;
            eprintln!("saved to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
