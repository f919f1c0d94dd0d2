//! Generate a syllable configuration record from a letter selection.
//!
//! Prints the JSON record to stdout, or writes `<name>.json` into a
//! directory with `--save`.
use clap::Parser;
use h3syl::{Alphabet, Config};
use std::{path::PathBuf, process::ExitCode};

/// Generate a syllable configuration from a letter selection.
#[derive(Parser, Debug)]
#[command(name = "make_config", version)]
struct Args {
    /// Alphabet to select letters from.
    #[arg(short, long, default_value = "ascii")]
    alphabet: String,

    /// Letters to include, as a single string (e.g. "bcdfghjklmnaeiou").
    #[arg(short, long)]
    letters: String,

    /// Write the record as <name>.json into this directory.
    #[arg(long, value_name = "DIR")]
    save: Option<PathBuf>,
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
    let alphabet = Alphabet::get(&args.alphabet)?;
    let config = Config::from_letters(alphabet, &args.letters)?;

    eprintln!(
        "{}: {} consonants x {} vowels, {} syllables per address",
        config.name(),
        config.consonants().len(),
        config.vowels().len(),
        config.address_length(),
    );

    let json = serde_json::to_string_pretty(&config.to_record())?;
    match &args.save {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let path = dir.join(format!("{}.json", config.name()));
            std::fs::write(&path, json + "\n")?;
            eprintln!("saved to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
