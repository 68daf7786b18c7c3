//! Example demonstrating sudoku puzzle generation.
//!
//! This example shows how to:
//! - Generate a random puzzle at a chosen difficulty
//! - Display the seed, puzzle, and solution
//! - Regenerate a puzzle from a recorded seed or a phrase
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Select a difficulty (case-insensitive; unrecognized names fall back to
//! easy):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Regenerate a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Derive the seed from a memorable phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty medium --phrase "daily 2026-08-25"
//! ```

use std::process;

use clap::Parser;
use ninefold_generator::{
    Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, SeedParseError,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty name (easy, medium, hard). Unrecognized names fall back
    /// to easy.
    #[arg(short, long, value_name = "NAME", default_value = "easy")]
    difficulty: String,

    /// Regenerate from a fixed 64-hex-character seed.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Derive the seed from a phrase instead of random bytes.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match resolve_seed(&args) {
        Ok(seed) => seed,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let difficulty = Difficulty::from_name(&args.difficulty);
    let generator = PuzzleGenerator::new();
    let generated = generator.generate_with_seed(difficulty, seed);
    print_puzzle(&generated);
}

fn resolve_seed(args: &Args) -> Result<PuzzleSeed, SeedParseError> {
    if let Some(hex) = &args.seed {
        return hex.parse();
    }
    if let Some(phrase) = &args.phrase {
        return Ok(PuzzleSeed::from_phrase(phrase));
    }
    Ok(PuzzleSeed::random())
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    println!("Difficulty:");
    println!(
        "  {} ({} givens)",
        generated.difficulty,
        generated.difficulty.given_count()
    );
    println!();

    println!("Puzzle:");
    println!("  {}", generated.puzzle);
    println!();
    println!("Solution:");
    println!("  {}", generated.solution);
}
