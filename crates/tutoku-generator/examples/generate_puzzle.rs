//! Generates a puzzle at a chosen tier and prints it with its solution.
//!
//! ```sh
//! cargo run --example generate_puzzle -- --tier 3 --seed 42
//! RUST_LOG=debug cargo run --example generate_puzzle -- --tier 4
//! ```

use clap::Parser;
use tutoku_generator::PuzzleGenerator;
use tutoku_solver::Tier;

#[derive(Debug, Parser)]
struct Args {
    /// Target difficulty tier, 1-4.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=4))]
    tier: u8,

    /// Master seed; omit for a random puzzle.
    #[arg(long)]
    seed: Option<u64>,

    /// Generation attempts before giving up.
    #[arg(long, default_value_t = 100)]
    attempts: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let target = Tier::from_level(args.tier).expect("clap bounds the tier to 1-4");

    let generator = PuzzleGenerator::new();
    let result = match args.seed {
        Some(seed) => generator.generate_with_seed(target, args.attempts, seed),
        None => generator.generate(target, args.attempts),
    };

    match result {
        Ok(generated) => {
            println!("Seed: {}", generated.seed);
            println!("Rated tier: {}", generated.rated_tier);
            println!("Empty cells: {}", generated.puzzle.empty_count());
            println!();
            println!("Puzzle:");
            println!("{}", generated.puzzle);
            println!();
            println!("Solution:");
            println!("{}", generated.solution);
        }
        Err(err) => {
            eprintln!("generation failed: {err}");
            std::process::exit(1);
        }
    }
}
