use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use log::{error, info, LevelFilter};

use concurrent_quicksort::config::{DEFAULT_COUNT, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_SEED, MAX_DEPTH, STACK_SAFE_DEPTH, THRESHOLD};
use concurrent_quicksort::csv_io::{generate_numbers, read_numbers_from_path, write_numbers_to_path};
use concurrent_quicksort::error::Result;
use concurrent_quicksort::{initialize_thread_pool, sort_parallel_with, verify_sorted, SortConfig};

#[derive(Parser)]
#[command(version, about = "Sort integers from a CSV file with a concurrent quicksort")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read integers, sort them concurrently and write one per line.
    Sort {
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Worker threads (default: one per hardware thread).
        #[arg(short, long)]
        threads: Option<usize>,
        /// Ranges up to this size are sorted without spawning tasks. 0 spawns on every partition.
        #[arg(long, default_value_t = THRESHOLD)]
        threshold: usize,
        /// Tasks deeper than this level are sorted without spawning further tasks (at most 256).
        #[arg(long, default_value_t = MAX_DEPTH, value_parser = RangedU64ValueParser::<usize>::new().range(0..=STACK_SAFE_DEPTH as u64))]
        max_depth: usize,
        /// Check that the result is ascending before writing it.
        #[arg(long)]
        verify: bool,
    },
    /// Write uniformly random integers, one per line.
    Generate {
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        output: PathBuf,
        #[arg(short, long, default_value_t = DEFAULT_COUNT)]
        count: usize,
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        #[arg(long, default_value_t = i64::from(i32::MIN), allow_negative_numbers = true)]
        min: i64,
        #[arg(long, default_value_t = i64::from(i32::MAX), allow_negative_numbers = true)]
        max: i64,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Sort { input, output, threads, threshold, max_depth, verify } => {
            if threads.is_some() {
                initialize_thread_pool(threads)?;
            }

            let mut numbers = read_numbers_from_path(&input)?;
            info!("Read {} numbers from {}", numbers.len(), input.display());

            let start = Instant::now();
            sort_parallel_with(&mut numbers, &SortConfig::new(threshold).with_max_depth(max_depth));
            let duration = start.elapsed();
            println!("Concurrent Quicksort took: {:?}", duration);

            if verify {
                verify_sorted(&numbers)?;
                info!("Verified {} numbers are in ascending order", numbers.len());
            }

            write_numbers_to_path(&output, &numbers)?;
            info!("Wrote sorted numbers to {}", output.display());
        }
        Command::Generate { output, count, seed, min, max } => {
            let (min, max) = if min <= max { (min, max) } else { (max, min) };
            let numbers = generate_numbers(count, seed, min..=max);
            write_numbers_to_path(&output, &numbers)?;
            info!("Generated {} numbers in [{}, {}] with seed {} to {}", count, min, max, seed, output.display());
        }
    }
    Ok(())
}
