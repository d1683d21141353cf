//! Addrmatch command line interface.
//!
//! Fuzzy address matching for trader identity verification: compare a pair
//! of addresses, inspect normalization and tokenization, or screen a file
//! of pairs in bulk.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod align;
mod batch;
mod compare;
mod distance;
mod models;
mod normalize;
mod output;
mod phonetic;
mod token;

use models::{MatchParams, Token};
use output::{print_reports, print_summary, write_csv_file, write_json_file};
use phonetic::DoubleMetaphoneEncoder;

#[derive(Parser)]
#[command(name = "addrmatch")]
#[command(about = "Fuzzy address matching for trader identity verification")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Output format for batch screening results
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// JSON array of reports
    Json,
    /// CSV file
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two addresses and print their similarity
    Compare {
        /// First address (registry side)
        address_a: String,

        /// Second address (caller-supplied)
        address_b: String,

        /// Similarity threshold [default: 0.7]
        #[arg(long)]
        threshold: Option<f64>,

        /// Print the full report as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Normalize an address and print the result
    Normalize {
        /// Address text
        text: String,
    },

    /// Show the token breakdown of an address
    Tokens {
        /// Address text
        text: String,
    },

    /// Screen a file of address pairs
    Batch {
        /// Path to a JSON array of {id?, address_a, address_b} records
        #[arg(long)]
        input: PathBuf,

        /// Output file path
        #[arg(long)]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Similarity threshold [default: 0.7]
        #[arg(long)]
        threshold: Option<f64>,

        /// Suppress progress output
        #[arg(long)]
        quiet: bool,

        /// Print first N reports to console
        #[arg(long)]
        show: Option<usize>,
    },

    /// Benchmark comparison performance
    Benchmark {
        /// Number of comparison iterations
        #[arg(long, default_value = "10000")]
        iterations: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            address_a,
            address_b,
            threshold,
            json,
        } => {
            let defaults = MatchParams::default();
            let params = MatchParams {
                threshold: threshold.unwrap_or(defaults.threshold),
            };

            let report = compare::report(&address_a, &address_b, &params);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Similarity: {:.4}", report.similarity);
                println!("Threshold:  {:.2}", report.threshold);
                println!("Match:      {}", if report.matched { "yes" } else { "no" });
            }
        }

        Commands::Normalize { text } => {
            println!("{}", normalize::normalize(&text));
        }

        Commands::Tokens { text } => {
            let encoder = DoubleMetaphoneEncoder;
            let normalized = normalize::normalize(&text);
            for tok in token::tokenize(&normalized, &encoder) {
                match tok {
                    Token::Word { text, codes } => {
                        println!("word     {:<24} {}", text, codes.join(" "))
                    }
                    Token::Literal { text } => println!("literal  {}", text),
                }
            }
        }

        Commands::Batch {
            input,
            output,
            format,
            threshold,
            quiet,
            show,
        } => {
            let defaults = MatchParams::default();
            let params = MatchParams {
                threshold: threshold.unwrap_or(defaults.threshold),
            };

            let reports = batch::screen_file(&input, &params, !quiet)?;

            match format {
                OutputFormat::Json => write_json_file(&reports, &output)?,
                OutputFormat::Csv => write_csv_file(&reports, &output)?,
            }

            if !quiet {
                print_summary(&reports);
                eprintln!("\nOutput: {}", output.display());
            }

            if let Some(limit) = show {
                println!("\n=== Sample Reports ===");
                print_reports(&reports, Some(limit));
            }
        }

        Commands::Benchmark { iterations } => {
            run_benchmark(iterations);
        }
    }

    Ok(())
}

/// Run a comparison benchmark to measure throughput.
fn run_benchmark(iterations: usize) {
    use std::time::Instant;

    println!("=== Comparison Benchmark ===");
    println!("Iterations: {}", iterations);

    let cases = [
        (
            "identical",
            "Santander Platz 1 Monchengladbach 41061",
            "Santander Platz 1 Monchengladbach 41061",
        ),
        (
            "near match",
            "Santander-Platz 1 Mönchengladbach 41061",
            "Santander Platz 1 Monchengladbach 41061",
        ),
        (
            "unrelated",
            "I am a great big rabbit",
            "Santander UK plc Group Taxation Narborough LE19 0AL Leicester",
        ),
    ];

    for (label, a, b) in cases {
        println!("\n{} pair:", label);
        let start = Instant::now();
        for _ in 0..iterations {
            let _ = compare::compare(a, b);
        }
        let elapsed = start.elapsed();
        let per_compare = elapsed.as_secs_f64() / iterations as f64;
        println!("  Total time: {:.3}s", elapsed.as_secs_f64());
        println!("  Per comparison: {:.3}ms", per_compare * 1000.0);
        println!("  Comparisons/sec: {:.0}", 1.0 / per_compare);
    }
}
