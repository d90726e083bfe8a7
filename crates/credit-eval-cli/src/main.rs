mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::batch::BatchArgs;
use commands::evaluate::EvaluateArgs;
use commands::generate::GenerateArgs;

/// Manual credit-eligibility scoring
#[derive(Parser)]
#[command(
    name = "cep",
    version,
    about = "Manual credit-eligibility scoring",
    long_about = "Score borrower financial data with decimal precision and \
                  classify eligibility and risk. Supports single-borrower \
                  evaluation, batch sessions, and synthetic demo batches."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single borrower and report eligibility
    Evaluate(EvaluateArgs),
    /// Evaluate a batch of borrowers as one session
    Batch(BatchArgs),
    /// Generate and rank synthetic borrowers for demo analytics
    Generate(GenerateArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Evaluate(args) => commands::evaluate::run_evaluate(args),
        Commands::Batch(args) => commands::batch::run_batch(args),
        Commands::Generate(args) => commands::generate::run_generate(args),
        Commands::Version => {
            println!("cep {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
