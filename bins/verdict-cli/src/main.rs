mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "verdict-cli")]
#[command(about = "Verdict CLI - Run candidate solutions against task manifests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a solution against a task manifest
    Run {
        /// Path to the task manifest (JSON)
        #[arg(short, long)]
        task: PathBuf,

        /// Path to the candidate solution payload
        #[arg(short, long)]
        solution: PathBuf,

        /// Print the submission as JSON instead of the text report
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Write a sample task manifest
    Init {
        /// Directory to place the sample manifest in
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            task,
            solution,
            json,
        } => commands::run(&task, &solution, json),
        Commands::Init { path } => commands::init(&path),
    }
}
