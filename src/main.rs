// Copyright 2026 Gridsnap Contributors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod capture;
mod cli;
mod extract;
mod guard;
mod model;
mod puzzle;
mod renderer;
mod sink;

use puzzle::Puzzle;

#[derive(Parser)]
#[command(
    name = "gridsnap",
    about = "Gridsnap — capture LinkedIn grid puzzles into solver-ready JSON",
    version,
    after_help = "Run 'gridsnap <command> --help' for details on each command."
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture a puzzle from the live LinkedIn page
    Capture {
        /// Which puzzle to capture
        puzzle: Puzzle,
        /// Navigation and readiness timeout in milliseconds
        #[arg(long, default_value = "15000")]
        timeout: u64,
        /// Directory to write the JSON file into
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Print the JSON to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
        /// Chrome user-data directory with a logged-in LinkedIn session
        #[arg(long)]
        profile: Option<String>,
    },
    /// Extract a puzzle from a saved HTML snapshot
    Parse {
        /// Which puzzle the snapshot contains
        puzzle: Puzzle,
        /// Path to the saved HTML file
        file: PathBuf,
        /// Directory to write the JSON file into
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Print the JSON to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Check environment and diagnose issues
    Doctor,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "gridsnap=debug" } else { "gridsnap=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Capture {
            puzzle,
            timeout,
            out,
            stdout,
            profile,
        } => cli::capture_cmd::run(puzzle, timeout, out, stdout, profile).await,
        Commands::Parse {
            puzzle,
            file,
            out,
            stdout,
        } => cli::parse_cmd::run(puzzle, file, out, stdout),
        Commands::Doctor => cli::doctor::run(),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "gridsnap", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    result
}
