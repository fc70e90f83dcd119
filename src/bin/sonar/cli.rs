//! CLI argument definitions for sonar

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sonar")]
#[command(about = "Staging-system jump-range tracker")]
#[command(version)]
pub struct Cli {
    /// Path to the sonar database file
    #[arg(long, global = true, default_value = "sonar.redb")]
    pub db: PathBuf,

    /// Path to the star-system dataset (only read on first run)
    #[arg(long, global = true, default_value = "starmap.csv")]
    pub dataset: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print catalog information
    Info,

    /// Report declared stagings within range of a system
    Check(CheckArgs),

    /// Manage the staging registry
    Stagings(StagingsArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Current system, by name (case-insensitive)
    pub system: String,

    /// Comma-separated range classes: blops,super,capital,industry
    #[arg(long, default_value = "blops")]
    pub ranges: String,
}

#[derive(Parser)]
pub struct StagingsArgs {
    #[command(subcommand)]
    pub command: StagingsCommands,
}

#[derive(Subcommand)]
pub enum StagingsCommands {
    /// Print the registry as name:owner lines
    Show,

    /// Replace the registry from name:owner lines ("-" reads stdin)
    Import {
        /// Input file, or "-" for stdin
        input: String,
    },
}
