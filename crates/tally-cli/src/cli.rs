//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Tally - categorize expenses and surface spending insights
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Keyword expense categorizer and spending insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.local/share/tally/config.toml, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Categorize a single expense title
    Categorize {
        /// Expense title (e.g. "Starbucks Coffee")
        title: String,

        /// Expense amount, used to pick suggestions
        #[arg(short, long, default_value = "0")]
        amount: f64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate spending insights from an expense file
    Insights {
        /// Expense file (.json or .csv)
        #[arg(short, long)]
        file: PathBuf,

        /// Evaluate as of this date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show spending per category
    Summary {
        /// Expense file (.json or .csv)
        #[arg(short, long)]
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compare stored categories with what the categorizer would pick
    Recategorize {
        /// Expense file (.json or .csv)
        #[arg(short, long)]
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config,
}
