//! Tally CLI - expense categorizer and spending insights
//!
//! Usage:
//!   tally categorize "Starbucks Coffee" --amount 5.50
//!   tally insights --file expenses.csv
//!   tally summary --file expenses.json
//!   tally recategorize --file expenses.json

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Categorize {
            title,
            amount,
            json,
        } => {
            let config = commands::load_config(config_path)?;
            commands::cmd_categorize(&config, &title, amount, json)
        }
        Commands::Insights { file, today, json } => {
            let config = commands::load_config(config_path)?;
            commands::cmd_insights(&config, &file, today, json)
        }
        Commands::Summary { file, json } => {
            let config = commands::load_config(config_path)?;
            commands::cmd_summary(&config, &file, json)
        }
        Commands::Recategorize { file, json } => {
            let config = commands::load_config(config_path)?;
            commands::cmd_recategorize(&config, &file, json)
        }
        Commands::Config => commands::cmd_config(config_path),
    }
}
