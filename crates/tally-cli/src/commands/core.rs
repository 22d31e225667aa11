//! Shared command utilities

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tally_core::{Categorizer, Config, Expense};
use tracing::debug;

/// Load configuration, honoring an explicit `--config` path
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match Config::source_path(path) {
        Some(source) => debug!(source = %source.display(), "Using config file"),
        None => debug!("Using embedded default config"),
    }
    Config::load(path).context("Failed to load configuration")
}

/// Load an expense file, auto-categorizing CSV rows without a category
pub fn load_expense_file(config: &Config, path: &Path) -> Result<Vec<Expense>> {
    let categorizer = Categorizer::with_thresholds(config.suggestions);
    let expenses = tally_core::load_expenses(path, &categorizer)
        .with_context(|| format!("Failed to load expenses from {}", path.display()))?;
    debug!(count = expenses.len(), "Expenses ready for command");
    Ok(expenses)
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
