//! Summary command implementation

use std::path::Path;

use anyhow::Result;
use tally_core::summary::{ranked, total_spent};
use tally_core::{CategorySpending, Config};

use super::{load_expense_file, print_json};

pub fn cmd_summary(config: &Config, file: &Path, json: bool) -> Result<()> {
    let expenses = load_expense_file(config, file)?;
    let rows = ranked(&expenses);

    if json {
        return print_json(&rows);
    }

    print!("{}", render_summary(&rows, total_spent(&expenses)));
    Ok(())
}

/// Text rendering of category totals with each category's share
pub fn render_summary(rows: &[CategorySpending], total: f64) -> String {
    if rows.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut out = String::new();
    out.push('\n');
    out.push_str("📊 Spending by category\n");
    out.push_str("   ─────────────────────────────────────────────────────────────\n");
    for row in rows {
        let share = if total > 0.0 {
            row.total / total * 100.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "   {:<14} ${:>10.2}  {:>5.1}%  ({} expenses)\n",
            row.category.as_str(),
            row.total,
            share,
            row.count
        ));
    }
    out.push_str("   ─────────────────────────────────────────────────────────────\n");
    out.push_str(&format!("   {:<14} ${:>10.2}\n", "total", total));
    out
}
