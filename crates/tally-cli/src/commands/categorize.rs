//! Categorize and recategorize command implementations

use std::path::Path;

use anyhow::Result;
use tally_core::categorize::match_category;
use tally_core::{CategorizationResult, Categorizer, Config, RecategorizeReport};

use super::{load_expense_file, print_json, truncate};

pub fn cmd_categorize(config: &Config, title: &str, amount: f64, json: bool) -> Result<()> {
    let categorizer = Categorizer::with_thresholds(config.suggestions);
    let result = categorizer.categorize(title, amount);

    if json {
        return print_json(&result);
    }

    print!("{}", render_categorization(title, &result));
    Ok(())
}

/// Text rendering of a categorization result
pub fn render_categorization(title: &str, result: &CategorizationResult) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("🏷️  {}\n", title));
    out.push_str("   ─────────────────────────────────────────────────────────────\n");
    out.push_str(&format!("   Category:   {}\n", result.category));
    out.push_str(&format!(
        "   Confidence: {:.0}%\n",
        result.confidence * 100.0
    ));
    if let Some(m) = match_category(title) {
        out.push_str(&format!("   Matched:    {}\n", m.keywords.join(", ")));
    }
    out.push('\n');
    out.push_str("   Suggestions:\n");
    for suggestion in &result.suggestions {
        out.push_str(&format!("   • {}\n", suggestion));
    }
    out
}

pub fn cmd_recategorize(config: &Config, file: &Path, json: bool) -> Result<()> {
    let expenses = load_expense_file(config, file)?;
    let report = Categorizer::with_thresholds(config.suggestions).recategorize(&expenses);

    if json {
        return print_json(&report);
    }

    print!("{}", render_recategorize(&report));
    Ok(())
}

/// Text rendering of a recategorize report
pub fn render_recategorize(report: &RecategorizeReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("🔁 Recategorize\n");
    out.push_str("   ─────────────────────────────────────────────────────────────\n");
    out.push_str(&format!("   Processed:  {}\n", report.processed));
    out.push_str(&format!("   Agreed:     {}\n", report.agreed));
    out.push_str(&format!("   Unmatched:  {}\n", report.unmatched));
    out.push_str(&format!("   Mismatched: {}\n", report.mismatches.len()));

    if !report.mismatches.is_empty() {
        out.push('\n');
        for m in &report.mismatches {
            out.push_str(&format!(
                "   #{:<4} {:<32} {} → {} ({:.0}%)\n",
                m.index,
                truncate(&m.title, 32),
                m.stored,
                m.suggested,
                m.confidence * 100.0
            ));
        }
    }
    out
}
