//! Insights command implementation

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use tally_core::{AnalysisContext, Config, Insight, InsightEngine, InsightKind};

use super::{load_expense_file, print_json};

pub fn cmd_insights(
    config: &Config,
    file: &Path,
    today: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let expenses = load_expense_file(config, file)?;
    let ctx = match today {
        Some(date) => AnalysisContext::new(&expenses, date),
        None => AnalysisContext::current(&expenses),
    };

    let insights = InsightEngine::with_config(config.insights).analyze_all(&ctx);

    if json {
        return print_json(&insights);
    }

    print!("{}", render_insights(&insights));
    Ok(())
}

/// Text rendering of insights
pub fn render_insights(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return "No insights yet. Add more expenses to see spending patterns.\n".to_string();
    }

    let mut out = String::new();
    out.push('\n');
    out.push_str("💡 Insights\n");
    out.push_str("   ─────────────────────────────────────────────────────────────\n");
    for insight in insights {
        let icon = match insight.kind {
            InsightKind::Warning => "⚠️ ",
            InsightKind::Info => "ℹ️ ",
        };
        out.push_str(&format!("   {} {}\n", icon, insight.title));
        out.push_str(&format!("      {}\n", insight.message));
    }
    out
}
