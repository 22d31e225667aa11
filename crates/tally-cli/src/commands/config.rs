//! Config command implementation

use std::path::Path;

use anyhow::Result;
use tally_core::config::default_config_path;
use tally_core::Config;

use super::load_config;

pub fn cmd_config(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let source = Config::source_path(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());

    println!();
    println!("⚙️  Configuration");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Source:               {}", source);
    if let Some(default_path) = default_config_path() {
        println!("   Override location:    {}", default_path.display());
    }
    println!();
    println!(
        "   Velocity window:      {} days",
        config.insights.velocity_window_days
    );
    println!(
        "   Velocity threshold:   > {} expenses",
        config.insights.velocity_threshold
    );
    println!();
    println!("   Suggestion thresholds:");
    println!("   • food            ${:.2}", config.suggestions.food);
    println!("   • transport       ${:.2}", config.suggestions.transport);
    println!("   • shopping        ${:.2}", config.suggestions.shopping);
    println!("   • entertainment   ${:.2}", config.suggestions.entertainment);

    Ok(())
}
