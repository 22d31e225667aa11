//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (config and expense file loading, JSON output)
//! - `categorize` - Single-title categorization and batch recategorize
//! - `insights` - Spending insights
//! - `summary` - Per-category spending totals
//! - `config` - Effective configuration display

pub mod categorize;
pub mod config;
pub mod core;
pub mod insights;
pub mod summary;

// Re-export command functions for main.rs
pub use categorize::*;
pub use config::*;
pub use self::core::*;
pub use insights::*;
pub use summary::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
