//! Tally Core Library
//!
//! Shared functionality for the Tally expense tracker:
//! - Expense domain models
//! - Keyword categorizer with canned spending suggestions
//! - Insight engine (spending velocity, top category)
//! - Per-category spending summaries
//! - JSON/CSV expense import
//! - TOML configuration with embedded defaults

pub mod categorize;
pub mod config;
pub mod error;
pub mod import;
pub mod insights;
pub mod models;
pub mod summary;

pub use categorize::{
    categorize, CategorizationResult, Categorizer, KeywordMatch, Mismatch, RecategorizeReport,
};
pub use config::{Config, InsightConfig, SuggestionConfig};
pub use error::{Error, Result};
pub use import::{load_expenses, parse_csv, parse_json, ExpenseFormat};
pub use insights::{AnalysisContext, Analyzer, Insight, InsightEngine, InsightKind};
pub use models::{Category, CategorySpending, Expense, PaymentMethod};
