//! Insight Engine - spending insights from expense history
//!
//! Analyzers run in registration order and their output is concatenated, so
//! the order of insights is stable for a given engine.
//!
//! ## Built-in Analyzers
//!
//! - **Spending Velocity** - warns when many expenses land in a short window
//! - **Top Category** - names the category with the largest total
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::insights::{AnalysisContext, InsightEngine};
//!
//! let engine = InsightEngine::new();
//! let ctx = AnalysisContext::current(&expenses);
//! let insights = engine.analyze_all(&ctx);
//! ```

pub mod engine;
pub mod top_category;
pub mod types;
pub mod velocity;

pub use engine::{AnalysisContext, Analyzer, InsightEngine};
pub use top_category::TopCategoryInsight;
pub use types::{AnalyzerId, Insight, InsightKind};
pub use velocity::SpendingVelocityInsight;
