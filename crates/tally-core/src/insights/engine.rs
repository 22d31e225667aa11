//! Insight Engine - runs analyzers over an expense history

use chrono::NaiveDate;

use crate::config::InsightConfig;
use crate::models::Expense;

use super::types::{AnalyzerId, Insight};
use super::{SpendingVelocityInsight, TopCategoryInsight};

/// Context provided to analyzers
pub struct AnalysisContext<'a> {
    /// Full expense history
    pub expenses: &'a [Expense],
    /// Date the analysis is evaluated at
    pub today: NaiveDate,
}

impl<'a> AnalysisContext<'a> {
    /// Create a new analysis context
    pub fn new(expenses: &'a [Expense], today: NaiveDate) -> Self {
        Self { expenses, today }
    }

    /// Create context evaluated at today's local date
    pub fn current(expenses: &'a [Expense]) -> Self {
        Self::new(expenses, chrono::Local::now().date_naive())
    }
}

/// Trait for insight analyzers
pub trait Analyzer: Send + Sync {
    /// Unique identifier for this analyzer
    fn id(&self) -> AnalyzerId;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Analyze expenses and produce insights
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight>;
}

/// The main insight engine
pub struct InsightEngine {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in analyzers and default settings
    pub fn new() -> Self {
        Self::with_config(InsightConfig::default())
    }

    /// Create an engine with the built-in analyzers
    pub fn with_config(config: InsightConfig) -> Self {
        let mut engine = Self::empty();

        // Velocity check always precedes the top-category check
        engine.register(Box::new(SpendingVelocityInsight::with_window(
            config.velocity_window_days,
            config.velocity_threshold,
        )));
        engine.register(Box::new(TopCategoryInsight::new()));

        engine
    }

    /// Create an engine with no analyzers registered
    pub fn empty() -> Self {
        Self { analyzers: vec![] }
    }

    /// Register an analyzer; it runs after those already registered
    pub fn register(&mut self, analyzer: Box<dyn Analyzer>) {
        self.analyzers.push(analyzer);
    }

    /// Run all analyzers in registration order and collect insights
    pub fn analyze_all(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut all_insights = vec![];

        for analyzer in &self.analyzers {
            let insights = analyzer.analyze(ctx);
            tracing::debug!(
                analyzer = analyzer.id().as_str(),
                count = insights.len(),
                "Insight analysis complete"
            );
            all_insights.extend(insights);
        }

        all_insights
    }

    /// Get list of registered analyzers
    pub fn analyzer_ids(&self) -> Vec<AnalyzerId> {
        self.analyzers.iter().map(|a| a.id()).collect()
    }
}
