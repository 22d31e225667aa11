//! Top Category Insight
//!
//! Names the category with the largest total across the whole history.

use crate::summary;

use super::engine::{AnalysisContext, Analyzer};
use super::types::{AnalyzerId, Insight};

/// Insight naming the biggest spending category
#[derive(Default)]
pub struct TopCategoryInsight;

impl TopCategoryInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for TopCategoryInsight {
    fn id(&self) -> AnalyzerId {
        AnalyzerId::TopCategory
    }

    fn name(&self) -> &'static str {
        "Top Category"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let Some(top) = summary::top_category(ctx.expenses) else {
            return vec![];
        };

        vec![Insight::info(
            "Top Spending Category",
            format!(
                "Your highest spending category is {} with ${:.2}",
                top.category, top.total
            ),
        )]
    }
}
