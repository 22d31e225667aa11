//! Spending Velocity Insight
//!
//! Counts expenses dated inside a trailing window of `window_days` calendar
//! days ending today (today included, so a 7-day window starts 6 days back)
//! and warns when the count exceeds a threshold. Future-dated expenses are
//! not counted.

use chrono::{Duration, NaiveDate};

use super::engine::{AnalysisContext, Analyzer};
use super::types::{AnalyzerId, Insight};

/// Insight that flags a burst of expenses
pub struct SpendingVelocityInsight {
    /// Window length in days (default 7)
    window_days: i64,
    /// Warn above this many expenses (default 10)
    threshold: usize,
}

impl SpendingVelocityInsight {
    pub fn new() -> Self {
        Self::with_window(7, 10)
    }

    pub fn with_window(window_days: i64, threshold: usize) -> Self {
        Self {
            window_days,
            threshold,
        }
    }

    /// First date inside the window, clamped to the earliest representable date
    pub fn window_start(&self, today: NaiveDate) -> NaiveDate {
        Duration::try_days(self.window_days.saturating_sub(1).max(0))
            .and_then(|span| today.checked_sub_signed(span))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Number of expenses inside the window
    pub fn recent_count(&self, ctx: &AnalysisContext<'_>) -> usize {
        let start = self.window_start(ctx.today);
        ctx.expenses
            .iter()
            .filter(|e| e.date >= start && e.date <= ctx.today)
            .count()
    }
}

impl Default for SpendingVelocityInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for SpendingVelocityInsight {
    fn id(&self) -> AnalyzerId {
        AnalyzerId::SpendingVelocity
    }

    fn name(&self) -> &'static str {
        "Spending Velocity"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let count = self.recent_count(ctx);
        if count <= self.threshold {
            return vec![];
        }

        vec![Insight::warning(
            "High Spending Frequency",
            format!(
                "You've made {} expenses in the last {} days. Consider reviewing your spending habits.",
                count, self.window_days
            ),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::InsightKind;
    use crate::models::{Category, Expense};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 15).unwrap()
    }

    fn expenses_days_ago(days: &[i64]) -> Vec<Expense> {
        days.iter()
            .map(|d| {
                Expense::new(
                    "Snack",
                    3.0,
                    Category::Food,
                    today() - Duration::days(*d),
                )
            })
            .collect()
    }

    #[test]
    fn test_eleven_recent_expenses_warn() {
        let expenses = expenses_days_ago(&[0, 0, 1, 1, 2, 3, 4, 5, 6, 6, 6]);
        let ctx = AnalysisContext::new(&expenses, today());

        let insights = SpendingVelocityInsight::new().analyze(&ctx);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Warning);
        assert!(insights[0].message.contains("11 expenses"));
    }

    #[test]
    fn test_ten_recent_expenses_do_not_warn() {
        let expenses = expenses_days_ago(&[0, 0, 1, 1, 2, 3, 4, 5, 6, 6]);
        let ctx = AnalysisContext::new(&expenses, today());

        assert!(SpendingVelocityInsight::new().analyze(&ctx).is_empty());
    }

    #[test]
    fn test_old_and_future_expenses_excluded() {
        // 10 inside the window, 5 just outside, 3 in the future
        let mut expenses = expenses_days_ago(&[0, 1, 1, 2, 2, 3, 4, 5, 6, 6]);
        expenses.extend(expenses_days_ago(&[7, 8, 9, 30, 365]));
        expenses.extend(expenses_days_ago(&[-1, -2, -3]));
        let ctx = AnalysisContext::new(&expenses, today());

        let analyzer = SpendingVelocityInsight::new();
        assert_eq!(analyzer.recent_count(&ctx), 10);
        assert!(analyzer.analyze(&ctx).is_empty());
    }

    #[test]
    fn test_custom_window() {
        let expenses = expenses_days_ago(&[0, 1, 2]);
        let ctx = AnalysisContext::new(&expenses, today());

        let analyzer = SpendingVelocityInsight::with_window(2, 1);
        assert_eq!(analyzer.recent_count(&ctx), 2);
        let insights = analyzer.analyze(&ctx);
        assert!(insights[0].message.contains("last 2 days"));

        let analyzer = SpendingVelocityInsight::with_window(1, 0);
        assert_eq!(analyzer.recent_count(&ctx), 1);
    }

    #[test]
    fn test_seven_day_window_spans_seven_calendar_days() {
        let analyzer = SpendingVelocityInsight::new();
        assert_eq!(
            analyzer.window_start(today()),
            NaiveDate::from_ymd_opt(2024, 8, 9).unwrap()
        );

        // Eleven expenses exactly one week back fall outside the window
        let expenses = expenses_days_ago(&[7; 11]);
        let ctx = AnalysisContext::new(&expenses, today());
        assert_eq!(analyzer.recent_count(&ctx), 0);
        assert!(analyzer.analyze(&ctx).is_empty());
    }

    #[test]
    fn test_huge_window_clamps_instead_of_overflowing() {
        let analyzer = SpendingVelocityInsight::with_window(i64::MAX, 0);
        assert_eq!(analyzer.window_start(today()), NaiveDate::MIN);

        let expenses = expenses_days_ago(&[0, 10_000]);
        let ctx = AnalysisContext::new(&expenses, today());
        assert_eq!(analyzer.recent_count(&ctx), 2);
    }
}
