//! Per-category spending totals

use crate::models::{CategorySpending, Expense};

/// Total and count per category, in the order categories first appear
pub fn spending_by_category(expenses: &[Expense]) -> Vec<CategorySpending> {
    let mut rows: Vec<CategorySpending> = Vec::new();

    for expense in expenses {
        match rows.iter_mut().find(|r| r.category == expense.category) {
            Some(row) => {
                row.total += expense.amount;
                row.count += 1;
            }
            None => rows.push(CategorySpending {
                category: expense.category,
                total: expense.amount,
                count: 1,
            }),
        }
    }

    rows
}

/// Category totals sorted by total, highest first
///
/// The sort is stable: equal totals keep first-seen order.
pub fn ranked(expenses: &[Expense]) -> Vec<CategorySpending> {
    let mut rows = spending_by_category(expenses);
    rows.sort_by(|a, b| b.total.total_cmp(&a.total));
    rows
}

/// Category with the highest total, or None for an empty list
///
/// On an exact tie the category seen first in `expenses` wins.
pub fn top_category(expenses: &[Expense]) -> Option<CategorySpending> {
    spending_by_category(expenses)
        .into_iter()
        .fold(None, |best: Option<CategorySpending>, row| match best {
            Some(b) if b.total >= row.total => Some(b),
            _ => Some(row),
        })
}

/// Sum of all expense amounts
pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}
