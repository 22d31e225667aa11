//! Keyword categorizer for expense titles
//!
//! Titles are matched by lower-cased substring containment against an ordered
//! keyword table. The first category with at least one hit wins, so table
//! order decides titles that mention several categories ("coffee" before
//! "uber" resolves to food). Categorization never fails: a title with no hits
//! becomes `other` at fixed low confidence.

use serde::Serialize;
use tracing::debug;

use crate::config::SuggestionConfig;
use crate::models::{Category, Expense};

/// Ordered (category, keywords) table. Order is the tie-break.
const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "restaurant",
            "cafe",
            "coffee",
            "pizza",
            "burger",
            "lunch",
            "dinner",
            "breakfast",
            "grocery",
            "groceries",
            "bakery",
            "sushi",
            "food",
        ],
    ),
    (
        Category::Transport,
        &[
            "uber", "lyft", "taxi", "fuel", "gas", "parking", "train", "metro", "toll", "transit",
        ],
    ),
    (
        Category::Shopping,
        &[
            "amazon", "walmart", "target", "mall", "store", "shop", "clothing", "shoes", "ebay",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "netflix", "spotify", "movie", "cinema", "concert", "theater", "hulu", "disney",
            "game",
        ],
    ),
    (
        Category::Utilities,
        &[
            "electric", "water", "internet", "phone", "utility", "rent", "insurance", "cable",
        ],
    ),
    (
        Category::Healthcare,
        &[
            "pharmacy", "doctor", "hospital", "clinic", "dental", "medical", "gym",
        ],
    ),
    (
        Category::Education,
        &["tuition", "course", "book", "school", "udemy", "university"],
    ),
    (
        Category::Travel,
        &["hotel", "airbnb", "flight", "airline", "vacation"],
    ),
];

const BASE_CONFIDENCE: f64 = 0.6;
const CONFIDENCE_PER_MATCH: f64 = 0.15;
const MAX_CONFIDENCE: f64 = 0.95;
/// Confidence reported when nothing matched
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

const FALLBACK_SUGGESTION: &str = "Track this expense to understand your spending patterns";

/// Result of categorizing a single expense title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizationResult {
    pub category: Category,
    /// In [0, 1]
    pub confidence: f64,
    pub suggestions: Vec<String>,
}

/// First table entry that matched a title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordMatch {
    pub category: Category,
    /// Matched keywords, in table order
    pub keywords: Vec<&'static str>,
}

/// Find the first category in table order with any keyword in the title
pub fn match_category(title: &str) -> Option<KeywordMatch> {
    let title = title.to_lowercase();

    KEYWORD_TABLE.iter().find_map(|(category, keywords)| {
        let hits: Vec<&'static str> = keywords
            .iter()
            .copied()
            .filter(|k| title.contains(k))
            .collect();
        (!hits.is_empty()).then(|| KeywordMatch {
            category: *category,
            keywords: hits,
        })
    })
}

/// Confidence for a category matched by `match_count` keywords
pub fn confidence_for(match_count: usize) -> f64 {
    if match_count == 0 {
        return FALLBACK_CONFIDENCE;
    }
    (BASE_CONFIDENCE + CONFIDENCE_PER_MATCH * match_count as f64).min(MAX_CONFIDENCE)
}

/// Keywords the categorizer knows for a category (empty for `other`)
pub fn keywords_for(category: Category) -> &'static [&'static str] {
    KEYWORD_TABLE
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, k)| *k)
        .unwrap_or(&[])
}

/// Canned advice for a category, split on whether the amount is above threshold
fn canned_suggestions(category: Category, above_threshold: bool) -> &'static [&'static str] {
    match (category, above_threshold) {
        (Category::Food, true) => &[
            "Consider cooking at home more often",
            "Look for restaurant deals and happy hours",
        ],
        (Category::Food, false) => &[
            "Great job keeping food costs reasonable",
            "Keep an eye on small daily coffee and snack purchases",
        ],
        (Category::Transport, true) => &[
            "Consider public transport or carpooling",
            "Compare ride-share prices before booking",
        ],
        (Category::Transport, false) => &["Walking or cycling can save money on short trips"],
        (Category::Shopping, true) => &[
            "Wait 24 hours before making large purchases",
            "Compare prices across retailers",
        ],
        (Category::Shopping, false) => &["Use a shopping list to avoid impulse buys"],
        (Category::Entertainment, true) => &[
            "Review your subscriptions for services you no longer use",
            "Look for free local events",
        ],
        (Category::Entertainment, false) => &["Entertainment spending looks balanced"],
        _ => &[FALLBACK_SUGGESTION],
    }
}

/// Keyword categorizer with configurable suggestion thresholds
#[derive(Debug, Clone, Default)]
pub struct Categorizer {
    thresholds: SuggestionConfig,
}

impl Categorizer {
    /// Create a categorizer with the default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a categorizer with explicit suggestion thresholds
    pub fn with_thresholds(thresholds: SuggestionConfig) -> Self {
        Self { thresholds }
    }

    /// Categorize an expense title
    pub fn categorize(&self, title: &str, amount: f64) -> CategorizationResult {
        let (category, confidence) = match match_category(title) {
            Some(m) => (m.category, confidence_for(m.keywords.len())),
            None => (Category::Other, FALLBACK_CONFIDENCE),
        };

        debug!(
            title,
            category = category.as_str(),
            confidence,
            "Categorized expense"
        );

        CategorizationResult {
            category,
            confidence,
            suggestions: self.suggestions(category, amount),
        }
    }

    /// Suggestions for a category at a given amount
    pub fn suggestions(&self, category: Category, amount: f64) -> Vec<String> {
        let list: &[&str] = match self.thresholds.threshold_for(category) {
            Some(threshold) => canned_suggestions(category, amount > threshold),
            None => &[FALLBACK_SUGGESTION],
        };
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Compare stored categories against what the matcher would choose
    ///
    /// Expenses are not modified.
    pub fn recategorize(&self, expenses: &[Expense]) -> RecategorizeReport {
        let mut report = RecategorizeReport::default();

        for (index, expense) in expenses.iter().enumerate() {
            report.processed += 1;
            let result = self.categorize(&expense.title, expense.amount);

            if result.category == Category::Other {
                report.unmatched += 1;
            }

            if result.category == expense.category {
                report.agreed += 1;
            } else if result.category != Category::Other {
                report.mismatches.push(Mismatch {
                    index,
                    title: expense.title.clone(),
                    stored: expense.category,
                    suggested: result.category,
                    confidence: result.confidence,
                });
            }
        }

        debug!(
            processed = report.processed,
            agreed = report.agreed,
            mismatches = report.mismatches.len(),
            "Recategorize complete"
        );
        report
    }
}

/// Categorize with the default suggestion thresholds
pub fn categorize(title: &str, amount: f64) -> CategorizationResult {
    Categorizer::new().categorize(title, amount)
}

/// Outcome of running the matcher over stored expenses
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecategorizeReport {
    pub processed: usize,
    /// Stored category equals the matcher's choice
    pub agreed: usize,
    /// Matcher found no keyword
    pub unmatched: usize,
    /// Matcher confidently disagrees with the stored category
    pub mismatches: Vec<Mismatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    /// Position in the input slice
    pub index: usize,
    pub title: String,
    pub stored: Category,
    pub suggested: Category,
    pub confidence: f64,
}
