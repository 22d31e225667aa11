//! Expense file import (JSON and CSV)

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::categorize::Categorizer;
use crate::error::{Error, Result};
use crate::models::{Category, Expense, PaymentMethod};

/// Supported expense file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseFormat {
    Json,
    Csv,
}

impl ExpenseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl std::fmt::Display for ExpenseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Load expenses from a file, choosing the parser by extension
///
/// CSV rows without a category are filled in by `categorizer`.
pub fn load_expenses(path: &Path, categorizer: &Categorizer) -> Result<Vec<Expense>> {
    let format = ExpenseFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);

    let expenses = match format {
        ExpenseFormat::Json => parse_json(reader)?,
        ExpenseFormat::Csv => parse_csv(reader, categorizer)?,
    };

    info!(
        path = %path.display(),
        format = format.as_str(),
        count = expenses.len(),
        "Loaded expenses"
    );
    Ok(expenses)
}

/// Parse a JSON array of expenses
///
/// Amounts are normalised to magnitudes, as in `parse_csv`.
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Expense>> {
    let mut expenses: Vec<Expense> = serde_json::from_reader(reader)?;
    for (i, expense) in expenses.iter_mut().enumerate() {
        expense.amount = normalize_amount(expense.amount)
            .map_err(|e| Error::Import(format!("Expense {}: {}", i, e)))?;
    }
    Ok(expenses)
}

/// Column positions resolved from the CSV header row
struct Columns {
    date: usize,
    title: usize,
    amount: usize,
    category: Option<usize>,
    payment_method: Option<usize>,
    notes: Option<usize>,
    id: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
        };
        let require = |names: &[&str]| {
            find(names).ok_or_else(|| Error::Import(format!("Missing column: {}", names[0])))
        };

        Ok(Self {
            date: require(&["date"])?,
            title: require(&["title", "description"])?,
            amount: require(&["amount"])?,
            category: find(&["category"]),
            payment_method: find(&["payment_method", "payment method"]),
            notes: find(&["notes", "note"]),
            id: find(&["id"]),
        })
    }
}

/// Parse CSV expenses
///
/// Columns are located by header name: `date`, `title` (or `description`) and
/// `amount` are required; `category`, `payment_method`, `notes` and `id` are
/// optional. Blank categories are assigned by `categorizer`.
pub fn parse_csv<R: Read>(reader: R, categorizer: &Categorizer) -> Result<Vec<Expense>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut expenses = Vec::new();
    let mut auto_categorized = 0;

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
        };
        let row_err = |e: Error| Error::Import(format!("Line {}: {}", line, e));

        let date = parse_date(record.get(columns.date).unwrap_or_default()).map_err(row_err)?;
        let title = field(Some(columns.title))
            .ok_or_else(|| Error::Import(format!("Line {}: Missing title", line)))?;
        let amount =
            parse_amount(record.get(columns.amount).unwrap_or_default()).map_err(row_err)?;

        let category = match field(columns.category) {
            Some(label) => label.parse::<Category>().unwrap_or(Category::Other),
            None => {
                auto_categorized += 1;
                categorizer.categorize(&title, amount).category
            }
        };

        let payment_method = match field(columns.payment_method) {
            Some(pm) => Some(
                pm.parse::<PaymentMethod>()
                    .map_err(|e| Error::Import(format!("Line {}: {}", line, e)))?,
            ),
            None => None,
        };

        expenses.push(Expense {
            id: field(columns.id),
            title,
            amount,
            category,
            date,
            payment_method,
            notes: field(columns.notes),
        });
    }

    debug!(
        count = expenses.len(),
        auto_categorized, "Parsed CSV expenses"
    );
    Ok(expenses)
}

/// Parse a date string (ISO or US month/day/year)
fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%m/%d/%Y", // 01/15/2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::Import(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling currency symbols and commas
///
/// Expenses are stored as positive amounts, so a leading minus or
/// accounting parentheses are dropped.
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' ', '(', ')'], "");

    let amount = cleaned
        .parse::<f64>()
        .map_err(|_| Error::Import(format!("Unable to parse amount: {}", s)))?;
    normalize_amount(amount)
}

/// Expenses store positive amounts; reject anything non-finite
fn normalize_amount(amount: f64) -> Result<f64> {
    if amount.is_finite() {
        Ok(amount.abs())
    } else {
        Err(Error::InvalidData(format!("Amount is not finite: {}", amount)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("01/15/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,234.50").unwrap(), 1234.5);
        assert_eq!(parse_amount("-12.00").unwrap(), 12.0);
        assert_eq!(parse_amount("(8.25)").unwrap(), 8.25);
        assert!(parse_amount("twelve").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_parse_csv_with_all_columns() {
        let data = "\
date,title,amount,category,payment_method,notes
2024-03-01,Weekly groceries,$82.10,food,debit_card,
03/02/2024,Movie night,24.00,Entertainment,credit card,with friends
";
        let expenses = parse_csv(data.as_bytes(), &Categorizer::new()).unwrap();

        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].category, Category::Food);
        assert_eq!(expenses[0].amount, 82.1);
        assert_eq!(expenses[0].payment_method, Some(PaymentMethod::DebitCard));
        assert_eq!(expenses[0].notes, None);
        assert_eq!(expenses[1].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(expenses[1].notes.as_deref(), Some("with friends"));
    }

    #[test]
    fn test_parse_csv_auto_categorizes_blank_category() {
        let data = "\
Description,Amount,Date,Category
UBER TRIP,18.40,2024-03-05,
Something odd,5.00,2024-03-05,
";
        let expenses = parse_csv(data.as_bytes(), &Categorizer::new()).unwrap();

        assert_eq!(expenses[0].title, "UBER TRIP");
        assert_eq!(expenses[0].category, Category::Transport);
        assert_eq!(expenses[1].category, Category::Other);
    }

    #[test]
    fn test_parse_csv_without_category_column() {
        let data = "date,title,amount\n2024-03-05,Netflix,15.99\n";
        let expenses = parse_csv(data.as_bytes(), &Categorizer::new()).unwrap();
        assert_eq!(expenses[0].category, Category::Entertainment);
    }

    #[test]
    fn test_parse_csv_errors_name_the_line() {
        let data = "date,title,amount\n2024-03-05,Lunch,12\nnot-a-date,Dinner,30\n";
        let err = parse_csv(data.as_bytes(), &Categorizer::new()).unwrap_err();
        assert!(err.to_string().contains("Line 3"), "{}", err);

        let data = "date,amount\n2024-03-05,12\n";
        let err = parse_csv(data.as_bytes(), &Categorizer::new()).unwrap_err();
        assert!(err.to_string().contains("Missing column: title"));
    }

    #[test]
    fn test_parse_json() {
        let data = r#"[
            {"id": "e1", "title": "Coffee", "amount": 4.5, "category": "food", "date": "2024-03-01"},
            {"title": "Gas", "amount": 40, "category": "transport", "date": "2024-03-02",
             "payment_method": "cash"}
        ]"#;
        let expenses = parse_json(data.as_bytes()).unwrap();

        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].id.as_deref(), Some("e1"));
        assert_eq!(expenses[1].payment_method, Some(PaymentMethod::Cash));
        assert!(parse_json("{}".as_bytes()).is_err());
    }

    #[test]
    fn test_parse_json_negative_amounts_stored_as_magnitude() {
        let data = r#"[
            {"title": "Lunch", "amount": 30, "category": "food", "date": "2024-03-01"},
            {"title": "Refund-style entry", "amount": -40, "category": "transport", "date": "2024-03-02"}
        ]"#;
        let expenses = parse_json(data.as_bytes()).unwrap();
        assert_eq!(expenses[1].amount, 40.0);

        let top = crate::summary::top_category(&expenses).unwrap();
        assert_eq!(top.category, Category::Transport);
        assert_eq!(top.total, 40.0);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExpenseFormat::from_path(Path::new("a/b.JSON")).unwrap(),
            ExpenseFormat::Json
        );
        assert_eq!(
            ExpenseFormat::from_path(Path::new("export.csv")).unwrap(),
            ExpenseFormat::Csv
        );
        assert!(matches!(
            ExpenseFormat::from_path(Path::new("notes.txt")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_expenses_from_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "date,title,amount\n2024-04-01,Pizza night,22.00").unwrap();

        let expenses = load_expenses(file.path(), &Categorizer::new()).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, Category::Food);
    }
}
