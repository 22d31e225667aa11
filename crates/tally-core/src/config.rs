//! Configuration for the categorizer and insight engine
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for override (explicit path, or ~/.local/share/tally/config.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::Category;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/tally.toml");

/// Longest accepted velocity window (about a century)
const MAX_VELOCITY_WINDOW_DAYS: i64 = 36_500;

/// Settings for the spending velocity insight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsightConfig {
    /// Length of the trailing window in days
    pub velocity_window_days: i64,
    /// Warn when the window holds more than this many expenses
    pub velocity_threshold: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            velocity_window_days: 7,
            velocity_threshold: 10,
        }
    }
}

/// Amount thresholds that switch between the high and low suggestion lists
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SuggestionConfig {
    pub food: f64,
    pub transport: f64,
    pub shopping: f64,
    pub entertainment: f64,
}

impl SuggestionConfig {
    /// Threshold for a category, or None if it has no canned suggestions
    pub fn threshold_for(&self, category: Category) -> Option<f64> {
        match category {
            Category::Food => Some(self.food),
            Category::Transport => Some(self.transport),
            Category::Shopping => Some(self.shopping),
            Category::Entertainment => Some(self.entertainment),
            _ => None,
        }
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            food: 50.0,
            transport: 30.0,
            shopping: 100.0,
            entertainment: 50.0,
        }
    }
}

/// Effective configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Config {
    pub insights: InsightConfig,
    pub suggestions: SuggestionConfig,
}

impl Config {
    /// Load configuration, preferring an override file over embedded defaults
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let (content, source) = match resolve_path(override_path) {
            Some(path) => {
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                (content, path.display().to_string())
            }
            None => (DEFAULT_CONFIG.to_string(), "embedded defaults".to_string()),
        };

        debug!(source = %source, "Loading config");
        parse_config(&content)
    }

    /// The file `load` would read, if any
    pub fn source_path(override_path: Option<&Path>) -> Option<PathBuf> {
        resolve_path(override_path)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally").join("config.toml"))
}

fn resolve_path(override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        warn!(path = %path.display(), "Config file not found, using defaults");
        return None;
    }

    default_config_path().filter(|p| p.exists())
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    insights: Option<RawInsights>,
    suggestions: Option<HashMap<String, f64>>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    velocity_window_days: Option<i64>,
    velocity_threshold: Option<usize>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = Config::default();

    if let Some(insights) = raw.insights {
        if let Some(days) = insights.velocity_window_days {
            if !(1..=MAX_VELOCITY_WINDOW_DAYS).contains(&days) {
                return Err(Error::InvalidData(format!(
                    "velocity_window_days must be between 1 and {}, got {}",
                    MAX_VELOCITY_WINDOW_DAYS, days
                )));
            }
            config.insights.velocity_window_days = days;
        }
        if let Some(threshold) = insights.velocity_threshold {
            config.insights.velocity_threshold = threshold;
        }
    }

    if let Some(suggestions) = raw.suggestions {
        for (key, amount) in suggestions {
            if amount < 0.0 {
                return Err(Error::InvalidData(format!(
                    "Suggestion threshold for '{}' must be non-negative",
                    key
                )));
            }
            let slot = match key.parse::<Category>() {
                Ok(Category::Food) => &mut config.suggestions.food,
                Ok(Category::Transport) => &mut config.suggestions.transport,
                Ok(Category::Shopping) => &mut config.suggestions.shopping,
                Ok(Category::Entertainment) => &mut config.suggestions.entertainment,
                _ => {
                    warn!(key = %key, "Ignoring suggestion threshold for unsupported category");
                    continue;
                }
            };
            *slot = amount;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_default_config() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config(
            r#"
            [insights]
            velocity_threshold = 3

            [suggestions]
            food = 20.0
            "#,
        )
        .unwrap();

        assert_eq!(config.insights.velocity_threshold, 3);
        assert_eq!(config.insights.velocity_window_days, 7);
        assert_eq!(config.suggestions.food, 20.0);
        assert_eq!(config.suggestions.shopping, 100.0);
    }

    #[test]
    fn test_unsupported_suggestion_key_ignored() {
        let config = parse_config("[suggestions]\ntravel = 500.0\n").unwrap();
        assert_eq!(config.suggestions, SuggestionConfig::default());
        assert_eq!(config.suggestions.threshold_for(Category::Travel), None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            parse_config("[insights]\nvelocity_window_days = 0\n"),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            parse_config("[suggestions]\nfood = -1.0\n"),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            parse_config("[insights\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_oversized_velocity_window_rejected() {
        assert!(matches!(
            parse_config("[insights]\nvelocity_window_days = 100000000\n"),
            Err(Error::InvalidData(_))
        ));

        let config = parse_config("[insights]\nvelocity_window_days = 36500\n").unwrap();
        let today = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let expenses = vec![crate::models::Expense::new(
            "Lunch",
            10.0,
            Category::Food,
            today,
        )];
        let insights = crate::insights::InsightEngine::with_config(config.insights)
            .analyze_all(&crate::insights::AnalysisContext::new(&expenses, today));
        assert_eq!(insights.len(), 1);
    }

    #[test]
    fn test_load_from_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[insights]\nvelocity_window_days = 14").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.insights.velocity_window_days, 14);
        assert_eq!(
            Config::source_path(Some(file.path())).as_deref(),
            Some(file.path())
        );
    }

    #[test]
    fn test_missing_override_falls_back_to_defaults() {
        let path = Path::new("/nonexistent/tally/config.toml");
        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config, Config::default());
        assert!(Config::source_path(Some(path)).is_none());
    }
}
