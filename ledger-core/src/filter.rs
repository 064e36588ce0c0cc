//! Filtered, newest-first views over an entry snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entry::{Category, Entry};
use crate::error::LedgerError;
use crate::time::DateRange;

/// Category restriction: either every category or exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = LedgerError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.pad("All"),
            CategoryFilter::Only(c) => f.pad(c.as_str()),
        }
    }
}

/// What the list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub category: CategoryFilter,
    #[serde(rename = "dateRange")]
    pub date_range: DateRange,
}

impl FilterOptions {
    pub fn new(category: CategoryFilter, date_range: DateRange) -> Self {
        Self { category, date_range }
    }

    pub fn matches(&self, entry: &Entry, today: NaiveDate) -> bool {
        self.category.matches(entry.category) && self.date_range.contains(entry.date, today)
    }
}

/// Entries matching `options`, most recent date first.
///
/// The sort is stable, so entries sharing a date keep their input order and
/// filtering an already filtered view returns it unchanged.
pub fn filter(entries: &[Entry], options: &FilterOptions, today: NaiveDate) -> Vec<Entry> {
    let mut out: Vec<Entry> = entries
        .iter()
        .filter(|e| options.matches(e, today))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));

    tracing::debug!(
        input = entries.len(),
        kept = out.len(),
        category = %options.category,
        range = options.date_range.as_str(),
        "filtered entries"
    );
    out
}

/// The first `limit` entries of the filtered view.
pub fn recent(entries: &[Entry], options: &FilterOptions, today: NaiveDate, limit: usize) -> Vec<Entry> {
    let mut out = filter(entries, options, today);
    out.truncate(limit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Kind;
    use rust_decimal::Decimal;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry(id: &str, category: Category, date: NaiveDate) -> Entry {
        Entry::new(id, id, Decimal::new(10, 0), category, date, Kind::Debit)
    }

    fn ids(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_filter_sorts_newest_first() {
        let today = d(2026, 3, 11);
        let entries = vec![
            entry("old", Category::Food, d(2026, 1, 2)),
            entry("new", Category::Food, d(2026, 3, 10)),
            entry("mid", Category::Transport, d(2026, 2, 20)),
        ];
        let out = filter(&entries, &FilterOptions::default(), today);
        assert_eq!(ids(&out), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_filter_by_category_and_range() {
        let today = d(2026, 3, 11);
        let entries = vec![
            entry("food-today", Category::Food, today),
            entry("food-old", Category::Food, d(2026, 1, 2)),
            entry("bus-today", Category::Transport, today),
        ];
        let opts = FilterOptions::new(CategoryFilter::Only(Category::Food), DateRange::Week);
        assert_eq!(ids(&filter(&entries, &opts, today)), vec!["food-today"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let today = d(2026, 3, 11);
        let entries = vec![
            entry("a", Category::Food, today),
            entry("b", Category::Food, today),
            entry("c", Category::Food, today),
        ];
        let out = filter(&entries, &FilterOptions::default(), today);
        assert_eq!(ids(&out), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter(&[], &FilterOptions::default(), d(2026, 3, 11)).is_empty());
    }

    #[test]
    fn test_recent_truncates() {
        let today = d(2026, 3, 11);
        let entries: Vec<Entry> = (1..=9)
            .map(|day| entry(&format!("e{day}"), Category::Food, d(2026, 3, day)))
            .collect();
        let out = recent(&entries, &FilterOptions::default(), today, 5);
        assert_eq!(ids(&out), vec!["e9", "e8", "e7", "e6", "e5"]);
    }

    #[test]
    fn test_filter_options_wire_shape() {
        let opts: FilterOptions =
            serde_json::from_str(r#"{"category":"All","dateRange":"month"}"#).unwrap();
        assert_eq!(opts, FilterOptions::new(CategoryFilter::All, DateRange::Month));

        let opts: FilterOptions =
            serde_json::from_str(r#"{"category":"Education","dateRange":"today"}"#).unwrap();
        assert_eq!(opts.category, CategoryFilter::Only(Category::Education));

        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"{"category":"Education","dateRange":"today"}"#);

        assert!(serde_json::from_str::<FilterOptions>(r#"{"category":"Pets","dateRange":"all"}"#).is_err());
    }
}
