//! Period summaries and per-category credit/debit totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entry::{Category, Entry, Kind};
use crate::time::DateRange;

/// Net amounts over the today/week/month windows and over everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub daily: Decimal,
    pub weekly: Decimal,
    pub monthly: Decimal,
    pub total: Decimal,
}

impl Summary {
    /// Figures in display order, labelled as the summary cards show them.
    pub fn cards(&self) -> [(&'static str, Decimal); 4] {
        [
            (DateRange::Today.label(), self.daily),
            (DateRange::Week.label(), self.weekly),
            (DateRange::Month.label(), self.monthly),
            ("Total", self.total),
        ]
    }
}

/// Sum signed values per window.
///
/// Window membership is [`DateRange::contains`], the same predicate the
/// filter uses, so a week-filtered view sums to `weekly`.
pub fn summarize(entries: &[Entry], today: NaiveDate) -> Summary {
    let summary = entries.iter().fold(Summary::default(), |mut acc, entry| {
        let value = entry.signed_value();
        if DateRange::Today.contains(entry.date, today) {
            acc.daily += value;
        }
        if DateRange::Week.contains(entry.date, today) {
            acc.weekly += value;
        }
        if DateRange::Month.contains(entry.date, today) {
            acc.monthly += value;
        }
        acc.total += value;
        acc
    });

    tracing::debug!(entries = entries.len(), total = %summary.total, "summarized entries");
    summary
}

/// Credit and debit magnitudes for one category. Both are non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub credit: Decimal,
    pub debit: Decimal,
}

impl CategoryTotals {
    pub fn get(&self, kind: Kind) -> Decimal {
        match kind {
            Kind::Credit => self.credit,
            Kind::Debit => self.debit,
        }
    }

    pub fn net(&self) -> Decimal {
        self.credit - self.debit
    }
}

/// Route each entry's magnitude into its category's credit or debit side.
///
/// Only categories that have at least one entry appear in the map.
pub fn category_totals(entries: &[Entry]) -> BTreeMap<Category, CategoryTotals> {
    let mut totals: BTreeMap<Category, CategoryTotals> = BTreeMap::new();
    for entry in entries {
        let bucket = totals.entry(entry.category).or_default();
        match entry.kind {
            Kind::Credit => bucket.credit += entry.magnitude(),
            Kind::Debit => bucket.debit += entry.magnitude(),
        }
    }
    totals
}

/// One `{category, credit, debit}` row of the category chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: Category,
    pub credit: Decimal,
    pub debit: Decimal,
}

pub fn category_rows(totals: &BTreeMap<Category, CategoryTotals>) -> Vec<CategoryRow> {
    totals
        .iter()
        .map(|(category, t)| CategoryRow {
            category: *category,
            credit: t.credit,
            debit: t.debit,
        })
        .collect()
}

/// A pie slice: one side of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: Kind,
    pub value: Decimal,
}

/// Slices for every non-zero side, credit before debit within a category.
pub fn category_slices(totals: &BTreeMap<Category, CategoryTotals>) -> Vec<ChartSlice> {
    totals
        .iter()
        .flat_map(|(category, t)| {
            [Kind::Credit, Kind::Debit]
                .into_iter()
                .filter(move |kind| !t.get(*kind).is_zero())
                .map(move |kind| ChartSlice {
                    name: format!("{category} ({kind})"),
                    category: *category,
                    kind,
                    value: t.get(kind),
                })
        })
        .collect()
}
