//! Trailing daily net series for the trend chart.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;

pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// One day of the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    #[serde(rename = "dayLabel")]
    pub day_label: String,
    #[serde(rename = "netAmount")]
    pub net_amount: Decimal,
}

/// Net signed value per day for the `window_days` days ending on `today`,
/// oldest first.
///
/// Always returns exactly `window_days` buckets; days without entries are zero.
pub fn daily_series(entries: &[Entry], today: NaiveDate, window_days: usize) -> Vec<DayBucket> {
    let oldest = today
        .checked_sub_days(Days::new(window_days.saturating_sub(1) as u64))
        .unwrap_or(NaiveDate::MIN);

    let mut nets = vec![Decimal::ZERO; window_days];
    for entry in entries {
        if entry.date < oldest || entry.date > today {
            continue;
        }
        let offset = (entry.date - oldest).num_days() as usize;
        if let Some(slot) = nets.get_mut(offset) {
            *slot += entry.signed_value();
        }
    }

    nets.into_iter()
        .enumerate()
        .map(|(offset, net_amount)| {
            let date = oldest.checked_add_days(Days::new(offset as u64)).unwrap_or(today);
            DayBucket {
                date,
                day_label: date.format("%a").to_string(),
                net_amount,
            }
        })
        .collect()
}

/// Y-axis range for the series: the data extremes with zero included,
/// padded by 10% of the span, or by 100 when the span is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesBounds {
    pub min: Decimal,
    pub max: Decimal,
}

impl SeriesBounds {
    pub fn of(series: &[DayBucket]) -> Self {
        let (low, high) = series.iter().fold((Decimal::ZERO, Decimal::ZERO), |(lo, hi), b| {
            (lo.min(b.net_amount), hi.max(b.net_amount))
        });
        let span = (high - low).abs();
        let padding = if span.is_zero() {
            Decimal::ONE_HUNDRED
        } else {
            span * Decimal::new(1, 1)
        };
        Self {
            min: low - padding,
            max: high + padding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Category, Kind};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry(amount: i64, kind: Kind, date: NaiveDate) -> Entry {
        Entry::new("id", "title", Decimal::new(amount, 0), Category::Food, date, kind)
    }

    #[test]
    fn test_series_shape_and_labels() {
        // 2026-03-11 is a Wednesday
        let series = daily_series(&[], d(2026, 3, 11), DEFAULT_WINDOW_DAYS);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, d(2026, 3, 5));
        assert_eq!(series[6].date, d(2026, 3, 11));
        let labels: Vec<&str> = series.iter().map(|b| b.day_label.as_str()).collect();
        assert_eq!(labels, vec!["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"]);
        assert!(series.iter().all(|b| b.net_amount.is_zero()));
    }

    #[test]
    fn test_series_nets_per_day() {
        let today = d(2026, 3, 11);
        let entries = vec![
            entry(100, Kind::Debit, today),
            entry(30, Kind::Credit, today),
            entry(40, Kind::Credit, d(2026, 3, 5)),
            // outside the window on both sides
            entry(999, Kind::Credit, d(2026, 3, 4)),
            entry(999, Kind::Credit, d(2026, 3, 12)),
        ];
        let series = daily_series(&entries, today, 7);
        assert_eq!(series[0].net_amount, Decimal::new(40, 0));
        assert_eq!(series[6].net_amount, Decimal::new(-70, 0));
        let sum: Decimal = series.iter().map(|b| b.net_amount).sum();
        assert_eq!(sum, Decimal::new(-30, 0));
    }

    #[test]
    fn test_series_window_lengths() {
        let today = d(2026, 1, 2);
        assert!(daily_series(&[], today, 0).is_empty());
        assert_eq!(daily_series(&[], today, 1)[0].date, today);
        let month = daily_series(&[], today, 30);
        assert_eq!(month.len(), 30);
        assert_eq!(month[0].date, d(2025, 12, 4));
    }

    #[test]
    fn test_bounds_include_zero_and_pad() {
        let today = d(2026, 3, 11);
        let series = daily_series(&[entry(200, Kind::Credit, today)], today, 7);
        let bounds = SeriesBounds::of(&series);
        assert_eq!(bounds.min, Decimal::new(-20, 0));
        assert_eq!(bounds.max, Decimal::new(220, 0));

        let flat = SeriesBounds::of(&daily_series(&[], today, 7));
        assert_eq!(flat, SeriesBounds { min: Decimal::new(-100, 0), max: Decimal::new(100, 0) });
    }
}
