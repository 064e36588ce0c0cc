//! Plain-text rendering of the derived views.

use ledger_core::{
    category_rows, category_slices, Category, CategoryTotals, ChartSlice, DayBucket, Entry, Kind,
    SeriesBounds, Summary,
};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

/// Amounts are rounded to two places here and nowhere earlier.
pub fn money(symbol: &str, amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{symbol}{rounded:.2}")
}

pub fn render_summary(summary: &Summary, symbol: &str) -> String {
    let mut out = String::new();
    for (label, amount) in summary.cards() {
        let kind = Kind::of_net(amount);
        out.push_str(&format!(
            "{:<11} {} {:>14}  {}\n",
            label,
            kind.style().arrow,
            money(symbol, amount),
            kind
        ));
    }
    out
}

pub fn render_entries(entries: &[Entry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No expenses found\n".to_string();
    }
    let mut out = String::new();
    for e in entries {
        out.push_str(&format!(
            "{}  {:<28} {:<13} {:>6} {}{}\n",
            e.date.format("%b %-d, %Y"),
            e.title,
            e.category,
            e.kind,
            e.kind.style().sign,
            money(symbol, e.amount)
        ));
    }
    out
}

pub fn render_categories(totals: &BTreeMap<Category, CategoryTotals>, symbol: &str) -> String {
    let mut out = String::from("Category breakdown\n");
    for row in category_rows(totals) {
        out.push_str(&format!(
            "  {:<13} credit {:>12}  debit {:>12}\n",
            row.category,
            money(symbol, row.credit),
            money(symbol, row.debit)
        ));
    }
    out
}

pub fn render_slices(slices: &[ChartSlice], symbol: &str) -> String {
    let mut out = String::new();
    for s in slices {
        out.push_str(&format!("  {} {}: {}\n", s.color(), s.name, money(symbol, s.value)));
    }
    out
}

pub fn render_series(series: &[DayBucket], symbol: &str) -> String {
    let bounds = SeriesBounds::of(series);
    let mut out = format!(
        "Net daily balance (last {} days, axis {}{} .. {}{})\n",
        series.len(),
        sign_of(bounds.min),
        money(symbol, bounds.min),
        sign_of(bounds.max),
        money(symbol, bounds.max)
    );
    for b in series {
        out.push_str(&format!(
            "  {} {}  {}{}\n",
            b.day_label,
            b.date,
            sign_of(b.net_amount),
            money(symbol, b.net_amount)
        ));
    }
    out
}

fn sign_of(amount: Decimal) -> &'static str {
    if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    }
}

/// Both category views share one totals map.
pub fn render_chart(
    totals: &BTreeMap<Category, CategoryTotals>,
    series: &[DayBucket],
    symbol: &str,
) -> String {
    let mut out = render_series(series, symbol);
    out.push('\n');
    out.push_str(&render_categories(totals, symbol));
    out.push_str(&render_slices(&category_slices(totals), symbol));
    out
}
