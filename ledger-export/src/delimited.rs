//! CSV rendering of a snapshot, and reading an export back.
//!
//! Layout:
//! Date,Title,Category,Type,Amount
//! 2026-03-04,Lunch,Food,Debit,12.50

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use ledger_core::{Category, Entry, Kind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const EXPORT_HEADER: [&str; 5] = ["Date", "Title", "Category", "Type", "Amount"];

/// One exported line. `amount` is the unsigned magnitude; `kind` carries direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "Type")]
    pub kind: Kind,
    /// Read back as text so scale and precision survive.
    #[serde(rename = "Amount", with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

impl From<&Entry> for ExportRow {
    fn from(entry: &Entry) -> Self {
        Self {
            date: entry.date,
            title: entry.title.clone(),
            category: entry.category,
            kind: entry.kind,
            amount: entry.amount,
        }
    }
}

/// Render entries as CSV, one row per entry in the order given.
///
/// Fields containing a comma, quote or line break are quoted; quotes inside
/// are doubled.
pub fn to_delimited_text(entries: &[Entry]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    wtr.write_record(EXPORT_HEADER)?;
    for entry in entries {
        wtr.serialize(ExportRow::from(entry))
            .with_context(|| format!("serializing entry {}", entry.id))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv buffer: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Parse text produced by [`to_delimited_text`].
pub fn read_delimited_text(text: &str) -> Result<Vec<ExportRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers().context("reading header row")?;
    if headers.iter().ne(EXPORT_HEADER) {
        bail!("unexpected header row: {:?}", headers.iter().collect::<Vec<_>>());
    }

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let row: ExportRow = result.with_context(|| format!("row {}", i + 1))?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry(id: &str, title: &str, amount: Decimal, kind: Kind, date: NaiveDate) -> Entry {
        Entry::new(id, title, amount, Category::Food, date, kind)
    }

    #[test]
    fn test_empty_snapshot_is_header_only() {
        assert_eq!(to_delimited_text(&[]).unwrap(), "Date,Title,Category,Type,Amount\n");
    }

    #[test]
    fn test_rows_keep_input_order_and_raw_amount() {
        let entries = vec![
            entry("1", "Lunch", Decimal::new(1250, 2), Kind::Debit, d(2026, 3, 1)),
            entry("2", "Refund", Decimal::new(5, 0), Kind::Credit, d(2026, 3, 9)),
        ];
        let text = to_delimited_text(&entries).unwrap();
        assert_eq!(
            text,
            "Date,Title,Category,Type,Amount\n\
             2026-03-01,Lunch,Food,Debit,12.50\n\
             2026-03-09,Refund,Food,Credit,5\n"
        );
    }

    #[test]
    fn test_special_characters_are_quoted() {
        let entries = vec![
            entry("1", "Dinner, drinks", Decimal::ONE, Kind::Debit, d(2026, 3, 1)),
            entry("2", "The \"good\" cafe", Decimal::ONE, Kind::Debit, d(2026, 3, 1)),
            entry("3", "two\nlines", Decimal::ONE, Kind::Debit, d(2026, 3, 1)),
        ];
        let text = to_delimited_text(&entries).unwrap();
        assert!(text.contains("2026-03-01,\"Dinner, drinks\",Food"));
        assert!(text.contains("2026-03-01,\"The \"\"good\"\" cafe\",Food"));
        assert!(text.contains("\"two\nlines\""));

        let back = read_delimited_text(&text).unwrap();
        let titles: Vec<&str> = back.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Dinner, drinks", "The \"good\" cafe", "two\nlines"]);
    }

    #[test]
    fn test_amounts_read_back_exactly() {
        let amounts = [
            Decimal::from_str_exact("1234567890123456.78").unwrap(),
            Decimal::new(1250, 2),
            Decimal::new(1, 2),
        ];
        let entries: Vec<Entry> = amounts
            .iter()
            .map(|a| entry("1", "Big", *a, Kind::Debit, d(2026, 3, 1)))
            .collect();
        let text = to_delimited_text(&entries).unwrap();
        assert!(text.contains(",Debit,1234567890123456.78\n"));

        let back = read_delimited_text(&text).unwrap();
        for (row, amount) in back.iter().zip(amounts) {
            assert_eq!(row.amount, amount);
            assert_eq!(row.amount.to_string(), amount.to_string());
        }
        assert_eq!(back[1].amount.to_string(), "12.50");
    }

    #[test]
    fn test_read_rejects_foreign_header() {
        assert!(read_delimited_text("When,What\n2026-03-01,x\n").is_err());
    }
}
