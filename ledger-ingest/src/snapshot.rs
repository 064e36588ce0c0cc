//! Load a snapshot from the store's JSON array.
//!
//! One bad record never sinks the whole snapshot: it is reported and skipped.

use anyhow::{Context, Result};
use chrono_tz::Tz;
use ledger_core::{Entry, LedgerError};
use std::fs;
use std::path::Path;

use crate::wire::WireEntry;

/// A record that could not be turned into an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    /// Position in the input array
    pub index: usize,
    /// The record's `_id`, when it had one
    pub id: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub entries: Vec<Entry>,
    pub rejected: Vec<Rejected>,
}

impl Snapshot {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse a JSON array of records. Fails only when the text is not a JSON array.
pub fn parse_snapshot(json: &str, tz: Tz) -> Result<Snapshot> {
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(json).context("snapshot must be a JSON array of entries")?;

    let mut snapshot = Snapshot::default();
    for (index, value) in raw.into_iter().enumerate() {
        let id = value.get("_id").and_then(|v| v.as_str()).map(str::to_string);
        let result = serde_json::from_value::<WireEntry>(value)
            .map_err(|e| e.to_string())
            .and_then(|wire| wire.into_entry(tz).map_err(|e: LedgerError| e.to_string()));

        match result {
            Ok(entry) => snapshot.entries.push(entry),
            Err(reason) => {
                tracing::warn!(index, id = ?id, %reason, "rejected snapshot record");
                snapshot.rejected.push(Rejected { index, id, reason });
            }
        }
    }

    tracing::debug!(
        accepted = snapshot.entries.len(),
        rejected = snapshot.rejected.len(),
        "parsed snapshot"
    );
    Ok(snapshot)
}

pub fn load_snapshot(path: impl AsRef<Path>, tz: Tz) -> Result<Snapshot> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_snapshot(&json, tz).with_context(|| format!("parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ledger_core::{Category, Kind};
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_store_records() {
        let json = r#"[
            {"_id":"665f1","title":"Groceries","amount":100,"category":"Food","date":"2026-03-11","createdAt":"2026-03-11T09:00:00.000Z","type":"Debit","__v":0},
            {"_id":"665f2","title":"Salary","amount":"2500.75","category":"Other","date":"2026-03-01T00:00:00.000Z","type":"Credit"},
            {"_id":"665f3","title":"Old record","amount":0.1,"category":"Food","date":"2025-12-31"}
        ]"#;
        let snap = parse_snapshot(json, chrono_tz::UTC).unwrap();
        assert!(snap.is_clean());
        assert_eq!(snap.entries.len(), 3);

        let first = &snap.entries[0];
        assert_eq!(first.amount, Decimal::new(100, 0));
        assert!(first.created_at.is_some());

        assert_eq!(snap.entries[1].kind, Kind::Credit);
        assert_eq!(snap.entries[1].amount, Decimal::new(250075, 2));
        assert_eq!(snap.entries[1].date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());

        // missing type reads as a debit; 0.1 stays exact
        assert_eq!(snap.entries[2].kind, Kind::Debit);
        assert_eq!(snap.entries[2].amount, Decimal::new(1, 1));
    }

    #[test]
    fn test_bad_records_are_reported_not_fatal() {
        let json = r#"[
            {"_id":"a","title":"Fine","amount":5,"category":"Pets","date":"2026-03-11","type":"Debit"},
            {"_id":"b","title":"Negative","amount":-5,"category":"Food","date":"2026-03-11","type":"Debit"},
            {"_id":"c","title":"Bad date","amount":5,"category":"Food","date":"soon","type":"Debit"},
            {"_id":"d","title":"   ","amount":5,"category":"Food","date":"2026-03-11","type":"Debit"},
            {"_id":"e","title":"Bad type","amount":5,"category":"Food","date":"2026-03-11","type":"Transfer"},
            {"title":"No id","amount":5,"category":"Food","date":"2026-03-11"}
        ]"#;
        let snap = parse_snapshot(json, chrono_tz::UTC).unwrap();

        assert_eq!(snap.entries.len(), 1);
        assert_eq!(snap.entries[0].category, Category::Other);

        let rejected: Vec<usize> = snap.rejected.iter().map(|r| r.index).collect();
        assert_eq!(rejected, vec![1, 2, 3, 4, 5]);
        assert_eq!(snap.rejected[0].id.as_deref(), Some("b"));
        assert_eq!(snap.rejected[4].id, None);
    }

    #[test]
    fn test_large_number_amount_survives_loading() {
        let json = r#"[{"_id":"h","title":"House","amount":1234567890123456.78,"category":"Other","date":"2026-03-11","type":"Debit"}]"#;
        let snap = parse_snapshot(json, chrono_tz::UTC).unwrap();
        assert_eq!(snap.entries[0].amount, Decimal::from_str_exact("1234567890123456.78").unwrap());
    }

    #[test]
    fn test_non_array_is_an_error() {
        assert!(parse_snapshot(r#"{"entries":[]}"#, chrono_tz::UTC).is_err());
        assert!(parse_snapshot("[]", chrono_tz::UTC).unwrap().entries.is_empty());
    }
}
