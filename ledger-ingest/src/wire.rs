use chrono_tz::Tz;
use ledger_core::{Category, Entry, Kind, LedgerError};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::dates::{parse_civil_date, parse_created_at};
use crate::draft::parse_amount;

/// Amounts arrive as JSON numbers from the store and as strings from forms.
///
/// Numbers keep their source text (`arbitrary_precision`), so they never pass
/// through `f64` on the way to a `Decimal`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WireAmount {
    Number(serde_json::Number),
    Text(String),
}

impl<'de> Deserialize<'de> for WireAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(WireAmount::Number(n)),
            Value::String(s) => Ok(WireAmount::Text(s)),
            other => Err(de::Error::custom(format!(
                "amount must be a number or a string, got {other}"
            ))),
        }
    }
}

impl WireAmount {
    fn as_text(&self) -> String {
        match self {
            WireAmount::Number(n) => n.to_string(),
            WireAmount::Text(s) => s.clone(),
        }
    }
}

/// One record of the store's JSON array, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub amount: WireAmount,
    pub category: String,
    pub date: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    /// Records written before entry types existed have no `type`; they are debits.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl WireEntry {
    /// Validate and normalise into an [`Entry`].
    ///
    /// Unknown categories become `Other`. Blank titles, bad amounts, bad dates
    /// and unknown types are rejected.
    pub fn into_entry(self, tz: Tz) -> Result<Entry, LedgerError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(LedgerError::InvalidTitle);
        }
        let kind = match self.kind.as_deref() {
            None => Kind::Debit,
            Some(raw) => raw.parse()?,
        };
        Ok(Entry {
            amount: parse_amount(&self.amount.as_text())?,
            date: parse_civil_date(&self.date, tz)?,
            category: Category::parse_lossy(&self.category),
            created_at: self.created_at.as_deref().and_then(parse_created_at),
            title: title.to_string(),
            id: self.id,
            kind,
        })
    }
}
