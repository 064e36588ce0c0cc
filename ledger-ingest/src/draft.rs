//! Entry drafts and patches: the validation an add/edit form performs before
//! anything is sent to the store.

use chrono::{DateTime, NaiveDate, Utc};
use ledger_core::{Category, Entry, Kind, LedgerError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a user- or wire-supplied amount. Must be a positive number.
pub fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let s = raw.trim();
    let amount = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| LedgerError::InvalidAmount(s.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(s.to_string()));
    }
    Ok(amount)
}

/// Form state for a new or edited entry. Amount stays raw text until validated.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub title: String,
    pub amount: String,
    pub category: Category,
    pub date: NaiveDate,
    pub kind: Kind,
}

/// A draft that passed validation, waiting for the store to assign an id.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub title: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    pub kind: Kind,
}

impl EntryDraft {
    /// Blank form: Food, Debit, dated today.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: Category::Food,
            date: today,
            kind: Kind::Debit,
        }
    }

    /// Form pre-filled from an existing entry.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            amount: entry.amount.to_string(),
            category: entry.category,
            date: entry.date,
            kind: entry.kind,
        }
    }

    pub fn validate(&self) -> Result<ValidDraft, LedgerError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(LedgerError::InvalidTitle);
        }
        Ok(ValidDraft {
            title: title.to_string(),
            amount: parse_amount(&self.amount)?,
            category: self.category,
            date: self.date,
            kind: self.kind,
        })
    }
}

impl ValidDraft {
    /// Build the stored record once the store has assigned identity.
    pub fn into_entry(self, id: impl Into<String>, created_at: Option<DateTime<Utc>>) -> Entry {
        Entry {
            id: id.into(),
            title: self.title,
            amount: self.amount,
            category: self.category,
            date: self.date,
            created_at,
            kind: self.kind,
        }
    }
}

/// Partial update. Missing fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub amount: Option<String>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub kind: Option<Kind>,
}

impl EntryPatch {
    /// Produce the replacement record. `current` is left untouched; identity
    /// and creation time carry over.
    pub fn apply(&self, current: &Entry) -> Result<Entry, LedgerError> {
        let mut draft = EntryDraft::from_entry(current);
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(amount) = &self.amount {
            draft.amount = amount.clone();
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(kind) = self.kind {
            draft.kind = kind;
        }
        Ok(draft.validate()?.into_entry(current.id.clone(), current.created_at))
    }
}
