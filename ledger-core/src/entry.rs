//! Ledger entry types: one recorded monetary movement per [`Entry`].

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// A dated credit or debit, tagged with a category.
///
/// Entries are owned by the persistence layer. The engine only reads them and
/// an edit replaces the whole record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    /// Opaque identifier assigned by the store
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title, already trimmed
    pub title: String,
    /// Positive magnitude; the sign comes from `kind`
    pub amount: Decimal,
    pub category: Category,
    /// Civil date the movement happened on
    pub date: NaiveDate,
    /// When the record was created. Informational only.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: Kind,
}

/// The fixed set of spending categories.
///
/// Declaration order is the display order used by charts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "String")]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Shopping,
        Category::Education,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Shopping => "Shopping",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }

    /// Map a raw category name onto the fixed set, failing closed to `Other`.
    pub fn parse_lossy(raw: &str) -> Category {
        raw.parse().unwrap_or_else(|_| {
            tracing::warn!(category = raw, "unknown category, routing to Other");
            Category::Other
        })
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LedgerError::InvalidCategory(s.to_string()))
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Category::parse_lossy(&raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Direction of a movement. Credit increases net worth, Debit decreases it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Credit,
    Debit,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Credit => "Credit",
            Kind::Debit => "Debit",
        }
    }

    /// Direction of a net figure: zero and above read as Credit.
    pub fn of_net(net: Decimal) -> Kind {
        if net >= Decimal::ZERO {
            Kind::Credit
        } else {
            Kind::Debit
        }
    }
}

impl FromStr for Kind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            k if k.eq_ignore_ascii_case("credit") => Ok(Kind::Credit),
            k if k.eq_ignore_ascii_case("debit") => Ok(Kind::Debit),
            other => Err(LedgerError::InvalidKind(other.to_string())),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        amount: Decimal,
        category: Category,
        date: NaiveDate,
        kind: Kind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            amount,
            category,
            date,
            created_at: None,
            kind,
        }
    }

    /// The amount as used by every sum. A non-positive amount should never get
    /// past the boundary; if one does it contributes zero.
    pub fn magnitude(&self) -> Decimal {
        if self.amount > Decimal::ZERO {
            self.amount
        } else {
            tracing::warn!(id = %self.id, amount = %self.amount, "non-positive amount treated as zero");
            Decimal::ZERO
        }
    }

    /// Amount with the sign applied from `kind`. All net figures go through here.
    pub fn signed_value(&self) -> Decimal {
        match self.kind {
            Kind::Credit => self.magnitude(),
            Kind::Debit => -self.magnitude(),
        }
    }
}
