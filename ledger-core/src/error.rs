//! Error taxonomy for values crossing into the ledger.
//!
//! The computations in this crate are infallible; these errors are raised by
//! the boundary (drafts, wire parsing, option parsing) before data reaches them.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Non-positive or non-numeric amount.
    #[error("amount must be a positive number, got '{0}'")]
    InvalidAmount(String),

    /// Category outside the fixed set. Aggregation never raises this; it routes
    /// unknown categories to `Other` instead.
    #[error("unknown category: {0}")]
    InvalidCategory(String),

    #[error("unknown entry type: {0}")]
    InvalidKind(String),

    #[error("title must not be empty")]
    InvalidTitle,

    #[error("invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("unknown date range '{0}' (expected all, today, week or month)")]
    InvalidDateRange(String),

    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),
}
