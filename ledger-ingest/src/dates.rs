//! Normalise the date shapes seen on the wire to civil dates.
//!
//! Stores hand back either a bare `YYYY-MM-DD` or a full timestamp such as
//! `2026-03-04T18:30:00.000Z`. Timestamps are converted in the configured zone;
//! naive date-times keep their calendar date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use ledger_core::{civil_date, LedgerError};

pub fn parse_civil_date(raw: &str, tz: Tz) -> Result<NaiveDate, LedgerError> {
    let s = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Ok(civil_date(instant.with_timezone(&Utc), tz));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(ndt.date());
    }

    Err(LedgerError::InvalidDate {
        value: s.to_string(),
        reason: "expected YYYY-MM-DD or an RFC 3339 timestamp".to_string(),
    })
}

/// Creation timestamps are informational; anything unparseable is dropped.
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!(value = raw, error = %e, "ignoring unparseable createdAt");
            None
        }
    }
}
