//! Civil dates and the relative date windows shared by filtering and summaries.
//!
//! Every comparison in the engine is between civil dates (`NaiveDate`). An
//! instant is converted exactly once, at the boundary, in one configured zone.

use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Rolling length of the `week` window, in days before today.
pub const WEEK_DAYS: u64 = 7;

/// Parse an IANA zone name like "Asia/Kolkata".
pub fn parse_timezone(name: &str) -> Result<Tz, LedgerError> {
    name.parse()
        .map_err(|_| LedgerError::InvalidTimezone(name.to_string()))
}

/// Calendar date of `instant` as seen in `tz`.
pub fn civil_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Source of "today" for every computation that depends on the current date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, read in a fixed zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        civil_date(Utc::now(), self.tz)
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A relative date window ending on today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [DateRange::All, DateRange::Today, DateRange::Week, DateRange::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::All => "All Time",
            DateRange::Today => "Today",
            DateRange::Week => "This Week",
            DateRange::Month => "This Month",
        }
    }

    /// First date inside the window, inclusive. `None` for `All`.
    ///
    /// `Month` steps back one calendar month and clamps to the last valid day,
    /// so March 31 starts the window on February 28 (29 in leap years).
    pub fn start(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateRange::All => None,
            DateRange::Today => Some(today),
            DateRange::Week => Some(today.checked_sub_days(Days::new(WEEK_DAYS)).unwrap_or(NaiveDate::MIN)),
            DateRange::Month => Some(today.checked_sub_months(Months::new(1)).unwrap_or(NaiveDate::MIN)),
        }
    }

    /// Whether `date` falls inside the window ending on `today`.
    ///
    /// Bounded windows are closed on both ends: dates after today are outside.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.start(today) {
            None => true,
            Some(start) => start <= date && date <= today,
        }
    }
}

impl std::str::FromStr for DateRange {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateRange::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LedgerError::InvalidDateRange(s.to_string()))
    }
}
