//! ledger-core: entry model and the pure computations over entry snapshots
//! (filtering, summaries, category totals, daily series).

pub mod entry;
pub mod error;
pub mod filter;
pub mod series;
pub mod style;
pub mod summary;
pub mod time;

pub use entry::{Category, Entry, Kind};
pub use error::LedgerError;
pub use filter::{filter, recent, CategoryFilter, FilterOptions};
pub use series::{daily_series, DayBucket, SeriesBounds, DEFAULT_WINDOW_DAYS};
pub use style::{CategoryStyle, KindStyle, DEBIT_SLICE_COLOR};
pub use summary::{
    category_rows, category_slices, category_totals, summarize, CategoryRow, CategoryTotals,
    ChartSlice, Summary,
};
pub use time::{civil_date, parse_timezone, Clock, DateRange, FixedClock, SystemClock};
