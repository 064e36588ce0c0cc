//! ledger-ingest: the boundary between the store and the engine. Parses the
//! store's JSON snapshot, normalises dates, and validates drafts and patches.

pub mod dates;
pub mod draft;
pub mod snapshot;
pub mod wire;

pub use dates::parse_civil_date;
pub use draft::{parse_amount, EntryDraft, EntryPatch, ValidDraft};
pub use snapshot::{load_snapshot, parse_snapshot, Rejected, Snapshot};
pub use wire::{WireAmount, WireEntry};
