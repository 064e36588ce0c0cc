//! ledger-export: CSV export of entry snapshots and the file sinks that store them

pub mod delimited;
pub mod sink;

pub use delimited::{read_delimited_text, to_delimited_text, ExportRow, EXPORT_HEADER};
pub use sink::{export_filename, export_snapshot, DirectorySink, FileSink};
