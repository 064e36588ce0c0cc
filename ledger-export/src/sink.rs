//! Where exports end up. The serializer only produces text; a [`FileSink`]
//! supplied by the caller decides what "saving a file" means.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use ledger_core::Entry;
use std::fs;
use std::path::PathBuf;

use crate::delimited::to_delimited_text;

pub trait FileSink {
    /// Store `contents` under `name`, returning where it went.
    fn save(&mut self, name: &str, contents: &str) -> Result<PathBuf>;
}

/// Writes exports as files in one directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSink for DirectorySink {
    fn save(&mut self, name: &str, contents: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).with_context(|| format!("create {}", self.dir.display()))?;
        let path = self.dir.join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}

/// `expenses-<YYYY-MM-DD>.csv`
pub fn export_filename(today: NaiveDate) -> String {
    format!("expenses-{}.csv", today.format("%Y-%m-%d"))
}

/// Render `entries` and hand the result to `sink` under today's export name.
pub fn export_snapshot(sink: &mut dyn FileSink, entries: &[Entry], today: NaiveDate) -> Result<PathBuf> {
    let text = to_delimited_text(entries)?;
    let path = sink.save(&export_filename(today), &text)?;
    tracing::info!(rows = entries.len(), path = %path.display(), "export written");
    Ok(path)
}
