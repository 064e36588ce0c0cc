use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$LEDGER_HOME`, or `~/.ledger`.
pub fn ledger_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("LEDGER_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".ledger"))
}

pub fn ensure_ledger_home() -> Result<PathBuf> {
    let dir = ledger_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn default_snapshot_path() -> Result<PathBuf> {
    Ok(ledger_home()?.join("entries.json"))
}
