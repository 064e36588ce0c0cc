use anyhow::{bail, Context, Result};
use chrono_tz::Tz;
use ledger_core::{parse_timezone, DEFAULT_WINDOW_DAYS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{ensure_ledger_home, ledger_home};

/// Longest trailing series the chart will build.
pub const MAX_WINDOW_DAYS: usize = 366;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ledger: LedgerSection,
    #[serde(default)]
    pub chart: ChartSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerSection {
    /// IANA zone used to turn timestamps and "now" into calendar dates
    pub timezone: String,
    pub currency_symbol: String,
    /// Snapshot file; defaults to `<ledger home>/entries.json`
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSection {
    pub window_days: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    pub directory: PathBuf,
}

impl Default for LedgerSection {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            currency_symbol: "₹".to_string(),
            snapshot: None,
        }
    }
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn timezone(&self) -> Result<Tz> {
        Ok(parse_timezone(&self.ledger.timezone).context("config [ledger].timezone")?)
    }

    /// Series length: `requested` if given, else `[chart].window_days`.
    pub fn window_days(&self, requested: Option<usize>) -> Result<usize> {
        let days = requested.unwrap_or(self.chart.window_days);
        if !(1..=MAX_WINDOW_DAYS).contains(&days) {
            bail!("chart window must be between 1 and {MAX_WINDOW_DAYS} days, got {days}");
        }
        Ok(days)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ledger_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(s)?;
    cfg.timezone()?;
    cfg.window_days(None).context("config [chart].window_days")?;
    Ok(cfg)
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_ledger_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let written = save_config(&Config::default())?;
    println!("Wrote {}", written.display());
    Ok(())
}
