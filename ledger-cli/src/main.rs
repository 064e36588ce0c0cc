use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ledger_core::{
    category_totals, daily_series, filter, recent, summarize, CategoryFilter, Clock, DateRange,
    Entry, FilterOptions, FixedClock, SystemClock,
};
use ledger_export::{export_snapshot, DirectorySink};
use ledger_ingest::load_snapshot;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod report;
mod state;

use config::{load_config, Config};

#[derive(Parser, Debug)]
#[command(name = "ledger", version, about = "Personal finance ledger: summaries, charts and CSV export")]
struct Cli {
    /// Snapshot file (JSON array of entries); overrides config
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Evaluate as of this date (YYYY-MM-DD) instead of the current day
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Net totals for today, this week, this month and all time
    Summary,

    /// List entries, newest first
    List {
        /// Category name or "All"
        #[arg(long, default_value = "All")]
        category: CategoryFilter,

        /// all | today | week | month
        #[arg(long, default_value = "all")]
        range: DateRange,

        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Daily net series and per-category breakdown
    Chart {
        /// Days in the trailing series, 1 to 366 (default: config [chart].window_days)
        #[arg(long)]
        days: Option<usize>,
    },

    /// Write the filtered list to expenses-<date>.csv
    Export {
        #[arg(long, default_value = "All")]
        category: CategoryFilter,

        #[arg(long, default_value = "all")]
        range: DateRange,

        /// Target directory (default: config [export].directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Manage ~/.ledger/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn,ledger=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },

        Command::Summary => {
            let view = View::load(cli.snapshot, cli.today)?;
            print!("{}", report::render_summary(&summarize(&view.entries, view.today), view.symbol()));
            println!("\nEntries: {}", view.entries.len());
        }

        Command::List { category, range, limit } => {
            let view = View::load(cli.snapshot, cli.today)?;
            let options = FilterOptions::new(category, range);
            let listed = match limit {
                Some(n) => recent(&view.entries, &options, view.today, n),
                None => filter(&view.entries, &options, view.today),
            };
            print!("{}", report::render_entries(&listed, view.symbol()));
        }

        Command::Chart { days } => {
            let view = View::load(cli.snapshot, cli.today)?;
            let window = view.cfg.window_days(days)?;
            let series = daily_series(&view.entries, view.today, window);
            let totals = category_totals(&view.entries);
            print!("{}", report::render_chart(&totals, &series, view.symbol()));
        }

        Command::Export { category, range, out_dir } => {
            let view = View::load(cli.snapshot, cli.today)?;
            let listed = filter(&view.entries, &FilterOptions::new(category, range), view.today);
            let dir = out_dir.unwrap_or_else(|| view.cfg.export.directory.clone());
            let mut sink = DirectorySink::new(dir);
            let path = export_snapshot(&mut sink, &listed, view.today)?;
            println!("Exported {} entries to {}", listed.len(), path.display());
        }
    }

    Ok(())
}

/// Everything a read-only command needs: config, the clock date and the snapshot.
struct View {
    cfg: Config,
    today: NaiveDate,
    entries: Vec<Entry>,
}

impl View {
    fn load(snapshot: Option<PathBuf>, today: Option<NaiveDate>) -> Result<Self> {
        let cfg = load_config()?;
        let tz = cfg.timezone()?;
        let today = match today {
            Some(date) => FixedClock(date).today(),
            None => SystemClock::new(tz).today(),
        };

        let path = match snapshot.or_else(|| cfg.ledger.snapshot.clone()) {
            Some(p) => p,
            None => state::default_snapshot_path()?,
        };
        if !path.exists() {
            bail!("Snapshot not found: {} (pass --snapshot <file>)", path.display());
        }

        let snap = load_snapshot(&path, tz)?;
        tracing::debug!(path = %path.display(), %today, entries = snap.entries.len(), "loaded snapshot");
        if !snap.is_clean() {
            eprintln!(
                "Skipped {} invalid record(s) in {}",
                snap.rejected.len(),
                path.display()
            );
        }

        Ok(Self { cfg, today, entries: snap.entries })
    }

    fn symbol(&self) -> &str {
        &self.cfg.ledger.currency_symbol
    }
}
