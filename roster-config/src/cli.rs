//! `roster-order`: order a JSON roster from the command line.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use roster_core::{OrderingMode, OrderingOutcome, Record, SortOrchestrator};
use tracing::info;

use crate::{ConfigSource, JsonFileSource, RosterConfig, logging};

/// Arguments of `roster-order`
#[derive(Debug, Parser)]
#[command(
    name = "roster-order",
    about = "Order a roster of member records",
    long_about = None
)]
pub struct Cli {
    /// JSON file holding an array of records
    #[arg(short, long)]
    pub input: PathBuf,
    /// Ordering to apply; defaults to the configured mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
    /// Config file (TOML or JSON); otherwise ROSTER_CONFIG_PATH,
    /// ROSTER_CONFIG_JSON or ./roster.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Seed for reproducible random order
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Command line spelling of [`OrderingMode`]
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Heap sort by numeric id
    #[value(name = "heap_by_id")]
    HeapById,
    /// Name, A-Z
    #[value(name = "name_ascending")]
    NameAscending,
    /// Name, Z-A
    #[value(name = "name_descending")]
    NameDescending,
    /// Newest timestamp first
    #[value(name = "timestamp_desc")]
    TimestampDesc,
    /// Random order
    #[value(name = "random")]
    Random,
}

impl From<ModeArg> for OrderingMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::HeapById => OrderingMode::HeapById,
            ModeArg::NameAscending => OrderingMode::NameAscending,
            ModeArg::NameDescending => OrderingMode::NameDescending,
            ModeArg::TimestampDesc => OrderingMode::TimestampDesc,
            ModeArg::Random => OrderingMode::Random,
        }
    }
}

/// Load config, set up logging, order the input and print it.
pub fn run(cli: Cli) -> Result<()> {
    let (mut config, source) = match &cli.config {
        Some(path) => (
            RosterConfig::load_from_file(path)?,
            ConfigSource::File(path.clone()),
        ),
        None => RosterConfig::load_from_env()?,
    };
    if let Some(seed) = cli.seed {
        config.ordering.shuffle_seed = Some(seed);
    }
    config.validate()?;
    logging::init_tracing(&config.logging)?;
    info!(source = ?source, "configuration loaded");

    let mode = cli
        .mode
        .map(OrderingMode::from)
        .unwrap_or(config.ordering.default_mode);
    let orchestrator = SortOrchestrator::with_settings(config.ordering);
    let (records, outcome) = orchestrator
        .fetch_and_order(&JsonFileSource::new(&cli.input), mode)
        .with_context(|| format!("failed to order {}", cli.input.display()))?;

    let mut out = BufWriter::new(io::stdout().lock());
    render_rows(&records, &mut out)?;
    out.flush()?;

    eprintln!("{}", summary(&outcome));
    Ok(())
}

/// One tab-separated line per record: id, name, first name, email,
/// timestamp. Absent fields print as empty columns; timestamps stay raw.
pub fn render_rows<W: Write>(
    records: &[Record],
    out: &mut W,
) -> io::Result<()> {
    for record in records {
        let id = record.id().map(ToString::to_string).unwrap_or_default();
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            id,
            record.name().unwrap_or_default(),
            record.first_name().unwrap_or_default(),
            record.email().unwrap_or_default(),
            record.timestamp().unwrap_or_default(),
        )?;
    }
    Ok(())
}

/// Heading plus record count, and the step count after a heap sort.
pub fn summary(outcome: &OrderingOutcome) -> String {
    let mut text =
        format!("{}: {} records", outcome.mode.label(), outcome.records);
    if let Some(steps) = outcome.heap_steps {
        text.push_str(&format!(", sorted in {steps} steps"));
    }
    text
}
