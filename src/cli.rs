//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::clock_adapter::{FixedClock, SystemClock};
use crate::adapters::csv_adapter::{self, CsvAdapter};
use crate::adapters::env_config_adapter::EnvConfigAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::memory_config_adapter::MemoryConfig;
use crate::adapters::price_table_adapter::PriceTable;
use crate::adapters::random_price_adapter::{self, DEFAULT_SEED};
use crate::domain::error::RoiError;
use crate::domain::numeric::Percentage;
use crate::domain::reporting::ReportingService;
use crate::ports::config_port::{ConfigPort, LENGTH_OF_YEAR};
use crate::ports::date_port::DatePort;

/// Prefix of environment variables consulted for preferences.
pub const ENV_PREFIX: &str = "YTDROI_";

#[derive(Parser, Debug)]
#[command(name = "ytdroi", about = "Annualized year-to-date return on investment")]
pub struct Cli {
    /// Log adapter activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the annualized YTD return of an account
    Roi {
        /// Directory holding position.csv, transactions.csv and prices.csv
        #[arg(short, long)]
        data: PathBuf,
        /// INI file with a [preferences] section
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
        /// Overrides LENGTH_OF_YEAR
        #[arg(long)]
        year_length: Option<i64>,
        /// Use generated prices instead of prices.csv
        #[arg(long)]
        random_prices: bool,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
    /// Check that the position and transactions load
    Validate {
        #[arg(short, long)]
        data: PathBuf,
    },
    /// Print a generated price table as CSV
    Prices {
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("invalid date {raw:?} (expected YYYY-MM-DD)"))
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Roi {
            data,
            config,
            today,
            year_length,
            random_prices,
            seed,
        } => run_roi(
            &data,
            config.as_deref(),
            today,
            year_length,
            random_prices.then_some(seed),
        )
        .map(|roi| println!("{roi}")),
        Command::Validate { data } => run_validate(&data).map(|summary| println!("{summary}")),
        Command::Prices { today, seed } => {
            let today = today.unwrap_or_else(|| SystemClock.current_date());
            let table = random_price_adapter::random_price_table(today, seed);
            csv_adapter::write_prices(&table, std::io::stdout().lock())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Preferences from, in order: command-line overrides, the INI file, then
/// the environment.
pub fn build_config(
    config_path: Option<&Path>,
    year_length: Option<i64>,
) -> Result<Box<dyn ConfigPort + Send + Sync>, RoiError> {
    let mut overrides = MemoryConfig::new();
    if let Some(days) = year_length {
        overrides.set(LENGTH_OF_YEAR, days);
    }
    let env = EnvConfigAdapter::with_prefix(ENV_PREFIX);

    match config_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            let file = FileConfigAdapter::from_file(path).map_err(|e| RoiError::ConfigParse {
                file: path.display().to_string(),
                reason: e.to_string(),
            })?;
            Ok(Box::new(overrides.or(file).or(env)))
        }
        None => Ok(Box::new(overrides.or(env))),
    }
}

pub fn run_roi(
    data: &Path,
    config_path: Option<&Path>,
    today: Option<NaiveDate>,
    year_length: Option<i64>,
    random_seed: Option<u64>,
) -> Result<Percentage, RoiError> {
    let config = build_config(config_path, year_length)?;
    let clock: Box<dyn DatePort + Send + Sync> = match today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    let adapter = CsvAdapter::new(data.to_path_buf());
    let position = adapter.load_position()?;
    let transactions = adapter.load_transactions()?;
    let prices: PriceTable = match random_seed {
        Some(seed) => random_price_adapter::random_price_table(clock.current_date(), seed),
        None => adapter.load_prices()?,
    };

    let service = ReportingService::new(config.as_ref(), &prices, clock.as_ref());
    let roi = service.calculate_return_on_investment_ytd(&position, &transactions)?;
    tracing::info!(%roi, transactions = transactions.len(), "computed YTD ROI");
    Ok(Percentage::new(roi))
}

pub fn run_validate(data: &Path) -> Result<String, RoiError> {
    let adapter = CsvAdapter::new(data.to_path_buf());
    let position = adapter.load_position()?;
    let transactions = adapter.load_transactions()?;
    let held = position.holdings().filter(|(_, qty)| !qty.is_zero()).count();
    Ok(format!(
        "ok: cash {}, {} securities held, {} transactions",
        position.cash(),
        held,
        transactions.len()
    ))
}
