//! CSV file data adapter.
//!
//! A data directory holds up to three files:
//!
//! - `position.csv`: `asset,amount` rows, one `CASH` row plus one row per held
//!   security; securities without a row are flat.
//! - `transactions.csv`: `type,date,cash,security,quantity`; `security` and
//!   `quantity` may be empty for cash movements.
//! - `prices.csv`: `date,security,price`.

use crate::adapters::price_table_adapter::PriceTable;
use crate::domain::error::RoiError;
use crate::domain::numeric::Quantity;
use crate::domain::position::Position;
use crate::domain::security::Security;
use crate::domain::transaction::{Transaction, TransactionType};
use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const POSITION_FILE: &str = "position.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";
pub const PRICES_FILE: &str = "prices.csv";

const CASH_ROW: &str = "CASH";

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.base_path.join(file)
    }

    pub fn load_position(&self) -> Result<Position, RoiError> {
        let path = self.path(POSITION_FILE);
        let mut position = Position::new(Decimal::ZERO);

        for (line, record) in read_records(&path)? {
            let asset = field(&record, 0, "asset", line)?;
            let amount: Decimal = parse_field(&record, 1, "amount", line)?;
            if asset.eq_ignore_ascii_case(CASH_ROW) {
                position.set_cash(amount);
            } else {
                let security: Security = asset.parse()?;
                position.set_quantity(security, Quantity::new(amount));
            }
        }

        tracing::debug!(path = %path.display(), %position, "loaded position");
        Ok(position)
    }

    pub fn load_transactions(&self) -> Result<Vec<Transaction>, RoiError> {
        let path = self.path(TRANSACTIONS_FILE);
        let mut transactions = Vec::new();

        for (line, record) in read_records(&path)? {
            let kind: TransactionType = field(&record, 0, "type", line)?.parse()?;
            let date = parse_date(&record, 1, line)?;
            let cash: Decimal = parse_field(&record, 2, "cash", line)?;
            let security = match optional_field(&record, 3) {
                Some(name) => Some(name.parse::<Security>()?),
                None => None,
            };
            let quantity = match optional_field(&record, 4) {
                Some(raw) => Quantity::new(parse_decimal(raw, "quantity", line)?),
                None => Quantity::zero(),
            };
            transactions.push(Transaction::new(kind, date, cash, security, quantity)?);
        }

        tracing::debug!(
            path = %path.display(),
            count = transactions.len(),
            "loaded transactions"
        );
        Ok(transactions)
    }

    pub fn load_prices(&self) -> Result<PriceTable, RoiError> {
        let path = self.path(PRICES_FILE);
        let mut table = PriceTable::new();

        for (line, record) in read_records(&path)? {
            let date = parse_date(&record, 0, line)?;
            let security: Security = field(&record, 1, "security", line)?.parse()?;
            let price: Decimal = parse_field(&record, 2, "price", line)?;
            table.insert(date, security, price);
        }

        if table.is_empty() {
            tracing::warn!(path = %path.display(), "price file has no rows");
        }
        tracing::debug!(path = %path.display(), count = table.len(), "loaded prices");
        Ok(table)
    }
}

/// Renders a price table in the `prices.csv` layout.
pub fn write_prices<W: std::io::Write>(table: &PriceTable, out: W) -> Result<(), RoiError> {
    let mut writer = csv::Writer::from_writer(out);
    let to_err = |e: csv::Error| RoiError::DataLoad {
        reason: format!("CSV write error: {}", e),
    };
    writer
        .write_record(["date", "security", "price"])
        .map_err(to_err)?;
    for (date, security, price) in table.iter() {
        writer
            .write_record([
                date.format("%Y-%m-%d").to_string(),
                security.to_string(),
                price.to_string(),
            ])
            .map_err(to_err)?;
    }
    writer.flush()?;
    Ok(())
}

/// Records with their 1-based line number (the header is line 1).
fn read_records(path: &Path) -> Result<Vec<(usize, StringRecord)>, RoiError> {
    let content = fs::read_to_string(path).map_err(|e| RoiError::DataLoad {
        reason: format!("failed to read {}: {}", path.display(), e),
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| RoiError::DataLoad {
            reason: format!("CSV parse error in {}: {}", path.display(), e),
        })?;
        records.push((i + 2, record));
    }
    Ok(records)
}

fn field<'r>(
    record: &'r StringRecord,
    index: usize,
    name: &str,
    line: usize,
) -> Result<&'r str, RoiError> {
    record
        .get(index)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| RoiError::DataLoad {
            reason: format!("line {}: missing {} column", line, name),
        })
}

fn optional_field(record: &StringRecord, index: usize) -> Option<&str> {
    record.get(index).filter(|v| !v.is_empty())
}

fn parse_decimal(raw: &str, name: &str, line: usize) -> Result<Decimal, RoiError> {
    Decimal::from_str(raw).map_err(|e| RoiError::DataLoad {
        reason: format!("line {}: invalid {} value {:?}: {}", line, name, raw, e),
    })
}

fn parse_field(
    record: &StringRecord,
    index: usize,
    name: &str,
    line: usize,
) -> Result<Decimal, RoiError> {
    parse_decimal(field(record, index, name, line)?, name, line)
}

fn parse_date(record: &StringRecord, index: usize, line: usize) -> Result<NaiveDate, RoiError> {
    let raw = field(record, index, "date", line)?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| RoiError::DataLoad {
        reason: format!("line {}: invalid date format {:?}: {}", line, raw, e),
    })
}
