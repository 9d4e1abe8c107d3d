//! CSV loader for carrier rate tables
//!
//! Two row layouts are accepted, detected from the header:
//!
//! * flagged: `zone,slab_weight,rate,is_per_kg` - a truthy `is_per_kg` row
//!   carries the overage price, every other row is a slab
//! * additional-column: `rate_type,weight_slab,rate,additional_per_kg` -
//!   every row is a slab, a non-empty `additional_per_kg` sets the overage
//!   price for its key (last one wins)

use std::fs;
use std::path::Path;

use ratecard_domain::RateTable;
use ratecard_types::Error;
use thiserror::Error;

use crate::decode::{decode_text, parse_number};

#[derive(Error, Debug)]
pub enum RateTableLoadError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unrecognized rate table header: {0}")]
    UnknownLayout(String),

    #[error("Missing rate key in row {0}")]
    MissingKey(usize),

    #[error("Invalid number format in row {row}, column {column}: '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

impl From<RateTableLoadError> for Error {
    fn from(err: RateTableLoadError) -> Self {
        Error::RateTable(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Flagged,
    AdditionalColumn,
}

/// Column positions resolved from the header row
struct Columns {
    layout: Layout,
    key: usize,
    weight: usize,
    rate: usize,
    overage: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, RateTableLoadError> {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let find = |name: &str| names.iter().position(|h| h == name);

        if let (Some(key), Some(weight), Some(rate), Some(overage)) = (
            find("zone"),
            find("slab_weight"),
            find("rate"),
            find("is_per_kg"),
        ) {
            return Ok(Self {
                layout: Layout::Flagged,
                key,
                weight,
                rate,
                overage,
            });
        }

        if let (Some(key), Some(weight), Some(rate), Some(overage)) = (
            find("rate_type"),
            find("weight_slab"),
            find("rate"),
            find("additional_per_kg"),
        ) {
            return Ok(Self {
                layout: Layout::AdditionalColumn,
                key,
                weight,
                rate,
                overage,
            });
        }

        Err(RateTableLoadError::UnknownLayout(names.join(",")))
    }
}

/// Load a rate table from a CSV file
pub fn load_rate_table<P: AsRef<Path>>(path: P) -> Result<RateTable, RateTableLoadError> {
    let bytes = fs::read(path.as_ref())?;
    let table = parse_rate_table(&decode_text(&bytes))?;

    tracing::info!(
        path = %path.as_ref().display(),
        keys = table.len(),
        "loaded rate table"
    );
    Ok(table)
}

/// Parse rate table CSV text
pub fn parse_rate_table(text: &str) -> Result<RateTable, RateTableLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let columns = Columns::from_headers(reader.headers()?)?;

    let mut table = RateTable::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        // header is row 1; empty lines still count
        let row = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 2);
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        apply_record(&mut table, &columns, &record, row)?;
    }

    Ok(table)
}

fn apply_record(
    table: &mut RateTable,
    columns: &Columns,
    record: &csv::StringRecord,
    row: usize,
) -> Result<(), RateTableLoadError> {
    let key = record.get(columns.key).unwrap_or("");
    if key.is_empty() {
        return Err(RateTableLoadError::MissingKey(row));
    }
    let rate = required_number(record, columns.rate, "rate", row)?;
    let overage_cell = record.get(columns.overage).unwrap_or("");

    match columns.layout {
        Layout::Flagged => {
            if parse_flag(overage_cell) {
                table.set_overage(key, rate);
            } else {
                let weight = required_number(record, columns.weight, "slab_weight", row)?;
                table.insert_slab(key, weight, rate);
            }
        }
        Layout::AdditionalColumn => {
            let weight = required_number(record, columns.weight, "weight_slab", row)?;
            table.insert_slab(key, weight, rate);
            if !overage_cell.trim().is_empty() {
                let overage = required_number(record, columns.overage, "additional_per_kg", row)?;
                table.set_overage(key, overage);
            }
        }
    }

    Ok(())
}

fn required_number(
    record: &csv::StringRecord,
    index: usize,
    column: &str,
    row: usize,
) -> Result<f64, RateTableLoadError> {
    let value = record.get(index).unwrap_or("");
    parse_number(value).ok_or_else(|| RateTableLoadError::InvalidNumber {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(s: &str) -> bool {
    let s = s.trim().to_lowercase();
    matches!(s.as_str(), "1" | "true" | "t" | "yes" | "y")
}
