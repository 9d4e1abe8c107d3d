//! Shipment row source
//!
//! Reads a shipment sheet (CSV, or a workbook's first worksheet) and
//! validates it the way the billing upload does: required columns first,
//! then per row the location fields and the weight. Row numbers are
//! spreadsheet rows (header is row 1).

mod csv_source;
mod workbook_source;

use std::path::Path;

use ratecard_domain::service::{CarrierProfile, LocationColumn, WEIGHT_COLUMN};
use ratecard_domain::{is_billable_weight, LocationFields};
use ratecard_types::Error;
use thiserror::Error;

use crate::decode::parse_number;

pub use csv_source::parse_shipments;

/// File extensions read as workbooks; anything else is read as CSV
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

#[derive(Error, Debug)]
pub enum ShipmentSourceError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to read workbook: {0}")]
    WorkbookError(#[from] calamine::Error),

    #[error("Workbook has no worksheets")]
    NoWorksheet,

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("{field} is missing at row {row}")]
    MissingField { field: String, row: usize },

    #[error("Invalid weight value at row {row}: '{value}'")]
    InvalidWeight { row: usize, value: String },

    #[error("Weight must be positive at row {row}: {value}")]
    NonPositiveWeight { row: usize, value: f64 },
}

impl From<ShipmentSourceError> for Error {
    fn from(err: ShipmentSourceError) -> Self {
        Error::Shipments(err.to_string())
    }
}

/// One validated shipment row
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentRow {
    /// Spreadsheet row number
    pub row: usize,
    pub location: LocationFields,
    /// Raw weight in kg, always positive
    pub weight: f64,
    /// Every original cell, in header order
    pub cells: Vec<String>,
}

/// Parsed shipment sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipmentSheet {
    pub headers: Vec<String>,
    pub rows: Vec<ShipmentRow>,
}

/// Unvalidated row: spreadsheet row number and trimmed cell text
pub(crate) type RawRow = (usize, Vec<String>);

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Load and validate shipments for a carrier, choosing the reader by file extension
pub fn load_shipments<P: AsRef<Path>>(
    path: P,
    profile: &CarrierProfile,
) -> Result<ShipmentSheet, ShipmentSourceError> {
    let path = path.as_ref();
    let sheet = if is_workbook(path) {
        workbook_source::load(path, profile)?
    } else {
        csv_source::load(path, profile)?
    };

    tracing::info!(
        path = %path.display(),
        carrier = %profile.service,
        rows = sheet.rows.len(),
        "loaded shipments"
    );
    Ok(sheet)
}

/// Check columns, then every row in order; the first problem wins
pub(crate) fn validate_rows(
    headers: Vec<String>,
    raw_rows: Vec<RawRow>,
    profile: &CarrierProfile,
) -> Result<ShipmentSheet, ShipmentSourceError> {
    for column in profile.required_columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(ShipmentSourceError::MissingColumn(column.to_string()));
        }
    }

    let position = |name: &str| headers.iter().position(|h| h == name);
    let location_columns: Vec<(LocationColumn, usize)> = profile
        .location_columns
        .iter()
        .filter_map(|column| position(column.header()).map(|idx| (*column, idx)))
        .collect();
    let weight_idx = position(WEIGHT_COLUMN)
        .ok_or_else(|| ShipmentSourceError::MissingColumn(WEIGHT_COLUMN.to_string()))?;

    let mut rows = Vec::with_capacity(raw_rows.len());
    for (row, mut cells) in raw_rows {
        let mut location = LocationFields::new();
        for (column, idx) in &location_columns {
            let value = required_cell(&cells, *idx, column.header(), row)?;
            location = match column {
                LocationColumn::City => location.with_city(value),
                LocationColumn::State => location.with_state(value),
            };
        }

        let raw_weight = required_cell(&cells, weight_idx, WEIGHT_COLUMN, row)?;
        let weight = parse_number(raw_weight).ok_or_else(|| ShipmentSourceError::InvalidWeight {
            row,
            value: raw_weight.to_string(),
        })?;
        if !is_billable_weight(weight) {
            return Err(ShipmentSourceError::NonPositiveWeight { row, value: weight });
        }

        cells.resize(headers.len(), String::new());
        rows.push(ShipmentRow {
            row,
            location,
            weight,
            cells,
        });
    }

    Ok(ShipmentSheet { headers, rows })
}

fn required_cell<'r>(
    cells: &'r [String],
    idx: usize,
    field: &str,
    row: usize,
) -> Result<&'r str, ShipmentSourceError> {
    match cells.get(idx) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ShipmentSourceError::MissingField {
            field: field.to_string(),
            row,
        }),
    }
}
