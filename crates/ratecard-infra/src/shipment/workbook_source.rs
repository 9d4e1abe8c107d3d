//! Shipment sheets uploaded as workbooks (first worksheet)

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use ratecard_domain::service::CarrierProfile;

use super::{validate_rows, RawRow, ShipmentSheet, ShipmentSourceError};

pub(super) fn load(
    path: &Path,
    profile: &CarrierProfile,
) -> Result<ShipmentSheet, ShipmentSourceError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ShipmentSourceError::NoWorksheet)??;
    parse_worksheet(&range, profile)
}

/// First used row is the header. Blank rows after the last shipment are
/// dropped; blank rows between shipments fail validation like any other.
pub(super) fn parse_worksheet(
    range: &Range<Data>,
    profile: &CarrierProfile,
) -> Result<ShipmentSheet, ShipmentSourceError> {
    // 0-based sheet row of the header
    let header_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();

    let mut raw_rows: Vec<RawRow> = rows
        .enumerate()
        .map(|(idx, cells)| (header_row + idx + 2, cells.iter().map(cell_text).collect()))
        .collect();
    while raw_rows
        .last()
        .is_some_and(|(_, cells)| cells.iter().all(String::is_empty))
    {
        raw_rows.pop();
    }

    validate_rows(headers, raw_rows, profile)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        other => other.to_string().trim().to_string(),
    }
}
