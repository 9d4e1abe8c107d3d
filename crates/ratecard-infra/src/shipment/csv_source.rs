//! Shipment sheets exported as CSV

use std::fs;
use std::path::Path;

use ratecard_domain::service::CarrierProfile;

use super::{validate_rows, RawRow, ShipmentSheet, ShipmentSourceError};
use crate::decode::decode_text;

pub(super) fn load(
    path: &Path,
    profile: &CarrierProfile,
) -> Result<ShipmentSheet, ShipmentSourceError> {
    let bytes = fs::read(path)?;
    parse_shipments(&decode_text(&bytes), profile)
}

/// Parse and validate shipment CSV text
///
/// Empty lines are not rows, but they still count toward the row number.
pub fn parse_shipments(
    text: &str,
    profile: &CarrierProfile,
) -> Result<ShipmentSheet, ShipmentSourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut raw_rows: Vec<RawRow> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 2);
        raw_rows.push((row, record.iter().map(str::to_string).collect()));
    }

    validate_rows(headers, raw_rows, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratecard_domain::CarrierService;

    fn profile(service: CarrierService) -> &'static CarrierProfile {
        service.profile()
    }

    #[test]
    fn test_parse_franch_sheet() {
        let text = "AWB,City,Weight\nA1,Tamil Nadu,1.2\nA2,kerala,\"1,250\"\n";
        let sheet = parse_shipments(text, profile(CarrierService::Franch)).unwrap();

        assert_eq!(sheet.headers, vec!["AWB", "City", "Weight"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0].row, 2);
        assert_eq!(sheet.rows[0].location.city(), "Tamil Nadu");
        assert!((sheet.rows[0].weight - 1.2).abs() < f64::EPSILON);
        assert!((sheet.rows[1].weight - 1250.0).abs() < f64::EPSILON);
        assert_eq!(sheet.rows[1].cells, vec!["A2", "kerala", "1,250"]);
    }

    #[test]
    fn test_kolkata_requires_state_column() {
        let text = "City,Weight\nKolkata,1\n";
        let err = parse_shipments(text, profile(CarrierService::ProfessionalKolkata)).unwrap_err();
        assert!(matches!(err, ShipmentSourceError::MissingColumn(ref c) if c == "State"));
    }

    #[test]
    fn test_trackon_west_reads_state() {
        let text = "State,Weight\nWest,0.4\n";
        let sheet = parse_shipments(text, profile(CarrierService::TrackonWest)).unwrap();
        assert_eq!(sheet.rows[0].location.state(), "West");
        assert_eq!(sheet.rows[0].location.city, None);
    }

    #[test]
    fn test_missing_field_reports_row() {
        let text = "City,State,Weight\nKolkata,WB,1\nHowrah,,2\n";
        let err = parse_shipments(text, profile(CarrierService::ProfessionalKolkata)).unwrap_err();
        assert_eq!(err.to_string(), "State is missing at row 3");
    }

    #[test]
    fn test_missing_weight() {
        let text = "City,Weight\nBangalore,\n";
        let err = parse_shipments(text, profile(CarrierService::Professional)).unwrap_err();
        assert_eq!(err.to_string(), "Weight is missing at row 2");
    }

    #[test]
    fn test_invalid_weight() {
        let text = "City,Weight\nBangalore,heavy\n";
        let err = parse_shipments(text, profile(CarrierService::Professional)).unwrap_err();
        assert!(matches!(
            err,
            ShipmentSourceError::InvalidWeight { row: 2, ref value } if value == "heavy"
        ));
    }

    #[test]
    fn test_row_numbers_count_empty_lines() {
        let text = "City,Weight\nBangalore,1\n\nMysore,heavy\n";
        let err = parse_shipments(text, profile(CarrierService::Professional)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid weight value at row 4: 'heavy'");

        let text = "City,Weight\nBangalore,1\n\nMysore,2\n";
        let sheet = parse_shipments(text, profile(CarrierService::Professional)).unwrap();
        let rows: Vec<usize> = sheet.rows.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![2, 4]);
    }

    #[test]
    fn test_row_of_blank_cells_is_rejected() {
        let text = "City,Weight\nBangalore,1\n,\nMysore,2\n";
        let err = parse_shipments(text, profile(CarrierService::Professional)).unwrap_err();
        assert!(matches!(
            err,
            ShipmentSourceError::MissingField { row: 3, ref field } if field == "City"
        ));
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let text = "City,Weight\nHyderabad,0\n";
        let err = parse_shipments(text, profile(CarrierService::TrackonHyd)).unwrap_err();
        assert!(matches!(err, ShipmentSourceError::NonPositiveWeight { row: 2, .. }));

        let text = "City,Weight\nHyderabad,-1.5\n";
        let err = parse_shipments(text, profile(CarrierService::TrackonHyd)).unwrap_err();
        assert!(matches!(err, ShipmentSourceError::NonPositiveWeight { row: 2, .. }));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let text = "City,Weight,Note\nHyderabad,1\n";
        let sheet = parse_shipments(text, profile(CarrierService::TrackonHyd)).unwrap();
        assert_eq!(sheet.rows[0].cells, vec!["Hyderabad", "1", ""]);
    }
}
