//! Error types for ratecard

use thiserror::Error;

/// Rate calculation errors.
///
/// Every variant is a user-input or configuration fault; none of them is
/// worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    /// Location text has no alias in a carrier that requires an exact match
    #[error("Invalid zone name: '{0}'")]
    UnknownLocation(String),

    /// Canonical key missing from the loaded rate table
    #[error("Rate key not found: {0}")]
    UnknownKey(String),

    /// Rounded weight at or below the ceiling has no exact slab
    #[error("No slab found for {key} weight {weight}")]
    NoSlabForWeight { key: String, weight: f64 },

    /// Overage pricing needed but the ceiling slab or overage price is missing
    #[error("Incomplete rate setup for {0}")]
    IncompleteRateSetup(String),

    #[error("Unknown carrier service: '{0}'")]
    UnknownCarrier(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rate error: {0}")]
    Rate(#[from] RateError),

    /// Rate calculation failed for a spreadsheet row (header is row 1)
    #[error("Row {row}: {source}")]
    RowFailed {
        row: usize,
        #[source]
        source: RateError,
    },

    #[error("Weight must be a positive number, got {0}")]
    InvalidWeight(f64),

    #[error("Rate table error: {0}")]
    RateTable(String),

    #[error("Shipment file error: {0}")]
    Shipments(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_error_messages() {
        let err = RateError::NoSlabForWeight {
            key: "Kerala".to_string(),
            weight: 1.5,
        };
        assert_eq!(err.to_string(), "No slab found for Kerala weight 1.5");
        assert_eq!(
            RateError::UnknownLocation("Goa".to_string()).to_string(),
            "Invalid zone name: 'Goa'"
        );
    }

    #[test]
    fn test_row_failed_wraps_rate_error() {
        let err = Error::RowFailed {
            row: 4,
            source: RateError::UnknownKey("HYD".to_string()),
        };
        assert_eq!(err.to_string(), "Row 4: Rate key not found: HYD");
        assert!(std::error::Error::source(&err).is_some());
    }
}
