//! Text decoding for CSV files exported from spreadsheets

use std::borrow::Cow;

use encoding_rs::{UTF_8, WINDOWS_1252};

/// Decode file bytes as UTF-8 (BOM stripped), falling back to Windows-1252
pub(crate) fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return text;
    }

    tracing::warn!("file is not valid UTF-8, decoding as Windows-1252");
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text
}

/// Parse a numeric cell, tolerating surrounding space and thousands separators
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    let cleaned = s.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
