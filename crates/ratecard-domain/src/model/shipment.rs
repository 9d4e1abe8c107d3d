//! Shipment location input and rate results

use serde::{Deserialize, Serialize};

/// Location text of a shipment row as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFields {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl LocationFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// City text, empty when absent
    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }

    /// State or region text, empty when absent
    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or("")
    }
}

/// Raw weights a shipment may carry: finite and above zero
pub fn is_billable_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

/// Billable weight and price for one shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Canonical rate key the location resolved to
    pub rate_key: String,
    /// Billable weight in kg
    pub rounded_weight: f64,
    /// Price before any currency rounding
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_billable_weight() {
        assert!(is_billable_weight(0.01));
        assert!(is_billable_weight(12.5));
        assert!(!is_billable_weight(0.0));
        assert!(!is_billable_weight(-3.0));
        assert!(!is_billable_weight(f64::INFINITY));
        assert!(!is_billable_weight(f64::NAN));
    }
}
