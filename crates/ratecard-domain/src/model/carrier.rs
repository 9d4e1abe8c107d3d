//! Carrier service identifiers

use std::str::FromStr;

use clap::ValueEnum;
use ratecard_types::RateError;
use serde::{Deserialize, Serialize};

/// A billable carrier/service combination with its own rate table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum CarrierService {
    /// Interstate zones keyed by state alias (Tamilnadu, Pondicherry, Kerala)
    Franch,
    /// Bangalore local vs rest of Karnataka
    Professional,
    /// Kolkata city, West Bengal state, or zone-wide
    ProfessionalKolkata,
    /// Hyderabad local vs outside Hyderabad, 1 kg ceiling
    TrackonHyd,
    /// West region vs rest of India, whole-kg billing
    TrackonWest,
}

impl CarrierService {
    pub const ALL: [CarrierService; 5] = [
        CarrierService::Franch,
        CarrierService::Professional,
        CarrierService::ProfessionalKolkata,
        CarrierService::TrackonHyd,
        CarrierService::TrackonWest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CarrierService::Franch => "franch",
            CarrierService::Professional => "professional",
            CarrierService::ProfessionalKolkata => "professional_kolkata",
            CarrierService::TrackonHyd => "trackon_hyd",
            CarrierService::TrackonWest => "trackon_west",
        }
    }
}

impl std::fmt::Display for CarrierService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarrierService {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        CarrierService::ALL
            .into_iter()
            .find(|service| service.as_str() == normalized)
            .ok_or_else(|| RateError::UnknownCarrier(s.to_string()))
    }
}
