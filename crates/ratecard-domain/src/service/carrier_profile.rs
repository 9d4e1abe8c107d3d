//! Static carrier profiles and the rate calculation entry point
//!
//! A profile binds one location rule, one rounding policy and one overage
//! rule. Adding a carrier means adding a profile here; `rate_resolver::price`
//! stays shared.

use ratecard_types::RateError;
use serde::Serialize;

use super::location_resolver::LocationRule;
use super::rate_resolver::{self, OverageRule};
use super::weight_rounder::RoundingPolicy;
use crate::model::{CarrierService, LocationFields, RateQuote, RateTable};

/// Spreadsheet column holding the raw weight
pub const WEIGHT_COLUMN: &str = "Weight";

/// Location column a carrier reads from the shipment sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LocationColumn {
    City,
    State,
}

impl LocationColumn {
    pub fn header(&self) -> &'static str {
        match self {
            LocationColumn::City => "City",
            LocationColumn::State => "State",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarrierProfile {
    pub service: CarrierService,
    pub location: LocationRule,
    pub rounding: RoundingPolicy,
    pub overage: OverageRule,
    pub location_columns: &'static [LocationColumn],
}

const PER_KG_ABOVE_5: OverageRule = OverageRule::new(5.0, 1.0);
const PER_500G_ABOVE_1: OverageRule = OverageRule::new(1.0, 0.5);

static PROFILES: [CarrierProfile; 5] = [
    CarrierProfile {
        service: CarrierService::Franch,
        location: LocationRule::InterstateZone,
        rounding: RoundingPolicy::HalfKgFloor,
        overage: PER_KG_ABOVE_5,
        location_columns: &[LocationColumn::City],
    },
    CarrierProfile {
        service: CarrierService::Professional,
        location: LocationRule::ProfessionalLocal,
        rounding: RoundingPolicy::HalfKgFloor,
        overage: PER_KG_ABOVE_5,
        location_columns: &[LocationColumn::City],
    },
    CarrierProfile {
        service: CarrierService::ProfessionalKolkata,
        location: LocationRule::StateOverride,
        rounding: RoundingPolicy::HalfKgFloor,
        overage: PER_KG_ABOVE_5,
        location_columns: &[LocationColumn::City, LocationColumn::State],
    },
    CarrierProfile {
        service: CarrierService::TrackonHyd,
        location: LocationRule::HyderabadLocal,
        rounding: RoundingPolicy::HalfKgFloor,
        overage: PER_500G_ABOVE_1,
        location_columns: &[LocationColumn::City],
    },
    CarrierProfile {
        service: CarrierService::TrackonWest,
        location: LocationRule::StateWide,
        rounding: RoundingPolicy::WholeKgCeiling,
        overage: PER_KG_ABOVE_5,
        location_columns: &[LocationColumn::State],
    },
];

impl CarrierService {
    pub fn profile(&self) -> &'static CarrierProfile {
        match self {
            CarrierService::Franch => &PROFILES[0],
            CarrierService::Professional => &PROFILES[1],
            CarrierService::ProfessionalKolkata => &PROFILES[2],
            CarrierService::TrackonHyd => &PROFILES[3],
            CarrierService::TrackonWest => &PROFILES[4],
        }
    }
}

impl CarrierProfile {
    /// All profiles in `CarrierService::ALL` order
    pub fn all() -> &'static [CarrierProfile] {
        &PROFILES
    }

    /// Column headers a shipment sheet must carry for this carrier
    pub fn required_columns(&self) -> Vec<&'static str> {
        self.location_columns
            .iter()
            .map(LocationColumn::header)
            .chain(std::iter::once(WEIGHT_COLUMN))
            .collect()
    }

    /// Resolve key, round weight, then price. Fails on the first error.
    pub fn calculate(
        &self,
        location: &LocationFields,
        weight: f64,
        table: &RateTable,
    ) -> Result<RateQuote, RateError> {
        let rounded_weight = self.rounding.round(weight);
        let key = self.location.resolve(location)?;
        let rate = rate_resolver::price(table, key, rounded_weight, &self.overage)?;

        Ok(RateQuote {
            rate_key: key.to_string(),
            rounded_weight,
            rate,
        })
    }
}

/// Calculate the billable weight and price of one shipment.
///
/// `table` must be the rate table loaded for `service`.
pub fn calculate_rate(
    service: CarrierService,
    location: &LocationFields,
    weight: f64,
    table: &RateTable,
) -> Result<RateQuote, RateError> {
    service.profile().calculate(location, weight, table)
}
