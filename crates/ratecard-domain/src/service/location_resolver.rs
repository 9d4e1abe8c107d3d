//! Location text to canonical rate key
//!
//! All rules compare trimmed, lowercased text. Only the interstate-zone rule
//! can fail; the others fall through to a default key.

use ratecard_types::RateError;
use serde::Serialize;

use crate::model::LocationFields;

pub const TAMILNADU: &str = "Tamilnadu";
pub const PONDICHERRY: &str = "Pondicherry";
pub const KERALA: &str = "Kerala";
pub const BANGALORE_LOCAL: &str = "Bangalore Local";
pub const KARNATAKA: &str = "Karnataka";
pub const WITHIN_CITY: &str = "within_city";
pub const WITHIN_STATE: &str = "within_state";
pub const WITHIN_ZONE: &str = "within_zone";
pub const HYD: &str = "HYD";
pub const EX_HYD: &str = "EX_HYD";
pub const WEST: &str = "WEST";
pub const ROI: &str = "ROI";

/// Interstate zone aliases, matched exactly after normalization
const ZONE_ALIASES: &[(&str, &str)] = &[
    ("tamilnadu", TAMILNADU),
    ("tamil nadu", TAMILNADU),
    ("pondicherry", PONDICHERRY),
    ("puducherry", PONDICHERRY),
    ("kerala", KERALA),
];

const WEST_BENGAL_ALIASES: &[&str] = &["west bengal", "wb"];

/// Strategy mapping a shipment's location fields to a rate key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationRule {
    /// City text must be a known zone alias
    InterstateZone,
    /// `bangalore` is local, everything else is Karnataka
    ProfessionalLocal,
    /// Kolkata city first, then West Bengal state, then zone-wide
    StateOverride,
    /// `hyderabad` is local, everything else is outside Hyderabad
    HyderabadLocal,
    /// Region text `west`, everything else is rest of India
    StateWide,
}

impl LocationRule {
    pub fn resolve(&self, location: &LocationFields) -> Result<&'static str, RateError> {
        match self {
            LocationRule::InterstateZone => interstate_zone(location.city()),
            LocationRule::ProfessionalLocal => Ok(professional_local(location.city())),
            LocationRule::StateOverride => Ok(state_override(location.city(), location.state())),
            LocationRule::HyderabadLocal => Ok(hyderabad_local(location.city())),
            LocationRule::StateWide => Ok(state_wide(location.state())),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            LocationRule::InterstateZone => "zone alias (exact match)",
            LocationRule::ProfessionalLocal => "bangalore / karnataka",
            LocationRule::StateOverride => "city, then state, then zone",
            LocationRule::HyderabadLocal => "hyderabad / outside",
            LocationRule::StateWide => "west / rest of india",
        }
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn interstate_zone(zone: &str) -> Result<&'static str, RateError> {
    let clean = normalize(zone);
    ZONE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == clean)
        .map(|(_, key)| *key)
        .ok_or_else(|| RateError::UnknownLocation(zone.to_string()))
}

pub fn professional_local(city: &str) -> &'static str {
    if normalize(city) == "bangalore" {
        BANGALORE_LOCAL
    } else {
        KARNATAKA
    }
}

pub fn state_override(city: &str, state: &str) -> &'static str {
    if normalize(city) == "kolkata" {
        return WITHIN_CITY;
    }
    if WEST_BENGAL_ALIASES.contains(&normalize(state).as_str()) {
        return WITHIN_STATE;
    }
    WITHIN_ZONE
}

pub fn hyderabad_local(city: &str) -> &'static str {
    if normalize(city) == "hyderabad" {
        HYD
    } else {
        EX_HYD
    }
}

/// The input is region text; in practice it holds the State column.
pub fn state_wide(region: &str) -> &'static str {
    if normalize(region) == "west" {
        WEST
    } else {
        ROI
    }
}
