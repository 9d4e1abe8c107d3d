//! Domain services

pub mod carrier_profile;
pub mod location_resolver;
pub mod rate_resolver;
pub mod weight_rounder;

pub use carrier_profile::{calculate_rate, CarrierProfile, LocationColumn, WEIGHT_COLUMN};
pub use location_resolver::LocationRule;
pub use rate_resolver::{price, OverageRule};
pub use weight_rounder::RoundingPolicy;
