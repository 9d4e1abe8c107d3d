//! Domain model types

pub mod carrier;
pub mod rate_table;
pub mod shipment;

pub use carrier::CarrierService;
pub use rate_table::{RateTable, SlabWeight, ZoneRates};
pub use shipment::{is_billable_weight, LocationFields, RateQuote};
