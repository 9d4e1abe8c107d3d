//! Rate calculation engine
//!
//! Pure functions over an in-memory rate table: location text is mapped to
//! a canonical rate key, the raw weight is rounded to a billable weight, and
//! the price is resolved from slabs plus an overage formula.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{
    is_billable_weight, CarrierService, LocationFields, RateQuote, RateTable, ZoneRates,
};
pub use service::{calculate_rate, CarrierProfile};
