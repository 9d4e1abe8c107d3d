//! Infrastructure layer - rate table persistence and shipment loaders

mod decode;
pub mod persistence;
pub mod rate_csv;
pub mod shipment;
