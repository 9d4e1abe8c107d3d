//! Application use cases

pub mod billing_service;

pub use billing_service::{
    bill_batch, bill_file, quote, BilledShipment, BillingBatch, ProgressCallback,
};
