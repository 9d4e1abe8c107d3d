//! Export of billed batches

pub mod excel;

pub use excel::export_to_excel;
