//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_rate_table_repo;

pub use file_rate_table_repo::FileRateTableRepository;
