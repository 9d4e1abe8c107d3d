//! Repository trait definitions for rate data

use ratecard_types::Result;

use crate::model::{CarrierService, RateTable};

/// Persistent source of rate tables, read once per batch
pub trait RateTableRepository {
    /// Load the complete rate table for one carrier service
    fn load(&self, service: CarrierService) -> Result<RateTable>;
}
