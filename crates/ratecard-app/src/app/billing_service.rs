//! Billing Service - rate a whole shipment sheet for one carrier
//!
//! 1. Load the carrier's rate table once
//! 2. Load and validate the shipment sheet
//! 3. Calculate every row against the same table, stopping at the first failure
//! 4. Return billed rows with totals for export

use std::path::Path;

use ratecard_domain::repository::RateTableRepository;
use ratecard_domain::{
    calculate_rate, is_billable_weight, CarrierService, LocationFields, RateQuote, RateTable,
};
use ratecard_infra::shipment::{load_shipments, ShipmentSheet};
use ratecard_types::{Error, Result};
use serde::Serialize;

/// Progress callback receiving `(done, total)` rows
pub type ProgressCallback<'a> = &'a dyn Fn(usize, usize);

/// A shipment row with its billable weight and price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BilledShipment {
    /// Spreadsheet row number
    pub row: usize,
    /// Original cells, in header order
    pub cells: Vec<String>,
    #[serde(flatten)]
    pub quote: RateQuote,
}

/// Billed shipment sheet for one carrier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingBatch {
    pub service: CarrierService,
    pub headers: Vec<String>,
    pub shipments: Vec<BilledShipment>,
}

impl BillingBatch {
    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }

    /// Sum of billable (rounded) weights in kg
    pub fn total_weight(&self) -> f64 {
        self.shipments.iter().map(|s| s.quote.rounded_weight).sum()
    }

    /// Sum of calculated rates
    pub fn total_amount(&self) -> f64 {
        self.shipments.iter().map(|s| s.quote.rate).sum()
    }
}

/// Rate every row of an already-loaded sheet against one table.
///
/// Aborts on the first failing row; no partial batch is returned.
pub fn bill_batch(
    service: CarrierService,
    table: &RateTable,
    sheet: &ShipmentSheet,
    progress: Option<ProgressCallback<'_>>,
) -> Result<BillingBatch> {
    let profile = service.profile();
    let total = sheet.rows.len();
    let mut shipments = Vec::with_capacity(total);

    for (done, row) in sheet.rows.iter().enumerate() {
        let quote = profile
            .calculate(&row.location, row.weight, table)
            .map_err(|source| Error::RowFailed {
                row: row.row,
                source,
            })?;

        tracing::debug!(
            row = row.row,
            key = %quote.rate_key,
            weight = row.weight,
            rounded_weight = quote.rounded_weight,
            rate = quote.rate,
            "billed shipment"
        );

        shipments.push(BilledShipment {
            row: row.row,
            cells: row.cells.clone(),
            quote,
        });

        if let Some(callback) = progress {
            callback(done + 1, total);
        }
    }

    Ok(BillingBatch {
        service,
        headers: sheet.headers.clone(),
        shipments,
    })
}

/// Load the carrier's rate table and shipment sheet, then bill every row.
pub fn bill_file<R: RateTableRepository>(
    repo: &R,
    service: CarrierService,
    input: &Path,
    progress: Option<ProgressCallback<'_>>,
) -> Result<BillingBatch> {
    if !input.exists() {
        return Err(Error::FileNotFound(input.display().to_string()));
    }

    let table = repo.load(service)?;
    let sheet = load_shipments(input, service.profile())?;
    let batch = bill_batch(service, &table, &sheet, progress)?;

    tracing::info!(
        carrier = %service,
        rows = batch.len(),
        total_amount = batch.total_amount(),
        "billing complete"
    );
    Ok(batch)
}

/// Quote a single shipment against the carrier's stored table.
///
/// The weight is checked the same way the shipment readers check it.
pub fn quote<R: RateTableRepository>(
    repo: &R,
    service: CarrierService,
    location: &LocationFields,
    weight: f64,
) -> Result<RateQuote> {
    if !is_billable_weight(weight) {
        return Err(Error::InvalidWeight(weight));
    }
    let table = repo.load(service)?;
    Ok(calculate_rate(service, location, weight, &table)?)
}
