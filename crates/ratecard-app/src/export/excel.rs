//! Excel export functionality

use std::path::Path;

use chrono::Local;
use ratecard_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::app::BillingBatch;

pub const ROUNDED_WEIGHT_COLUMN: &str = "Rounded_Weight";
pub const CALCULATED_RATE_COLUMN: &str = "Calculated_Rate";

/// Export a billed batch to an Excel file
pub fn export_to_excel(batch: &BillingBatch, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let billing_sheet = workbook.add_worksheet();
    write_billing_sheet(billing_sheet, batch)?;

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, batch)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    tracing::info!(path = %output_path.display(), rows = batch.len(), "wrote billing workbook");
    Ok(())
}

fn write_billing_sheet(sheet: &mut Worksheet, batch: &BillingBatch) -> Result<()> {
    sheet
        .set_name("Billing")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let headers = batch
        .headers
        .iter()
        .map(String::as_str)
        .chain([ROUNDED_WEIGHT_COLUMN, CALCULATED_RATE_COLUMN]);
    for (col, header) in headers.enumerate() {
        sheet
            .write_string_with_format(0, col as u16, header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let weight_col = batch.headers.len() as u16;
    let rate_col = weight_col + 1;

    for (row_idx, shipment) in batch.shipments.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        for (col, cell) in shipment.cells.iter().enumerate() {
            write_cell(sheet, row, col as u16, cell)?;
        }

        sheet
            .write_number(row, weight_col, shipment.quote.rounded_weight)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, rate_col, shipment.quote.rate)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(rate_col, 16)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &str) -> Result<()> {
    let written = match numeric_cell(cell) {
        Some(number) => sheet.write_number(row, col, number),
        None => sheet.write_string(row, col, cell),
    };
    written.map_err(|e| Error::Excel(e.to_string()))?;
    Ok(())
}

/// A cell is numeric only if the number prints back as the same text,
/// so identifiers like `00123` or `1e5` stay strings.
fn numeric_cell(cell: &str) -> Option<f64> {
    cell.parse::<f64>()
        .ok()
        .filter(|number| number.is_finite() && number.to_string() == cell)
}

fn write_summary_sheet(sheet: &mut Worksheet, batch: &BillingBatch) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Billing Summary", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Carrier:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, batch.service.as_str())
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(3, 0, "Generated:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(3, 1, Local::now().to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(4, 0, "Shipments:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(4, 1, batch.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(5, 0, "Billable Weight (kg):")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(5, 1, batch.total_weight())
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(6, 0, "Total Amount:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(6, 1, batch.total_amount())
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .set_column_width(0, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 32)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
