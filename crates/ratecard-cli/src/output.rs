//! Output formatting module

use ratecard_app::app::BillingBatch;
use ratecard_domain::{CarrierProfile, CarrierService, LocationFields, RateQuote, RateTable};
use ratecard_types::{OutputFormat, Result};
use serde_json::json;
use std::path::Path;

pub fn output_quote(
    output_format: OutputFormat,
    service: CarrierService,
    location: &LocationFields,
    weight: f64,
    quote: &RateQuote,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = json!({
            "carrier": service,
            "city": location.city,
            "state": location.state,
            "weight": weight,
            "rate_key": quote.rate_key,
            "rounded_weight": quote.rounded_weight,
            "rate": quote.rate,
        });
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        println!("\nRate Quote");
        println!("==========");
        println!("Carrier:         {}", service);
        if let Some(ref city) = location.city {
            println!("City:            {}", city);
        }
        if let Some(ref state) = location.state {
            println!("State:           {}", state);
        }
        println!("Rate key:        {}", quote.rate_key);
        println!("Weight:          {} kg", weight);
        println!("Rounded weight:  {} kg", quote.rounded_weight);
        println!("Rate:            {:.2}", quote.rate);
    }

    Ok(())
}

pub fn output_batch(output_format: OutputFormat, batch: &BillingBatch, workbook: &Path) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = json!({
            "carrier": batch.service,
            "workbook": workbook.display().to_string(),
            "rows": batch.len(),
            "total_weight": batch.total_weight(),
            "total_amount": batch.total_amount(),
            "shipments": batch.shipments,
        });
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        println!("\nBilling Summary");
        println!("===============");
        println!("Carrier:         {}", batch.service);
        println!("Shipments:       {}", batch.len());
        println!("Billable weight: {} kg", batch.total_weight());
        println!("Total amount:    {:.2}", batch.total_amount());
        println!("Workbook:        {}", workbook.display());
    }

    Ok(())
}

pub fn output_rates(output_format: OutputFormat, service: CarrierService, table: &RateTable) -> Result<()> {
    if output_format == OutputFormat::Json {
        let keys: Vec<_> = table
            .iter()
            .map(|(key, zone)| {
                let slabs: Vec<_> = zone
                    .slabs()
                    .map(|(weight, rate)| json!({ "weight": weight, "rate": rate }))
                    .collect();
                json!({ "key": key, "slabs": slabs, "overage": zone.overage() })
            })
            .collect();
        let content = json!({ "carrier": service, "keys": keys });
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    let overage = service.profile().overage;
    println!("\nRate Table: {}", service);
    println!("{}", "=".repeat(12 + service.as_str().len()));
    if table.is_empty() {
        println!("(no rates)");
        return Ok(());
    }

    for (key, zone) in table.iter() {
        println!("\n[{}]", key);
        for (weight, rate) in zone.slabs() {
            println!("  {:>8} kg  {:>10.2}", weight, rate);
        }
        match zone.overage() {
            Some(rate) => println!(
                "  +{:.2} per {} kg above {} kg",
                rate, overage.unit_size, overage.ceiling_weight
            ),
            None => println!("  (no overage price)"),
        }
    }

    Ok(())
}

pub fn output_carriers(output_format: OutputFormat) -> Result<()> {
    let profiles = CarrierProfile::all();

    if output_format == OutputFormat::Json {
        let content: Vec<_> = profiles
            .iter()
            .map(|p| {
                json!({
                    "carrier": p.service,
                    "location_rule": p.location,
                    "rounding": p.rounding,
                    "ceiling_weight": p.overage.ceiling_weight,
                    "overage_unit": p.overage.unit_size,
                    "columns": p.required_columns(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    println!(
        "{:<22} {:<30} {:<34} {:>8} {:>6}  {}",
        "Carrier", "Location", "Rounding", "Ceiling", "Unit", "Columns"
    );
    println!("{}", "-".repeat(120));
    for p in profiles {
        println!(
            "{:<22} {:<30} {:<34} {:>6} kg {:>3} kg  {}",
            p.service.as_str(),
            p.location.describe(),
            p.rounding.describe(),
            p.overage.ceiling_weight,
            p.overage.unit_size,
            p.required_columns().join(", ")
        );
    }

    Ok(())
}
