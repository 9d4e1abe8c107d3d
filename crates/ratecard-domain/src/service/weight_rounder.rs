//! Billable weight rounding
//!
//! Weights are not validated here: zero or negative input goes through the
//! formula unchanged. Rejecting such rows is the row source's job.

use serde::Serialize;

/// Smallest billable weight under the half-kg policy
pub const MIN_BILLABLE_KG: f64 = 0.25;

/// Policy mapping a raw weight (kg) to a billable weight (kg)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// 0.25 kg floor, otherwise up to the next 0.5 kg
    HalfKgFloor,
    /// Up to the next whole kg, no floor
    WholeKgCeiling,
}

impl RoundingPolicy {
    pub fn round(&self, weight: f64) -> f64 {
        match self {
            RoundingPolicy::HalfKgFloor => round_half_kg(weight),
            RoundingPolicy::WholeKgCeiling => round_whole_kg(weight),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            RoundingPolicy::HalfKgFloor => "0.25 kg floor, then 0.5 kg steps",
            RoundingPolicy::WholeKgCeiling => "whole kg",
        }
    }
}

pub fn round_half_kg(weight: f64) -> f64 {
    if weight <= MIN_BILLABLE_KG {
        return MIN_BILLABLE_KG;
    }
    (weight * 2.0).ceil() / 2.0
}

pub fn round_whole_kg(weight: f64) -> f64 {
    weight.ceil()
}
