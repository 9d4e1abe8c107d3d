//! Price resolution from slabs and overage
//!
//! At or below the ceiling weight the price is an exact slab lookup. Above
//! it the price is the ceiling slab plus one overage price per unit of extra
//! weight. There is no interpolation and no nearest-slab fallback.

use ratecard_types::RateError;
use serde::Serialize;

use crate::model::RateTable;

/// Where slab pricing stops and how extra weight is counted
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverageRule {
    /// Highest weight (kg) priced directly from a slab
    pub ceiling_weight: f64,
    /// Weight (kg) covered by one overage price
    pub unit_size: f64,
}

impl OverageRule {
    pub const fn new(ceiling_weight: f64, unit_size: f64) -> Self {
        Self {
            ceiling_weight,
            unit_size,
        }
    }

    /// Number of overage units charged for a rounded weight above the ceiling
    pub fn units(&self, rounded_weight: f64) -> f64 {
        (rounded_weight - self.ceiling_weight) / self.unit_size
    }
}

/// Resolve the price for a canonical key and an already-rounded weight.
///
/// # Errors
/// * `UnknownKey` - the key is not in the table
/// * `NoSlabForWeight` - at or below the ceiling with no exact slab
/// * `IncompleteRateSetup` - above the ceiling with no ceiling slab or no overage price
pub fn price(
    table: &RateTable,
    key: &str,
    rounded_weight: f64,
    rule: &OverageRule,
) -> Result<f64, RateError> {
    let zone = table
        .zone(key)
        .ok_or_else(|| RateError::UnknownKey(key.to_string()))?;

    if rounded_weight <= rule.ceiling_weight {
        return zone
            .slab(rounded_weight)
            .ok_or_else(|| RateError::NoSlabForWeight {
                key: key.to_string(),
                weight: rounded_weight,
            });
    }

    let (Some(base_rate), Some(overage_rate)) = (zone.slab(rule.ceiling_weight), zone.overage())
    else {
        return Err(RateError::IncompleteRateSetup(key.to_string()));
    };

    Ok(base_rate + rule.units(rounded_weight) * overage_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PER_KG_ABOVE_5: OverageRule = OverageRule::new(5.0, 1.0);
    const PER_500G_ABOVE_1: OverageRule = OverageRule::new(1.0, 0.5);

    fn tamilnadu_table() -> RateTable {
        let mut table = RateTable::new();
        table.insert_slab("Tamilnadu", 0.25, 10.0);
        table.insert_slab("Tamilnadu", 5.0, 60.0);
        table
    }

    #[test]
    fn test_exact_slab() {
        let table = tamilnadu_table();
        let rate = price(&table, "Tamilnadu", 0.25, &PER_KG_ABOVE_5).unwrap();
        assert!((rate - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ceiling_weight_uses_slab() {
        let mut table = tamilnadu_table();
        table.set_overage("Tamilnadu", 12.0);
        let rate = price(&table, "Tamilnadu", 5.0, &PER_KG_ABOVE_5).unwrap();
        assert!((rate - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_slab_below_ceiling() {
        let table = tamilnadu_table();
        let err = price(&table, "Tamilnadu", 0.5, &PER_KG_ABOVE_5).unwrap_err();
        assert_eq!(
            err,
            RateError::NoSlabForWeight {
                key: "Tamilnadu".to_string(),
                weight: 0.5
            }
        );
    }

    #[test]
    fn test_unknown_key() {
        let table = tamilnadu_table();
        let err = price(&table, "Kerala", 0.25, &PER_KG_ABOVE_5).unwrap_err();
        assert_eq!(err, RateError::UnknownKey("Kerala".to_string()));
    }

    #[test]
    fn test_overage_per_kg() {
        let mut table = tamilnadu_table();
        table.set_overage("Tamilnadu", 12.0);
        // 60 + 2 * 12
        let rate = price(&table, "Tamilnadu", 7.0, &PER_KG_ABOVE_5).unwrap();
        assert!((rate - 84.0).abs() < 1e-9);
    }

    #[test]
    fn test_overage_half_kg_step_is_fractional_unit() {
        let mut table = tamilnadu_table();
        table.set_overage("Tamilnadu", 12.0);
        // 60 + 0.5 * 12
        let rate = price(&table, "Tamilnadu", 5.5, &PER_KG_ABOVE_5).unwrap();
        assert!((rate - 66.0).abs() < 1e-9);
    }

    #[test]
    fn test_overage_per_500g() {
        let mut table = RateTable::new();
        table.insert_slab("HYD", 1.0, 20.0);
        table.set_overage("HYD", 5.0);
        // extra 1.0 kg = 2 units: 20 + 2 * 5
        let rate = price(&table, "HYD", 2.0, &PER_500G_ABOVE_1).unwrap();
        assert!((rate - 30.0).abs() < 1e-9);
        // extra 0.5 kg = 1 unit
        let rate = price(&table, "HYD", 1.5, &PER_500G_ABOVE_1).unwrap();
        assert!((rate - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_overage_price_is_incomplete() {
        let table = tamilnadu_table();
        let err = price(&table, "Tamilnadu", 6.0, &PER_KG_ABOVE_5).unwrap_err();
        assert_eq!(err, RateError::IncompleteRateSetup("Tamilnadu".to_string()));
    }

    #[test]
    fn test_missing_ceiling_slab_is_incomplete() {
        let mut table = RateTable::new();
        table.insert_slab("Kerala", 4.5, 55.0);
        table.set_overage("Kerala", 12.0);
        // no fallback to the 4.5 kg slab
        let err = price(&table, "Kerala", 6.0, &PER_KG_ABOVE_5).unwrap_err();
        assert_eq!(err, RateError::IncompleteRateSetup("Kerala".to_string()));
    }

    #[test]
    fn test_units() {
        assert!((PER_KG_ABOVE_5.units(7.0) - 2.0).abs() < f64::EPSILON);
        assert!((PER_500G_ABOVE_1.units(2.0) - 2.0).abs() < f64::EPSILON);
        assert!((PER_500G_ABOVE_1.units(1.5) - 1.0).abs() < f64::EPSILON);
    }
}
