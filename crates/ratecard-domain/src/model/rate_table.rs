//! In-memory rate table
//!
//! Built once per batch from the persistent store and read-only afterwards.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Slab weight in kilograms, usable as an exact-match map key
#[derive(Debug, Clone, Copy)]
pub struct SlabWeight(f64);

impl SlabWeight {
    pub fn new(kg: f64) -> Self {
        // -0.0 and 0.0 must land on the same slab
        if kg == 0.0 {
            Self(0.0)
        } else {
            Self(kg)
        }
    }

    pub fn kg(&self) -> f64 {
        self.0
    }
}

impl PartialEq for SlabWeight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SlabWeight {}

impl PartialOrd for SlabWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlabWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Slab prices and overage price for one canonical rate key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneRates {
    slabs: BTreeMap<SlabWeight, f64>,
    overage: Option<f64>,
}

impl ZoneRates {
    /// Exact-match slab price for a rounded weight
    pub fn slab(&self, weight: f64) -> Option<f64> {
        self.slabs.get(&SlabWeight::new(weight)).copied()
    }

    /// Price per overage unit beyond the ceiling weight
    pub fn overage(&self) -> Option<f64> {
        self.overage
    }

    /// Slabs in ascending weight order as `(weight, price)`
    pub fn slabs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.slabs.iter().map(|(w, price)| (w.kg(), *price))
    }

    pub fn slab_count(&self) -> usize {
        self.slabs.len()
    }
}

/// Rate table for a single carrier service, keyed by canonical rate key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    zones: BTreeMap<String, ZoneRates>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the price of an exact slab weight, replacing any previous price
    pub fn insert_slab(&mut self, key: impl Into<String>, weight: f64, price: f64) {
        self.zones
            .entry(key.into())
            .or_default()
            .slabs
            .insert(SlabWeight::new(weight), price);
    }

    /// Record the overage unit price for a key, replacing any previous value
    pub fn set_overage(&mut self, key: impl Into<String>, price: f64) {
        self.zones.entry(key.into()).or_default().overage = Some(price);
    }

    pub fn zone(&self, key: &str) -> Option<&ZoneRates> {
        self.zones.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ZoneRates)> {
        self.zones.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup_slab() {
        let mut table = RateTable::new();
        table.insert_slab("Tamilnadu", 0.25, 10.0);
        table.insert_slab("Tamilnadu", 5.0, 60.0);

        let zone = table.zone("Tamilnadu").unwrap();
        assert_eq!(zone.slab(0.25), Some(10.0));
        assert_eq!(zone.slab(5.0), Some(60.0));
        assert_eq!(zone.slab(0.5), None);
        assert_eq!(zone.overage(), None);
    }

    #[test]
    fn test_overage_alone_creates_key() {
        let mut table = RateTable::new();
        table.set_overage("ROI", 18.0);

        let zone = table.zone("ROI").unwrap();
        assert_eq!(zone.overage(), Some(18.0));
        assert_eq!(zone.slab_count(), 0);
    }

    #[test]
    fn test_later_insert_replaces_price() {
        let mut table = RateTable::new();
        table.insert_slab("HYD", 1.0, 20.0);
        table.insert_slab("HYD", 1.0, 22.0);
        assert_eq!(table.zone("HYD").unwrap().slab(1.0), Some(22.0));
    }

    #[test]
    fn test_negative_zero_matches_zero() {
        let mut table = RateTable::new();
        table.insert_slab("WEST", -0.0, 1.0);
        assert_eq!(table.zone("WEST").unwrap().slab(0.0), Some(1.0));
    }

    #[test]
    fn test_slabs_are_sorted() {
        let mut table = RateTable::new();
        table.insert_slab("Kerala", 5.0, 60.0);
        table.insert_slab("Kerala", 0.5, 12.0);
        table.insert_slab("Kerala", 0.25, 10.0);

        let weights: Vec<f64> = table.zone("Kerala").unwrap().slabs().map(|(w, _)| w).collect();
        assert_eq!(weights, vec![0.25, 0.5, 5.0]);
    }

    #[test]
    fn test_iter_and_len() {
        let mut table = RateTable::new();
        assert!(table.is_empty());
        table.insert_slab("within_zone", 0.25, 30.0);
        table.insert_slab("within_city", 0.25, 20.0);
        assert_eq!(table.len(), 2);
        let keys: Vec<&str> = table.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["within_city", "within_zone"]);
    }
}
