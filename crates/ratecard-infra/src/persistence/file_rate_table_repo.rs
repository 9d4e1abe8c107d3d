//! File-based implementation of RateTableRepository

use std::path::PathBuf;

use ratecard_domain::repository::RateTableRepository;
use ratecard_domain::{CarrierService, RateTable};
use ratecard_types::{Error, Result};

use crate::rate_csv::load_rate_table;

/// Rate tables stored as one CSV file per carrier: `<rates_dir>/<service>.csv`
pub struct FileRateTableRepository {
    rates_dir: PathBuf,
}

impl FileRateTableRepository {
    pub fn new(rates_dir: PathBuf) -> Self {
        Self { rates_dir }
    }

    /// Path of the CSV file backing a carrier's table
    pub fn table_path(&self, service: CarrierService) -> PathBuf {
        self.rates_dir.join(format!("{}.csv", service))
    }
}

impl RateTableRepository for FileRateTableRepository {
    fn load(&self, service: CarrierService) -> Result<RateTable> {
        let path = self.table_path(service);
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        Ok(load_rate_table(&path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_by_service_name() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("trackon_hyd.csv"),
            "zone,slab_weight,rate,is_per_kg\nHYD,1,20,0\nHYD,,5,1\n",
        )
        .unwrap();

        let repo = FileRateTableRepository::new(dir.path().to_path_buf());
        let table = repo.load(CarrierService::TrackonHyd).unwrap();
        let hyd = table.zone("HYD").unwrap();
        assert_eq!(hyd.slab(1.0), Some(20.0));
        assert_eq!(hyd.overage(), Some(5.0));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let repo = FileRateTableRepository::new(dir.path().to_path_buf());
        let err = repo.load(CarrierService::Franch).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(ref p) if p.ends_with("franch.csv")));
    }

    #[test]
    fn test_malformed_file_maps_to_rate_table_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("franch.csv"), "city,price\nGoa,10\n").unwrap();
        let repo = FileRateTableRepository::new(dir.path().to_path_buf());
        let err = repo.load(CarrierService::Franch).unwrap_err();
        assert!(matches!(err, Error::RateTable(_)));
    }
}
