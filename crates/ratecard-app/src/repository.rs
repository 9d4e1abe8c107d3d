//! Repository adapters for persistence layer

use std::path::PathBuf;

use ratecard_infra::persistence::FileRateTableRepository;
use ratecard_types::Result;

use crate::config::Config;

/// Open the file-based rate table repository configured for this install
pub fn open_rate_repo(config: &Config) -> Result<FileRateTableRepository> {
    Ok(FileRateTableRepository::new(config.rates_dir()?))
}

/// Open a rate table repository at a custom directory
pub fn open_rate_repo_at(rates_dir: PathBuf) -> FileRateTableRepository {
    FileRateTableRepository::new(rates_dir)
}
