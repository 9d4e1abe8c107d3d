//! Configuration management for ratecard
//!
//! Config stored at: ~/.config/ratecard/config.json

use std::path::{Path, PathBuf};

use ratecard_domain::CarrierService;
use ratecard_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `<service>.csv` rate tables
    #[serde(default)]
    pub rates_dir: Option<PathBuf>,

    /// Directory for billing workbooks (defaults to the working directory)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("ratecard");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the rate table directory
    pub fn rates_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.rates_dir {
            return Ok(dir.clone());
        }

        let rates_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("ratecard")
            .join("rates");
        Ok(rates_dir)
    }

    /// Where a billing workbook goes when no explicit path is given
    pub fn default_output_path(&self, service: CarrierService) -> PathBuf {
        let file_name = format!("{}_billing_output.xlsx", service);
        match self.output_dir {
            Some(ref dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Ratecard Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Rates dir:      {}",
            self.rates_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(
            f,
            "Output dir:     {}",
            self.output_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(working directory)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratecard_types::Error;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            rates_dir: Some(PathBuf::from("/srv/rates")),
            output_dir: None,
            output_format: OutputFormat::Json,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.rates_dir().unwrap(), PathBuf::from("/srv/rates"));
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_format":"json"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.rates_dir.is_none());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_default_output_path() {
        let config = Config {
            output_dir: Some(PathBuf::from("out")),
            ..Config::default()
        };
        assert_eq!(
            config.default_output_path(CarrierService::TrackonWest),
            PathBuf::from("out").join("trackon_west_billing_output.xlsx")
        );
        assert_eq!(
            Config::default().default_output_path(CarrierService::Franch),
            PathBuf::from("franch_billing_output.xlsx")
        );
    }
}
