//! CLI definition using clap

use clap::{Parser, Subcommand};
use ratecard_domain::CarrierService;
use ratecard_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ratecard")]
#[command(version)]
#[command(about = "Courier shipment billing from carrier rate tables")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding <carrier>.csv rate tables. Uses config value if not specified.
    #[arg(long, global = true)]
    pub rates_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rate every row of a shipment sheet and write a billing workbook
    Bill {
        /// Path to shipment .xlsx or .csv (City/State/Weight columns per carrier)
        input: PathBuf,

        /// Carrier service
        #[arg(long, short = 'c', value_enum)]
        carrier: CarrierService,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Quote a single shipment
    Quote {
        /// Carrier service
        #[arg(long, short = 'c', value_enum)]
        carrier: CarrierService,

        /// Destination city (zone name for franch)
        #[arg(long)]
        city: Option<String>,

        /// Destination state or region
        #[arg(long)]
        state: Option<String>,

        /// Actual weight in kg
        #[arg(long, short = 'w')]
        weight: f64,
    },

    /// Show the loaded rate table for a carrier
    Rates {
        /// Carrier service
        #[arg(long, short = 'c', value_enum)]
        carrier: CarrierService,
    },

    /// List carrier services and their billing rules
    Carriers,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set rate table directory
        #[arg(long)]
        set_rates_dir: Option<PathBuf>,

        /// Set billing workbook directory
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
