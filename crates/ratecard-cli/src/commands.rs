//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_batch, output_carriers, output_quote, output_rates};
use indicatif::{ProgressBar, ProgressStyle};
use ratecard_app::app::{bill_file, quote};
use ratecard_app::config::Config;
use ratecard_app::export::export_to_excel;
use ratecard_app::repository::{open_rate_repo, open_rate_repo_at};
use ratecard_domain::repository::RateTableRepository;
use ratecard_domain::{CarrierService, LocationFields};
use ratecard_infra::persistence::FileRateTableRepository;
use ratecard_types::{OutputFormat, Result};
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Bill {
            ref input,
            carrier,
            ref output,
        } => {
            let repo = rate_repo(&cli, &config)?;
            let output_path = output
                .clone()
                .unwrap_or_else(|| config.default_output_path(carrier));
            cmd_bill(&repo, carrier, input.clone(), output_path, output_format)
        }

        Commands::Quote {
            carrier,
            ref city,
            ref state,
            weight,
        } => {
            let repo = rate_repo(&cli, &config)?;
            let location = LocationFields {
                city: city.clone(),
                state: state.clone(),
            };
            cmd_quote(&repo, carrier, location, weight, output_format)
        }

        Commands::Rates { carrier } => {
            let repo = rate_repo(&cli, &config)?;
            cmd_rates(&repo, carrier, output_format)
        }

        Commands::Carriers => output_carriers(output_format),

        Commands::Config {
            show,
            ref set_rates_dir,
            ref set_output_dir,
            set_output,
            reset,
        } => cmd_config(
            show,
            set_rates_dir.clone(),
            set_output_dir.clone(),
            set_output,
            reset,
        ),
    }
}

/// `--rates-dir` overrides the configured directory
fn rate_repo(cli: &Cli, config: &Config) -> Result<FileRateTableRepository> {
    match cli.rates_dir {
        Some(ref dir) => Ok(open_rate_repo_at(dir.clone())),
        None => open_rate_repo(config),
    }
}

fn cmd_bill(
    repo: &FileRateTableRepository,
    carrier: CarrierService,
    input: PathBuf,
    output: PathBuf,
    output_format: OutputFormat,
) -> Result<()> {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    let progress = |done: usize, total: usize| {
        pb.set_length(total as u64);
        pb.set_position(done as u64);
    };

    let result = bill_file(repo, carrier, &input, Some(&progress));
    pb.finish_and_clear();
    let batch = result?;

    export_to_excel(&batch, &output)?;
    output_batch(output_format, &batch, &output)
}

fn cmd_quote(
    repo: &FileRateTableRepository,
    carrier: CarrierService,
    location: LocationFields,
    weight: f64,
    output_format: OutputFormat,
) -> Result<()> {
    let result = quote(repo, carrier, &location, weight)?;
    output_quote(output_format, carrier, &location, weight, &result)
}

fn cmd_rates(
    repo: &FileRateTableRepository,
    carrier: CarrierService,
    output_format: OutputFormat,
) -> Result<()> {
    let table = repo.load(carrier)?;
    output_rates(output_format, carrier, &table)
}

fn cmd_config(
    show: bool,
    set_rates_dir: Option<PathBuf>,
    set_output_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(dir) = set_rates_dir {
        config.rates_dir = Some(dir);
        modified = true;
    }

    if let Some(dir) = set_output_dir {
        config.output_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
