//! Run file management commands.

use clap::Subcommand;
use std::path::PathBuf;

use meterlife_core::RunConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write a commented sample run file
    Init {
        /// Where to write the file
        #[arg(default_value = "meterlife.toml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Parse a run file and show what the estimator will use
    Show {
        /// Run file to inspect
        path: PathBuf,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Init { path, force } => init(path, force),
        ConfigAction::Show { path } => show(path),
    }
}

fn init(path: PathBuf, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }
    std::fs::write(&path, RunConfig::sample_toml())?;
    println!("Wrote sample run file to {}", path.display());
    Ok(())
}

fn show(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig::load(&path)?;
    config.input.validate()?;
    config.estimator.validate()?;

    println!("Run file: {}", path.display());
    println!("  balance:  {:.2} {}", config.input.balance, config.currency);
    println!(
        "  tariff:   {:.2} {}/kWh",
        config.input.tariff, config.currency
    );
    println!(
        "  history:  {} days ({}..{})",
        config.input.history.len(),
        config.input.history.first().map(|s| s.day).unwrap_or(0),
        config.input.history.last().map(|s| s.day).unwrap_or(0),
    );
    println!("  appliances: {}", config.input.appliances.len());
    println!(
        "  horizon: {} days, window: {} samples, clamp: {}",
        config.estimator.horizon_days,
        config.estimator.interpolation_window,
        config.estimator.clamp_forecast
    );
    println!(
        "  reduction bounds: [{}, {}]",
        config.estimator.reduction.min, config.estimator.reduction.max
    );
    Ok(())
}
