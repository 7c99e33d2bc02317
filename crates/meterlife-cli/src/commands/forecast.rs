//! Usage forecast command.

use clap::Args;
use std::path::PathBuf;

use meterlife_core::{render_usage_chart, LifeEstimator};

#[derive(Args)]
pub struct ForecastArgs {
    /// Run file (TOML) with balance, tariff and usage history
    pub run_file: PathBuf,
    /// Override the forecast horizon (days)
    #[arg(long)]
    pub horizon: Option<u32>,
    /// Print the forecast as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ForecastArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_run_config(&args.run_file, None, None, args.horizon)?;
    let estimator = LifeEstimator::with_config(config.estimator.clone());
    let report = estimator.estimate(&config.input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.forecast)?);
        return Ok(());
    }

    println!(
        "{}",
        render_usage_chart(&config.input.history, &report.forecast)
    );

    println!("Forecast:");
    for point in &report.forecast {
        println!("  day {:>3}: {:.2} kWh", point.day, point.kwh);
    }
    Ok(())
}
