//! Full estimation report command.

use clap::Args;
use std::path::PathBuf;

use meterlife_core::{render_usage_chart, LifeEstimator};

#[derive(Args)]
pub struct EstimateArgs {
    /// Run file (TOML) with balance, tariff and usage history
    pub run_file: PathBuf,
    /// Override the balance from the run file
    #[arg(long)]
    pub balance: Option<f64>,
    /// Override the tariff from the run file
    #[arg(long)]
    pub tariff: Option<f64>,
    /// Override the forecast horizon (days)
    #[arg(long)]
    pub horizon: Option<u32>,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: EstimateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_run_config(&args.run_file, args.balance, args.tariff, args.horizon)?;
    let estimator = LifeEstimator::with_config(config.estimator.clone());
    let report = estimator.estimate(&config.input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let currency = &config.currency;
    println!("Balance:               {:.2} {}", config.input.balance, currency);
    println!(
        "Tariff:                {:.2} {}/kWh",
        config.input.tariff, currency
    );
    println!("Average daily usage:   {:.2} kWh", report.average_daily_kwh);
    if let Some(rated) = report.appliance_daily_kwh {
        println!("Appliance-rated usage: {:.2} kWh/day", rated);
    }
    println!(
        "Average daily cost:    {:.2} {}",
        report.average_daily_kwh * config.input.tariff,
        currency
    );
    println!();

    match report.days_until_exhaustion {
        Some(days) => println!("Days of credit left:   {:.1}", days),
        None => println!(
            "Days of credit left:   beyond the {}-day forecast horizon",
            config.estimator.horizon_days
        ),
    }
    match &report.recommended_reduction {
        Some(rec) => println!(
            "Recommended usage cut: {:.1}% (+{:.1} days of credit)",
            rec.fraction * 100.0,
            rec.projected_days_gained
        ),
        None => println!("Recommended usage cut: none needed"),
    }

    println!(
        "{}",
        render_usage_chart(&config.input.history, &report.forecast)
    );
    Ok(())
}
