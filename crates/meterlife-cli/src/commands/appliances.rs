//! Appliance cost breakdown command.

use clap::Args;
use std::path::PathBuf;

use meterlife_core::{cost_breakdown, total_daily_kwh};

#[derive(Args)]
pub struct AppliancesArgs {
    /// Run file (TOML) with an appliance list
    pub run_file: PathBuf,
    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AppliancesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_run_config(&args.run_file, None, None, None)?;
    let appliances = &config.input.appliances;

    if appliances.is_empty() {
        println!("No appliances listed in {}", args.run_file.display());
        return Ok(());
    }

    let breakdown = cost_breakdown(appliances, config.input.tariff);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    let currency = &config.currency;
    println!(
        "{:<16} {:>8} {:>8} {:>10} {:>12}",
        "Appliance", "Watts", "Hours", "kWh/day", "Cost/day"
    );
    for (appliance, cost) in appliances.iter().zip(&breakdown) {
        println!(
            "{:<16} {:>8.0} {:>8.1} {:>10.2} {:>9.2} {}",
            cost.name, appliance.watts, appliance.hours_per_day, cost.daily_kwh, cost.daily_cost, currency
        );
    }
    println!();
    let total_kwh = total_daily_kwh(appliances);
    println!(
        "Total: {:.2} kWh/day, {:.2} {} per day at the current tariff",
        total_kwh,
        total_kwh * config.input.tariff,
        currency
    );
    Ok(())
}
