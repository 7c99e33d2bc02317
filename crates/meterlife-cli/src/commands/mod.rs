pub mod appliances;
pub mod config;
pub mod estimate;
pub mod forecast;

use std::path::Path;

use meterlife_core::RunConfig;

/// Load a run file, with CLI-flag overrides applied on top.
pub fn load_run_config(
    path: &Path,
    balance: Option<f64>,
    tariff: Option<f64>,
    horizon: Option<u32>,
) -> Result<RunConfig, Box<dyn std::error::Error>> {
    let mut config = RunConfig::load(path)?;
    if let Some(balance) = balance {
        config.input.balance = balance;
    }
    if let Some(tariff) = tariff {
        config.input.tariff = tariff;
    }
    if let Some(horizon) = horizon {
        config.estimator.horizon_days = horizon;
    }
    Ok(config)
}
