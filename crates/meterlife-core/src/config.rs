//! TOML-based estimation run configuration.
//!
//! Everything an estimation run needs travels in explicit structures: the
//! metered inputs (`EstimateInput`) and the numeric policy
//! (`EstimatorConfig`). Nothing is ambient, so independent runs cannot
//! interfere and tests can inject arbitrary parameter combinations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::appliance::Appliance;
use crate::error::{ConfigError, ValidationError};
use crate::history::{UsageHistory, UsageSample};

/// Tolerance and iteration cap for an iterative solver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverTolerance {
    /// Stop once the bracket is narrower than this
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Hard iteration cap guaranteeing termination
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

impl Default for SolverTolerance {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Search bounds for the usage-reduction fraction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReductionBounds {
    #[serde(default = "default_reduction_min")]
    pub min: f64,
    #[serde(default = "default_reduction_max")]
    pub max: f64,
}

impl Default for ReductionBounds {
    fn default() -> Self {
        Self {
            min: default_reduction_min(),
            max: default_reduction_max(),
        }
    }
}

/// Numeric policy for one estimation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Number of future days to forecast
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// Trailing history samples the forecast polynomial is fitted to.
    /// Values larger than the history use the whole history.
    #[serde(default = "default_interpolation_window")]
    pub interpolation_window: usize,
    /// Floor negative forecast values at zero (documented policy choice:
    /// hard floor, no re-fit)
    #[serde(default = "default_true")]
    pub clamp_forecast: bool,
    #[serde(default)]
    pub reduction: ReductionBounds,
    #[serde(default)]
    pub bisection: SolverTolerance,
    #[serde(default)]
    pub golden_section: SolverTolerance,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            interpolation_window: default_interpolation_window(),
            clamp_forecast: true,
            reduction: ReductionBounds::default(),
            bisection: SolverTolerance::default(),
            golden_section: SolverTolerance::default(),
        }
    }
}

impl EstimatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "horizon_days".into(),
                message: "must be at least 1".into(),
            });
        }
        if self.interpolation_window < UsageHistory::MIN_SAMPLES {
            return Err(ConfigError::InvalidValue {
                key: "interpolation_window".into(),
                message: format!("must be at least {}", UsageHistory::MIN_SAMPLES),
            });
        }
        if !(0.0..1.0).contains(&self.reduction.min)
            || !(0.0..1.0).contains(&self.reduction.max)
            || self.reduction.min >= self.reduction.max
        {
            return Err(ConfigError::InvalidValue {
                key: "reduction".into(),
                message: format!(
                    "bounds must satisfy 0 <= min < max < 1, got [{}, {}]",
                    self.reduction.min, self.reduction.max
                ),
            });
        }
        for (key, tol) in [
            ("bisection", &self.bisection),
            ("golden_section", &self.golden_section),
        ] {
            if !tol.tolerance.is_finite() || tol.tolerance <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("{key}.tolerance"),
                    message: format!("must be positive and finite, got {}", tol.tolerance),
                });
            }
            if tol.max_iterations == 0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("{key}.max_iterations"),
                    message: "must be at least 1".into(),
                });
            }
        }
        Ok(())
    }
}

/// Metered inputs for one estimation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Unit price, currency per kWh
    pub tariff: f64,
    /// Prepaid credit remaining, currency units
    pub balance: f64,
    /// Daily consumption history, oldest first
    pub history: Vec<UsageSample>,
    /// Optional appliance ratings for the rating-based cross-check
    #[serde(default)]
    pub appliances: Vec<Appliance>,
}

impl EstimateInput {
    /// Validate every field and build the validated history.
    pub fn validate(&self) -> Result<UsageHistory, ValidationError> {
        if !self.tariff.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "tariff".into(),
                value: self.tariff,
            });
        }
        if self.tariff <= 0.0 {
            return Err(ValidationError::NonPositiveTariff {
                tariff: self.tariff,
            });
        }
        if !self.balance.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "balance".into(),
                value: self.balance,
            });
        }
        if self.balance < 0.0 {
            return Err(ValidationError::NegativeBalance {
                balance: self.balance,
            });
        }
        for appliance in &self.appliances {
            appliance.validate()?;
        }
        UsageHistory::new(self.history.clone())
    }
}

/// A complete run file: inputs plus optional estimator overrides.
///
/// ```toml
/// tariff = 1.6
/// balance = 50.0
///
/// [[history]]
/// day = 1
/// kwh = 5.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(flatten)]
    pub input: EstimateInput,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    /// Currency label used only for display
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl RunConfig {
    /// Load a run file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// A commented sample run file with the documented example data.
    pub fn sample_toml() -> &'static str {
        SAMPLE_RUN_FILE
    }
}

const SAMPLE_RUN_FILE: &str = r#"# Meterlife run file.
# Prepaid credit remaining and unit price.
balance = 50.0
tariff = 1.6
currency = "GHS"

# Daily consumption history, oldest first. Day indices must strictly increase.
[[history]]
day = 1
kwh = 5.5

[[history]]
day = 2
kwh = 6.1

[[history]]
day = 3
kwh = 5.8

[[history]]
day = 4
kwh = 6.4

[[history]]
day = 5
kwh = 5.9

# Optional appliance ratings for the rating-based daily estimate.
[[appliances]]
name = "Fan"
watts = 70.0
hours_per_day = 8.0

[[appliances]]
name = "Fridge"
watts = 200.0
hours_per_day = 24.0

[[appliances]]
name = "Bulb"
watts = 10.0
hours_per_day = 6.0

[[appliances]]
name = "TV"
watts = 100.0
hours_per_day = 5.0

# Numeric policy. Every key is optional; these are the defaults.
[estimator]
horizon_days = 5
interpolation_window = 3
clamp_forecast = true

[estimator.reduction]
min = 0.0
max = 0.5

[estimator.bisection]
tolerance = 1e-4
max_iterations = 100

[estimator.golden_section]
tolerance = 1e-4
max_iterations = 100
"#;

fn default_tolerance() -> f64 {
    1e-4
}
fn default_max_iterations() -> u32 {
    100
}
fn default_reduction_min() -> f64 {
    0.0
}
fn default_reduction_max() -> f64 {
    0.5
}
fn default_horizon_days() -> u32 {
    5
}
fn default_interpolation_window() -> usize {
    3
}
fn default_true() -> bool {
    true
}
fn default_currency() -> String {
    "GHS".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_defaults() {
        let config = EstimatorConfig::default();
        assert_eq!(config.horizon_days, 5);
        assert_eq!(config.interpolation_window, 3);
        assert!(config.clamp_forecast);
        assert_eq!(config.bisection.max_iterations, 100);
        assert!((config.golden_section.tolerance - 1e-4).abs() < 1e-18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_run_file() {
        let raw = indoc! {r#"
            tariff = 1.6
            balance = 50.0

            [[history]]
            day = 1
            kwh = 5.5

            [[history]]
            day = 2
            kwh = 6.1
        "#};
        let config: RunConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.input.history.len(), 2);
        assert!(config.input.appliances.is_empty());
        assert_eq!(config.estimator.horizon_days, 5);
        assert_eq!(config.currency, "GHS");
    }

    #[test]
    fn test_estimator_overrides() {
        let raw = indoc! {r#"
            tariff = 1.6
            balance = 50.0

            [[history]]
            day = 1
            kwh = 5.5

            [[history]]
            day = 2
            kwh = 6.1

            [estimator]
            horizon_days = 10

            [estimator.reduction]
            max = 0.3
        "#};
        let config: RunConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.estimator.horizon_days, 10);
        assert_eq!(config.estimator.reduction.min, 0.0);
        assert_eq!(config.estimator.reduction.max, 0.3);
        // Untouched sections keep their defaults
        assert_eq!(config.estimator.bisection.max_iterations, 100);
    }

    #[test]
    fn test_sample_run_file_parses() {
        let config: RunConfig = toml::from_str(RunConfig::sample_toml()).unwrap();
        assert_eq!(config.input.history.len(), 5);
        assert_eq!(config.input.appliances.len(), 4);
        assert!(config.input.validate().is_ok());
        assert!(config.estimator.validate().is_ok());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(&path, RunConfig::sample_toml()).unwrap();

        let config = RunConfig::load(&path).unwrap();
        assert_eq!(config.input.balance, 50.0);

        let err = RunConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::LoadFailed { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        let config = EstimatorConfig {
            reduction: ReductionBounds { min: 0.5, max: 0.5 },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_horizon() {
        let config = EstimatorConfig {
            horizon_days: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_tolerance() {
        let config = EstimatorConfig {
            bisection: SolverTolerance {
                tolerance: 0.0,
                max_iterations: 100,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_input_validation_order() {
        let input = EstimateInput {
            tariff: -1.0,
            balance: 50.0,
            history: vec![],
            appliances: vec![],
        };
        // Tariff is rejected before the too-short history is even looked at
        assert!(matches!(
            input.validate(),
            Err(ValidationError::NonPositiveTariff { .. })
        ));
    }
}
