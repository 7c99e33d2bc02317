//! Appliance ratings and rating-based consumption estimates.
//!
//! Appliances give a second, forecast-independent view of daily consumption:
//! the sum of rated power times daily runtime. The estimator reports it as a
//! cross-check against the metered average.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A household appliance with its rated draw and typical daily runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appliance {
    /// Display name ("Fridge", "Fan", ...)
    pub name: String,
    /// Rated power draw (watts)
    pub watts: f64,
    /// Typical hours of use per day
    pub hours_per_day: f64,
}

impl Appliance {
    pub fn new(name: impl Into<String>, watts: f64, hours_per_day: f64) -> Self {
        Self {
            name: name.into(),
            watts,
            hours_per_day,
        }
    }

    /// Energy this appliance draws in a typical day (kWh).
    pub fn daily_kwh(&self) -> f64 {
        self.watts * self.hours_per_day / 1000.0
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.watts.is_finite() || self.watts < 0.0 {
            return Err(ValidationError::InvalidAppliance {
                name: self.name.clone(),
                message: format!("rated power must be finite and non-negative, got {}", self.watts),
            });
        }
        if !self.hours_per_day.is_finite() || !(0.0..=24.0).contains(&self.hours_per_day) {
            return Err(ValidationError::InvalidAppliance {
                name: self.name.clone(),
                message: format!(
                    "hours per day must be between 0 and 24, got {}",
                    self.hours_per_day
                ),
            });
        }
        Ok(())
    }
}

/// Per-appliance share of the daily bill.
#[derive(Debug, Clone, Serialize)]
pub struct ApplianceCost {
    pub name: String,
    pub daily_kwh: f64,
    pub daily_cost: f64,
}

/// Total rated consumption across a set of appliances (kWh per day).
pub fn total_daily_kwh(appliances: &[Appliance]) -> f64 {
    appliances.iter().map(Appliance::daily_kwh).sum()
}

/// Daily cost breakdown at the given tariff, one entry per appliance.
pub fn cost_breakdown(appliances: &[Appliance], tariff: f64) -> Vec<ApplianceCost> {
    appliances
        .iter()
        .map(|a| {
            let daily_kwh = a.daily_kwh();
            ApplianceCost {
                name: a.name.clone(),
                daily_kwh,
                daily_cost: daily_kwh * tariff,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_appliances() -> Vec<Appliance> {
        vec![
            Appliance::new("Fan", 70.0, 8.0),
            Appliance::new("Fridge", 200.0, 24.0),
            Appliance::new("Bulb", 10.0, 6.0),
            Appliance::new("TV", 100.0, 5.0),
        ]
    }

    #[test]
    fn test_daily_kwh() {
        let fridge = Appliance::new("Fridge", 200.0, 24.0);
        assert!((fridge.daily_kwh() - 4.8).abs() < 1e-12);
    }

    #[test]
    fn test_total_daily_kwh() {
        // 0.56 + 4.8 + 0.06 + 0.5
        assert!((total_daily_kwh(&sample_appliances()) - 5.92).abs() < 1e-12);
    }

    #[test]
    fn test_cost_breakdown() {
        let breakdown = cost_breakdown(&sample_appliances(), 1.6);
        assert_eq!(breakdown.len(), 4);
        let fridge = &breakdown[1];
        assert_eq!(fridge.name, "Fridge");
        assert!((fridge.daily_cost - 7.68).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_negative_watts() {
        let err = Appliance::new("Broken", -5.0, 2.0).validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAppliance { .. }));
    }

    #[test]
    fn test_validate_rejects_impossible_runtime() {
        let err = Appliance::new("Fan", 70.0, 25.0).validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAppliance { .. }));
    }
}
