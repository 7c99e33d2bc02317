//! Balance life estimation pipeline.
//!
//! Sequences the four numeric components: interpolate a forecast from the
//! trailing history window, integrate cumulative cost over history plus
//! forecast, root-find the exhaustion day, and search for the smallest usage
//! cut that stretches the credit to the end of the horizon. The estimator
//! itself only validates, averages and packages; all numeric content lives in
//! the component modules.

use serde::Serialize;

use crate::appliance::total_daily_kwh;
use crate::config::{EstimateInput, EstimatorConfig};
use crate::error::{Result, SolveError};
use crate::history::UsageHistory;
use crate::integrate::{CostCurve, CostPoint};
use crate::interpolate::NewtonPolynomial;
use crate::optimize::golden_section_min;
use crate::solve::bisect;

/// Predicted usage for one future day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub day: u32,
    /// Predicted consumption (kWh), floored at zero under the default policy
    pub kwh: f64,
}

/// Recommended proportional cut to future usage.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReductionRecommendation {
    /// Fraction of future usage to cut, within the configured bounds
    pub fraction: f64,
    /// Extra days of credit the cut is projected to buy
    pub projected_days_gained: f64,
}

/// Everything the presentation layer needs from one estimation run.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    /// Mean metered consumption over the history (kWh/day)
    pub average_daily_kwh: f64,
    /// Rating-based daily consumption, when appliances were supplied
    pub appliance_daily_kwh: Option<f64>,
    /// Predicted usage for each horizon day
    pub forecast: Vec<ForecastPoint>,
    /// Cumulative cost at each day of history + forecast
    pub cost_curve: Vec<CostPoint>,
    /// Days of credit left from the first recorded day, `None` when the
    /// balance outlasts the forecast horizon
    pub days_until_exhaustion: Option<f64>,
    /// `None` when the credit already lasts the horizon, or when cutting
    /// usage cannot change the outcome
    pub recommended_reduction: Option<ReductionRecommendation>,
}

/// Pipeline for one estimation run. Pure and deterministic: identical inputs
/// always produce identical reports.
#[derive(Debug, Clone, Default)]
pub struct LifeEstimator {
    config: EstimatorConfig,
}

impl LifeEstimator {
    /// Create an estimator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator with custom configuration.
    pub fn with_config(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Run the full pipeline.
    pub fn estimate(&self, input: &EstimateInput) -> Result<EstimateReport> {
        self.config.validate()?;
        let history = input.validate()?;

        let forecast = self.forecast(&history)?;
        let curve = self.cost_curve(&history, &forecast, 1.0, input.tariff);

        let days_until_exhaustion = self.solve_exhaustion(&curve, input.balance)?;
        let recommended_reduction = self.recommend_reduction(&history, &forecast, input)?;

        let appliance_daily_kwh = if input.appliances.is_empty() {
            None
        } else {
            Some(total_daily_kwh(&input.appliances))
        };

        Ok(EstimateReport {
            average_daily_kwh: history.average_daily_kwh(),
            appliance_daily_kwh,
            forecast,
            cost_curve: curve.points().to_vec(),
            days_until_exhaustion,
            recommended_reduction,
        })
    }

    /// Fit the trailing window and extrapolate over the horizon.
    fn forecast(&self, history: &UsageHistory) -> Result<Vec<ForecastPoint>> {
        let window = history.tail(self.config.interpolation_window);
        let points: Vec<(f64, f64)> = window.iter().map(|s| (s.day as f64, s.kwh)).collect();
        let poly = NewtonPolynomial::fit(&points)?;

        let last_day = history.last_day();
        let mut forecast = Vec::with_capacity(self.config.horizon_days as usize);
        for offset in 1..=self.config.horizon_days {
            let day = last_day + offset;
            let mut kwh = poly.evaluate(day as f64);
            if self.config.clamp_forecast && kwh < 0.0 {
                kwh = 0.0;
            }
            forecast.push(ForecastPoint { day, kwh });
        }
        Ok(forecast)
    }

    /// Cumulative cost over history plus forecast, with forecast usage
    /// scaled by `scale`.
    fn cost_curve(
        &self,
        history: &UsageHistory,
        forecast: &[ForecastPoint],
        scale: f64,
        tariff: f64,
    ) -> CostCurve {
        let mut usage: Vec<(f64, f64)> = history
            .samples()
            .iter()
            .map(|s| (s.day as f64, s.kwh))
            .collect();
        usage.extend(forecast.iter().map(|p| (p.day as f64, p.kwh * scale)));
        CostCurve::from_usage(&usage, tariff)
    }

    /// Root of `cost(x) - balance` over the curve's day range, reported as
    /// elapsed days from the curve start. A bracket that never reaches the
    /// balance means the credit outlasts the horizon.
    fn solve_exhaustion(&self, curve: &CostCurve, balance: f64) -> Result<Option<f64>> {
        let start = curve.start_day();
        let f = |x: f64| curve.cost_at(x) - balance;
        match bisect(f, start, curve.end_day(), &self.config.bisection) {
            Ok(root) => Ok(Some(root - start)),
            Err(SolveError::InvalidBracket { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Smallest cut to future usage that stretches the credit to the end of
    /// the horizon: minimize |cost_r(horizon end) - balance| over the
    /// configured bounds. The objective is |affine in r|, hence unimodal.
    fn recommend_reduction(
        &self,
        history: &UsageHistory,
        forecast: &[ForecastPoint],
        input: &EstimateInput,
    ) -> Result<Option<ReductionRecommendation>> {
        let bounds = self.config.reduction;
        let total_at = |r: f64| {
            self.cost_curve(history, forecast, 1.0 - r, input.tariff)
                .total()
        };

        if input.balance == 0.0 {
            return Ok(None);
        }
        // Credit already lasts the horizon at the mildest allowed cut
        if total_at(bounds.min) <= input.balance {
            return Ok(None);
        }
        // Cutting has no effect (e.g. forecast already all zero)
        if total_at(bounds.min) - total_at(bounds.max) < f64::EPSILON {
            return Ok(None);
        }

        let objective = |r: f64| (total_at(r) - input.balance).abs();
        let fraction = golden_section_min(
            objective,
            bounds.min,
            bounds.max,
            &self.config.golden_section,
        )?;

        let baseline_curve = self.cost_curve(history, forecast, 1.0 - bounds.min, input.tariff);
        let horizon_span = baseline_curve.end_day() - baseline_curve.start_day();
        let baseline_days = self
            .solve_exhaustion(&baseline_curve, input.balance)?
            .unwrap_or(horizon_span);

        // The search localizes the cut no finer than the objective changes
        // over one bracket width; a residual within that resolution means
        // the cut stretches the credit through the whole window.
        let sensitivity =
            (total_at(bounds.min) - total_at(bounds.max)) / (bounds.max - bounds.min);
        let resolution = sensitivity * self.config.golden_section.tolerance;
        let residual = total_at(fraction) - input.balance;
        let projected_days = if residual <= resolution {
            horizon_span
        } else {
            let reduced_curve = self.cost_curve(history, forecast, 1.0 - fraction, input.tariff);
            self.solve_exhaustion(&reduced_curve, input.balance)?
                .unwrap_or(horizon_span)
        };

        Ok(Some(ReductionRecommendation {
            fraction,
            projected_days_gained: projected_days - baseline_days,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReductionBounds;
    use crate::history::UsageSample;

    fn documented_input() -> EstimateInput {
        EstimateInput {
            tariff: 1.6,
            balance: 50.0,
            history: vec![
                UsageSample::new(1, 5.5),
                UsageSample::new(2, 6.1),
                UsageSample::new(3, 5.8),
                UsageSample::new(4, 6.4),
                UsageSample::new(5, 5.9),
            ],
            appliances: vec![],
        }
    }

    #[test]
    fn test_forecast_is_clamped_at_zero() {
        let report = LifeEstimator::new().estimate(&documented_input()).unwrap();
        assert_eq!(report.forecast.len(), 5);
        assert_eq!(report.forecast[0].day, 6);
        assert!((report.forecast[0].kwh - 4.3).abs() < 1e-9);
        assert!((report.forecast[1].kwh - 1.6).abs() < 1e-9);
        // The fitted parabola goes negative from day 8; the floor holds
        for point in &report.forecast[2..] {
            assert_eq!(point.kwh, 0.0);
        }
    }

    #[test]
    fn test_unclamped_forecast_goes_negative() {
        let config = EstimatorConfig {
            clamp_forecast: false,
            ..Default::default()
        };
        let report = LifeEstimator::with_config(config)
            .estimate(&documented_input())
            .unwrap();
        assert!(report.forecast[2].kwh < 0.0);
    }

    #[test]
    fn test_zero_balance_exhausts_immediately() {
        let mut input = documented_input();
        input.balance = 0.0;
        let report = LifeEstimator::new().estimate(&input).unwrap();
        assert_eq!(report.days_until_exhaustion, Some(0.0));
        assert!(report.recommended_reduction.is_none());
    }

    #[test]
    fn test_large_balance_outlasts_horizon() {
        let mut input = documented_input();
        input.balance = 500.0;
        let report = LifeEstimator::new().estimate(&input).unwrap();
        assert_eq!(report.days_until_exhaustion, None);
        assert!(report.recommended_reduction.is_none());
    }

    #[test]
    fn test_reduction_unavailable_when_cut_cannot_help() {
        // Flat zero usage: scaling the forecast changes nothing
        let input = EstimateInput {
            tariff: 1.6,
            balance: 10.0,
            history: vec![UsageSample::new(1, 0.0), UsageSample::new(2, 0.0)],
            appliances: vec![],
        };
        let report = LifeEstimator::new().estimate(&input).unwrap();
        assert_eq!(report.days_until_exhaustion, None);
        assert!(report.recommended_reduction.is_none());
    }

    #[test]
    fn test_boundary_recommendation_when_even_max_cut_falls_short() {
        // Tiny balance: even cutting half the future usage cannot stretch the
        // credit to the horizon, so the best effort is the upper bound.
        let mut input = documented_input();
        input.balance = 40.0;
        let report = LifeEstimator::new().estimate(&input).unwrap();
        let rec = report.recommended_reduction.unwrap();
        assert!(rec.fraction > 0.4999);
    }

    #[test]
    fn test_custom_reduction_bounds_are_respected() {
        let config = EstimatorConfig {
            reduction: ReductionBounds { min: 0.1, max: 0.2 },
            ..Default::default()
        };
        let report = LifeEstimator::with_config(config)
            .estimate(&documented_input())
            .unwrap();
        let rec = report.recommended_reduction.unwrap();
        assert!(rec.fraction >= 0.1 && rec.fraction <= 0.2);
    }

    #[test]
    fn test_appliance_cross_check_is_optional() {
        let report = LifeEstimator::new().estimate(&documented_input()).unwrap();
        assert!(report.appliance_daily_kwh.is_none());
    }

    #[test]
    fn test_determinism() {
        let estimator = LifeEstimator::new();
        let input = documented_input();
        let a = estimator.estimate(&input).unwrap();
        let b = estimator.estimate(&input).unwrap();
        assert_eq!(a.days_until_exhaustion, b.days_until_exhaustion);
        assert_eq!(a.forecast, b.forecast);
        assert_eq!(
            a.recommended_reduction.map(|r| r.fraction),
            b.recommended_reduction.map(|r| r.fraction)
        );
    }

    #[test]
    fn test_invalid_config_rejected_before_input() {
        let config = EstimatorConfig {
            horizon_days: 0,
            ..Default::default()
        };
        let err = LifeEstimator::with_config(config)
            .estimate(&documented_input())
            .unwrap_err();
        assert!(matches!(err, crate::error::CoreError::Config(_)));
    }
}
