//! # Meterlife Core Library
//!
//! This library estimates how long a prepaid electricity balance will last
//! from recent daily consumption history, a unit tariff, and optional
//! appliance power ratings. It implements a CLI-first philosophy: the
//! standalone CLI binary is a thin presentation layer over this library,
//! which does all the numeric work and no I/O beyond reading a TOML run
//! file.
//!
//! ## Architecture
//!
//! Four numeric components, chained by the pipeline, data flowing strictly
//! forward:
//!
//! - **Interpolator**: Newton divided-difference polynomial fitted to a
//!   trailing window of history, extrapolated over the forecast horizon
//! - **CostIntegrator**: trapezoidal cumulative cost over history plus
//!   forecast, exposed as a continuous function of a real-valued day
//! - **ExhaustionSolver**: bisection on `cost(day) - balance`
//! - **ReductionOptimizer**: golden-section search for the smallest usage
//!   cut that stretches the credit to the end of the horizon
//!
//! Every component is a pure function of its inputs: no shared state, no
//! randomness, no wall-clock dependence. Identical inputs produce identical
//! reports.
//!
//! ## Key Components
//!
//! - [`LifeEstimator`]: the estimation pipeline
//! - [`EstimateInput`] / [`EstimatorConfig`]: explicit per-run inputs and
//!   numeric policy
//! - [`EstimateReport`]: everything the presentation layer needs
//! - [`CoreError`]: the error hierarchy; all invalid input is rejected
//!   before numeric work starts

pub mod appliance;
pub mod chart;
pub mod config;
pub mod error;
pub mod estimator;
pub mod history;
pub mod integrate;
pub mod interpolate;
pub mod optimize;
pub mod solve;

pub use appliance::{cost_breakdown, total_daily_kwh, Appliance, ApplianceCost};
pub use chart::render_usage_chart;
pub use config::{EstimateInput, EstimatorConfig, ReductionBounds, RunConfig, SolverTolerance};
pub use error::{ConfigError, CoreError, InterpolationError, SolveError, ValidationError};
pub use estimator::{EstimateReport, ForecastPoint, LifeEstimator, ReductionRecommendation};
pub use history::{UsageHistory, UsageSample};
pub use integrate::{CostCurve, CostPoint};
pub use interpolate::NewtonPolynomial;
