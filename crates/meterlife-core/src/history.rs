//! Usage history types and validation.
//!
//! A usage history is a short ordered run of metered daily consumption
//! samples. All estimation starts from a validated history; malformed input
//! is rejected here before any numeric work happens.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One metered day of consumption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageSample {
    /// Day index (strictly increasing across a history)
    pub day: u32,
    /// Energy consumed on that day (kWh)
    pub kwh: f64,
}

impl UsageSample {
    pub fn new(day: u32, kwh: f64) -> Self {
        Self { day, kwh }
    }
}

/// Validated usage history.
///
/// Invariants: at least [`UsageHistory::MIN_SAMPLES`] samples, day indices
/// strictly increasing (duplicates would make divided differences undefined),
/// usage values finite and non-negative.
#[derive(Debug, Clone, Serialize)]
pub struct UsageHistory {
    samples: Vec<UsageSample>,
}

impl UsageHistory {
    /// Minimum number of samples needed to fit a forecast polynomial.
    pub const MIN_SAMPLES: usize = 2;

    /// Validate and wrap a sample sequence.
    pub fn new(samples: Vec<UsageSample>) -> Result<Self, ValidationError> {
        if samples.len() < Self::MIN_SAMPLES {
            return Err(ValidationError::HistoryTooShort {
                len: samples.len(),
                min: Self::MIN_SAMPLES,
            });
        }
        for pair in samples.windows(2) {
            if pair[1].day == pair[0].day {
                return Err(ValidationError::DuplicateDay { day: pair[0].day });
            }
            if pair[1].day < pair[0].day {
                return Err(ValidationError::DaysNotIncreasing {
                    prev: pair[0].day,
                    next: pair[1].day,
                });
            }
        }
        for sample in &samples {
            if !sample.kwh.is_finite() {
                return Err(ValidationError::NonFiniteValue {
                    field: format!("history day {}", sample.day),
                    value: sample.kwh,
                });
            }
            if sample.kwh < 0.0 {
                return Err(ValidationError::NegativeUsage {
                    day: sample.day,
                    kwh: sample.kwh,
                });
            }
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[UsageSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First recorded day index.
    pub fn first_day(&self) -> u32 {
        self.samples[0].day
    }

    /// Last recorded day index.
    pub fn last_day(&self) -> u32 {
        self.samples[self.samples.len() - 1].day
    }

    /// Mean metered consumption over the history (kWh per day).
    pub fn average_daily_kwh(&self) -> f64 {
        let total: f64 = self.samples.iter().map(|s| s.kwh).sum();
        total / self.samples.len() as f64
    }

    /// The trailing `window` samples, or the whole history when shorter.
    pub fn tail(&self, window: usize) -> &[UsageSample] {
        let start = self.samples.len().saturating_sub(window);
        &self.samples[start..]
    }
}
