//! Cumulative cost integration over a usage-rate curve.
//!
//! The trapezoidal rule turns a per-day usage sequence into cumulative
//! monetary cost: exact when usage varies linearly between days, O(h^2)
//! otherwise. The resulting curve is exposed as a continuous function of a
//! real-valued day for the root-finder.

use serde::Serialize;

/// One point of the cumulative-cost curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostPoint {
    pub day: f64,
    /// Cumulative cost from the curve start up to this day
    pub cost: f64,
}

/// Cumulative cost over a day range, monotone non-decreasing.
#[derive(Debug, Clone)]
pub struct CostCurve {
    points: Vec<CostPoint>,
}

impl CostCurve {
    /// Integrate a usage-rate curve at the given tariff.
    ///
    /// `usage` is an ordered `(day, kwh)` sequence; cost is anchored at zero
    /// on the first day and each segment contributes
    /// `tariff * (u_i + u_{i+1}) / 2 * (d_{i+1} - d_i)`.
    pub fn from_usage(usage: &[(f64, f64)], tariff: f64) -> Self {
        let mut points = Vec::with_capacity(usage.len());
        let mut cumulative = 0.0;
        for (i, &(day, kwh)) in usage.iter().enumerate() {
            if i > 0 {
                let (prev_day, prev_kwh) = usage[i - 1];
                cumulative += tariff * (prev_kwh + kwh) / 2.0 * (day - prev_day);
            }
            points.push(CostPoint {
                day,
                cost: cumulative,
            });
        }
        Self { points }
    }

    /// Cumulative cost at a real-valued day, linearly interpolated between
    /// the two bracketing curve points and clamped to the curve's ends.
    pub fn cost_at(&self, day: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if day <= first.day {
            return first.cost;
        }
        if day >= last.day {
            return last.cost;
        }
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.day <= day && day <= b.day {
                return a.cost + (b.cost - a.cost) * (day - a.day) / (b.day - a.day);
            }
        }
        last.cost
    }

    pub fn points(&self) -> &[CostPoint] {
        &self.points
    }

    /// Cumulative cost over the whole curve.
    pub fn total(&self) -> f64 {
        self.points[self.points.len() - 1].cost
    }

    pub fn start_day(&self) -> f64 {
        self.points[0].day
    }

    pub fn end_day(&self) -> f64 {
        self.points[self.points.len() - 1].day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_rate_is_exact() {
        // 5 kWh/day at 2.0 per kWh over 4 days = 40.0
        let usage = [(0.0, 5.0), (1.0, 5.0), (2.0, 5.0), (3.0, 5.0), (4.0, 5.0)];
        let curve = CostCurve::from_usage(&usage, 2.0);
        assert!((curve.total() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_rate_is_exact() {
        // usage = x over [0, 4]: integral is 8, cost at tariff 1.5 is 12
        let usage = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)];
        let curve = CostCurve::from_usage(&usage, 1.5);
        assert!((curve.total() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_curve_is_monotone() {
        let usage = [(1.0, 5.5), (2.0, 6.1), (3.0, 5.8), (4.0, 0.0), (5.0, 0.0)];
        let curve = CostCurve::from_usage(&usage, 1.6);
        for pair in curve.points().windows(2) {
            assert!(pair[1].cost >= pair[0].cost);
        }
    }

    #[test]
    fn test_cost_at_interpolates_linearly() {
        let usage = [(0.0, 2.0), (1.0, 2.0), (2.0, 2.0)];
        let curve = CostCurve::from_usage(&usage, 1.0);
        // 2.0 cost per day, so halfway through day 0..1 costs 1.0
        assert!((curve.cost_at(0.5) - 1.0).abs() < 1e-12);
        assert!((curve.cost_at(1.75) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_cost_at_clamps_to_ends() {
        let usage = [(1.0, 2.0), (2.0, 2.0)];
        let curve = CostCurve::from_usage(&usage, 1.0);
        assert_eq!(curve.cost_at(0.0), 0.0);
        assert_eq!(curve.cost_at(99.0), curve.total());
    }

    #[test]
    fn test_documented_example_totals() {
        // History days 1-5 plus clamped forecast for days 6-10
        let usage = [
            (1.0, 5.5),
            (2.0, 6.1),
            (3.0, 5.8),
            (4.0, 6.4),
            (5.0, 5.9),
            (6.0, 4.3),
            (7.0, 1.6),
            (8.0, 0.0),
            (9.0, 0.0),
            (10.0, 0.0),
        ];
        let curve = CostCurve::from_usage(&usage, 1.6);
        assert!((curve.cost_at(5.0) - 38.4).abs() < 1e-9);
        assert!((curve.total() - 52.56).abs() < 1e-9);
    }
}
