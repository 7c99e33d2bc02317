//! ASCII chart rendering for usage history and forecast.
//!
//! Renders metered days and forecast days as one horizontal bar chart so the
//! extrapolation curvature is visible at a glance in a terminal.

use crate::estimator::ForecastPoint;
use crate::history::UsageSample;

const BAR_WIDTH: usize = 30;

/// Render history and forecast as an ASCII bar chart.
///
/// Metered days are marked with a filled dot, forecast days with a hollow
/// one; the footer shows the historical average as a reference level.
pub fn render_usage_chart(history: &[UsageSample], forecast: &[ForecastPoint]) -> String {
    let mut rows: Vec<(u32, f64, bool)> = Vec::with_capacity(history.len() + forecast.len());
    rows.extend(history.iter().map(|s| (s.day, s.kwh, false)));
    rows.extend(forecast.iter().map(|p| (p.day, p.kwh, true)));

    let max_kwh = rows
        .iter()
        .map(|&(_, kwh, _)| kwh)
        .fold(0.0_f64, f64::max);

    let mut output = String::from("\nUsage (kWh per day):\n");
    output.push_str(&"─".repeat(50));
    output.push('\n');

    for (day, kwh, is_forecast) in rows {
        let bar_length = if max_kwh > 0.0 {
            ((kwh / max_kwh) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(bar_length);
        let empty = " ".repeat(BAR_WIDTH - bar_length);
        let marker = if is_forecast { "○" } else { "●" };

        output.push_str(&format!("day {:>3} {}{} {} {:.2}\n", day, bar, empty, marker, kwh));
    }

    output.push_str(&"─".repeat(50));
    let average = if history.is_empty() {
        0.0
    } else {
        history.iter().map(|s| s.kwh).sum::<f64>() / history.len() as f64
    };
    output.push_str(&format!(
        "\n● metered  ○ forecast   average {:.2} kWh/day\n",
        average
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> (Vec<UsageSample>, Vec<ForecastPoint>) {
        let history = vec![
            UsageSample::new(1, 5.5),
            UsageSample::new(2, 6.1),
            UsageSample::new(3, 5.8),
        ];
        let forecast = vec![
            ForecastPoint { day: 4, kwh: 4.3 },
            ForecastPoint { day: 5, kwh: 0.0 },
        ];
        (history, forecast)
    }

    #[test]
    fn test_chart_has_one_row_per_day() {
        let (history, forecast) = sample_data();
        let chart = render_usage_chart(&history, &forecast);
        assert_eq!(chart.matches("day ").count(), 5);
        assert!(chart.contains("day   1"));
        assert!(chart.contains("day   5"));
    }

    #[test]
    fn test_markers_distinguish_history_from_forecast() {
        let (history, forecast) = sample_data();
        let chart = render_usage_chart(&history, &forecast);
        assert_eq!(chart.matches('●').count(), 4); // 3 rows + legend
        assert_eq!(chart.matches('○').count(), 3); // 2 rows + legend
    }

    #[test]
    fn test_zero_usage_renders_empty_bar() {
        let (history, forecast) = sample_data();
        let chart = render_usage_chart(&history, &forecast);
        assert!(chart.contains("○ 0.00"));
        assert!(!chart.lines().any(|l| l.contains("0.00") && l.contains('█')));
    }

    #[test]
    fn test_average_in_legend() {
        let (history, forecast) = sample_data();
        let chart = render_usage_chart(&history, &forecast);
        // (5.5 + 6.1 + 5.8) / 3 = 5.80
        assert!(chart.contains("average 5.80 kWh/day"));
    }

    #[test]
    fn test_all_zero_rows_do_not_panic() {
        let history = vec![UsageSample::new(1, 0.0), UsageSample::new(2, 0.0)];
        let chart = render_usage_chart(&history, &[]);
        assert!(chart.contains("day   1"));
    }
}
