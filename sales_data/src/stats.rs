//! Trailing-week sales statistics for dashboard consumers

use serde::{Deserialize, Serialize};

use crate::SalesSeries;

/// Days covered by the trailing summary window
const SUMMARY_WINDOW_DAYS: usize = 7;

/// Daily sales target expressed as a multiple of the observed average
pub const DEFAULT_TARGET_FACTOR: f64 = 1.1;

/// Summary of the most recent week of sales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Total quantity sold over the window, in kilograms
    pub total_kg: f64,
    /// Average daily quantity over the window
    pub daily_average_kg: f64,
    /// Observed average as a percentage of the daily target, capped at 100
    pub efficiency_pct: f64,
}

impl WeeklySummary {
    /// Summarize the trailing week using [`DEFAULT_TARGET_FACTOR`].
    pub fn from_series(series: &SalesSeries) -> Self {
        Self::with_target_factor(series, DEFAULT_TARGET_FACTOR)
    }

    /// Summarize the trailing week against a daily target of
    /// `average * target_factor`.
    ///
    /// Uses however many records exist when the series is shorter than a
    /// week. A non-positive target yields zero efficiency.
    pub fn with_target_factor(series: &SalesSeries, target_factor: f64) -> Self {
        let records = series.records();
        let start = records.len().saturating_sub(SUMMARY_WINDOW_DAYS);
        let window = &records[start..];

        let total_kg: f64 = window.iter().map(|r| r.quantity_kg).sum();
        let daily_average_kg = if window.is_empty() {
            0.0
        } else {
            total_kg / window.len() as f64
        };

        let daily_target = daily_average_kg * target_factor;
        let efficiency_pct = if daily_target > 0.0 {
            (daily_average_kg / daily_target * 100.0).min(100.0)
        } else {
            0.0
        };

        Self {
            total_kg,
            daily_average_kg,
            efficiency_pct,
        }
    }
}

impl std::fmt::Display for WeeklySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Weekly Sales Summary:")?;
        writeln!(f, "  Total:      {:.1} kg", self.total_kg)?;
        writeln!(f, "  Daily avg:  {:.1} kg", self.daily_average_kg)?;
        writeln!(f, "  Efficiency: {:.1}%", self.efficiency_pct)?;
        Ok(())
    }
}
