//! Seasonal-naive demand model with a damped weekly trend

use crate::error::{ForecastError, Result};

/// Default repeating cycle length (day-of-week pattern)
pub const DEFAULT_SEASONALITY: usize = 7;

/// Trailing cycles inspected when averaging the seasonal pattern
const SEASONAL_LOOKBACK_CYCLES: usize = 4;

/// Half-width of the confidence band as a fraction of the point forecast
const CONFIDENCE_RATIO: f64 = 0.2;

/// Damping applied to the week-over-week level change
const TREND_DAMPING: f64 = 0.5;

/// Observations needed before a trend is estimated
const TREND_MIN_OBSERVATIONS: usize = 14;

/// Forecast result containing point forecasts and confidence bounds
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    /// Point forecasts, floored at zero
    mean: Vec<f64>,
    /// Lower confidence bounds, floored at zero
    lower: Vec<f64>,
    /// Upper confidence bounds, not floored
    upper: Vec<f64>,
}

impl ForecastResult {
    /// Create a new forecast result from same-length bound sequences
    pub fn new(mean: Vec<f64>, lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if mean.len() != lower.len() || mean.len() != upper.len() {
            return Err(ForecastError::ValidationError(format!(
                "Bound lengths ({}, {}) don't match mean length ({})",
                lower.len(),
                upper.len(),
                mean.len()
            )));
        }

        Ok(Self { mean, lower, upper })
    }

    /// Point forecasts, index 0 = the day after the last observation
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Lower confidence bounds
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper confidence bounds
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Number of forecasted steps
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Whether the forecast covers zero steps
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

/// Seasonal-naive forecaster over a fixed training series.
///
/// Each future step is predicted as the average of trailing observations
/// falling on the same position within the cycle, shifted by a damped
/// week-over-week trend. The 20% confidence band is proportional to the
/// point forecast. Forecasting is a pure function of the stored series:
/// repeated calls return identical results.
#[derive(Debug, Clone)]
pub struct SeasonalNaiveModel {
    /// Training observations, oldest first
    data: Vec<f64>,
    /// Repeating cycle length
    seasonality: usize,
}

impl SeasonalNaiveModel {
    /// Create a model over the given observations and cycle length
    pub fn new(data: Vec<f64>, seasonality: usize) -> Result<Self> {
        if seasonality == 0 {
            return Err(ForecastError::InvalidParameter(
                "Seasonality must be positive".to_string(),
            ));
        }
        if data.is_empty() {
            return Err(ForecastError::InsufficientData(
                "Training series must contain at least one observation".to_string(),
            ));
        }

        Ok(Self { data, seasonality })
    }

    /// Create a model with the default weekly cycle
    pub fn with_weekly_cycle(data: Vec<f64>) -> Result<Self> {
        Self::new(data, DEFAULT_SEASONALITY)
    }

    /// The configured cycle length
    pub fn seasonality(&self) -> usize {
        self.seasonality
    }

    /// Number of training observations
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the model holds no observations. Always false for a
    /// constructed model.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Forecast the next `steps` days
    pub fn forecast(&self, steps: usize) -> Result<ForecastResult> {
        let mut mean = Vec::with_capacity(steps);
        let mut lower = Vec::with_capacity(steps);
        let mut upper = Vec::with_capacity(steps);

        let trend = self.trend();
        for step in 0..steps {
            let raw = self.seasonal_pattern(step) + trend;
            let confidence = raw * CONFIDENCE_RATIO;

            mean.push(raw.max(0.0));
            lower.push((raw - confidence).max(0.0));
            upper.push(raw + confidence);
        }

        ForecastResult::new(mean, lower, upper)
    }

    /// Average of trailing-window observations sharing this step's position
    /// in the cycle.
    fn seasonal_pattern(&self, step: usize) -> f64 {
        let window_start = self
            .data
            .len()
            .saturating_sub(self.seasonality * SEASONAL_LOOKBACK_CYCLES);
        let window = &self.data[window_start..];
        let seasonal_index = step % self.seasonality;

        let mut sum = 0.0;
        let mut count = 0usize;
        let mut i = seasonal_index;
        while i < window.len() {
            sum += window[i];
            count += 1;
            i += self.seasonality;
        }

        if count > 0 {
            sum / count as f64
        } else {
            // Fallback: trailing week average. The divisor stays 7 even when
            // fewer than 7 observations exist.
            let tail_start = self.data.len().saturating_sub(7);
            self.data[tail_start..].iter().sum::<f64>() / 7.0
        }
    }

    /// Damped difference between the last week's average and the week
    /// before it. Zero until two full weeks of history exist.
    fn trend(&self) -> f64 {
        if self.data.len() < TREND_MIN_OBSERVATIONS {
            return 0.0;
        }

        let n = self.data.len();
        let previous_week = self.data[n - 14..n - 7].iter().sum::<f64>() / 7.0;
        let current_week = self.data[n - 7..].iter().sum::<f64>() / 7.0;

        (current_week - previous_week) * TREND_DAMPING
    }
}
