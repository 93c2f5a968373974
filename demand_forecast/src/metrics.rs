//! Accuracy metrics for scoring forecasts against held-out actuals

use serde::{Deserialize, Serialize};

/// Forecast accuracy metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Mean Absolute Percentage Error, in percent, over non-zero actuals
    pub mape: f64,
    /// Root Mean Squared Error over all points
    pub rmse: f64,
}

impl std::fmt::Display for AccuracyMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MAPE {:.2}%, RMSE {:.2}", self.mape, self.rmse)
    }
}

/// Calculate accuracy metrics for a forecast vs actual values.
///
/// Mismatched lengths or empty input yield `{mape: 0, rmse: 0}` rather than
/// an error: accuracy scoring is best-effort and a degenerate window must
/// not abort forecast generation. MAPE skips points where the actual is
/// zero; RMSE covers every point.
pub fn forecast_accuracy(actual: &[f64], predicted: &[f64]) -> AccuracyMetrics {
    if actual.len() != predicted.len() || actual.is_empty() {
        return AccuracyMetrics {
            mape: 0.0,
            rmse: 0.0,
        };
    }

    let mut mape_sum = 0.0;
    let mut valid_points = 0usize;
    for (&a, &p) in actual.iter().zip(predicted.iter()) {
        if a != 0.0 {
            mape_sum += ((a - p) / a).abs();
            valid_points += 1;
        }
    }
    let mape = if valid_points > 0 {
        mape_sum / valid_points as f64 * 100.0
    } else {
        0.0
    };

    let mse = actual
        .iter()
        .zip(predicted.iter())
        .map(|(&a, &p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64;

    AccuracyMetrics {
        mape,
        rmse: mse.sqrt(),
    }
}
