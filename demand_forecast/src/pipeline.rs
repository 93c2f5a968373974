//! End-to-end forecast generation for a single product
//!
//! Mirrors the call sequence the orchestrating layer performs: validate the
//! request, check the minimum-history contract, hold out the trailing week
//! for accuracy scoring, forecast past the holdout into the future window,
//! then derive the inventory control state and handling schedule. The caller
//! supplies the reference date; nothing in here touches a clock or any
//! storage.

use chrono::{Duration, NaiveDate};
use sales_data::SalesSeries;
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};
use crate::inventory::{
    InventoryControlState, InventoryScheduler, ScheduleStage, DEFAULT_WEIGHT_LOSS_FACTOR,
};
use crate::metrics::{forecast_accuracy, AccuracyMetrics};
use crate::model::{SeasonalNaiveModel, DEFAULT_SEASONALITY};

/// Minimum days of history required before forecasting
pub const MIN_HISTORY_DAYS: usize = 14;

/// Trailing days held out of training for accuracy scoring
pub const HOLDOUT_DAYS: usize = 7;

/// Default number of future days to forecast
pub const DEFAULT_HORIZON_DAYS: usize = 9;

/// A forecast request as submitted by a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Product the forecast is for; requests without one are rejected
    pub product_id: Option<u32>,
    /// Forecast horizon override in days
    pub horizon_days: Option<usize>,
}

impl ForecastRequest {
    /// Request a forecast with the default horizon
    pub fn new(product_id: u32) -> Self {
        Self {
            product_id: Some(product_id),
            horizon_days: None,
        }
    }

    /// Request a forecast with an explicit horizon
    pub fn with_horizon(product_id: u32, horizon_days: usize) -> Self {
        Self {
            product_id: Some(product_id),
            horizon_days: Some(horizon_days),
        }
    }
}

/// Tunable pipeline parameters, passed explicitly on every call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Repeating cycle length for the model
    pub seasonality: usize,
    /// Fraction of mass lost during thaw processing
    pub weight_loss_factor: f64,
    /// Future days to forecast when the request has no override
    pub horizon_days: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seasonality: DEFAULT_SEASONALITY,
            weight_loss_factor: DEFAULT_WEIGHT_LOSS_FACTOR,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

/// Forecasted demand for one future calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// The day being forecasted
    pub date: NaiveDate,
    /// Forecasted demand in kilograms
    pub demand_kg: f64,
    /// Lower confidence bound
    pub lower_kg: f64,
    /// Upper confidence bound
    pub upper_kg: f64,
}

/// Everything one pipeline run produces for downstream consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastOutcome {
    /// Product the forecast is for
    pub product_id: u32,
    /// One point per forecasted future day
    pub points: Vec<ForecastPoint>,
    /// Model accuracy over the held-out week
    pub metrics: AccuracyMetrics,
    /// Inventory quantities for the reference date
    pub control: InventoryControlState,
    /// Six-stage handling timeline
    pub schedule: Vec<ScheduleStage>,
}

/// Run the full forecast-and-derive pipeline for one product.
///
/// Trains on everything except the trailing [`HOLDOUT_DAYS`] observations,
/// scores the model against that holdout, and forecasts far enough past it
/// to cover the requested horizon. Future points are dated from the day
/// after `reference_date`.
pub fn generate_forecast(
    request: &ForecastRequest,
    series: &SalesSeries,
    reference_date: NaiveDate,
    config: &PipelineConfig,
) -> Result<ForecastOutcome> {
    let product_id = request.product_id.ok_or(ForecastError::MissingProductId)?;

    let quantities = series.quantities();
    if quantities.len() < MIN_HISTORY_DAYS {
        return Err(ForecastError::InsufficientData(format!(
            "Need at least {} days of sales history, got {}",
            MIN_HISTORY_DAYS,
            quantities.len()
        )));
    }

    let horizon_days = request.horizon_days.unwrap_or(config.horizon_days);
    if horizon_days == 0 {
        return Err(ForecastError::InvalidParameter(
            "Forecast horizon must be at least one day".to_string(),
        ));
    }

    let (train, holdout) = quantities.split_at(quantities.len() - HOLDOUT_DAYS);
    let model = SeasonalNaiveModel::new(train.to_vec(), config.seasonality)?;
    let forecast = model.forecast(HOLDOUT_DAYS + horizon_days)?;

    let metrics = forecast_accuracy(holdout, &forecast.mean()[..HOLDOUT_DAYS]);

    let mut points = Vec::with_capacity(horizon_days);
    for i in 0..horizon_days {
        let step = HOLDOUT_DAYS + i;
        points.push(ForecastPoint {
            date: reference_date + Duration::days(i as i64 + 1),
            demand_kg: forecast.mean()[step],
            lower_kg: forecast.lower()[step],
            upper_kg: forecast.upper()[step],
        });
    }

    let scheduler = InventoryScheduler::new(config.weight_loss_factor)?;
    let future_mean = &forecast.mean()[HOLDOUT_DAYS..];
    let control = scheduler.control_state(future_mean, series.last_quantity());
    let schedule = scheduler.build_schedule(&control, future_mean);

    Ok(ForecastOutcome {
        product_id,
        points,
        metrics,
        control,
        schedule,
    })
}
