//! # Demand Forecast
//!
//! A Rust library for short-horizon demand forecasting and thaw-cycle
//! inventory scheduling over daily per-product sales history.
//!
//! ## Features
//!
//! - Seasonal-naive point forecasts with a damped weekly trend and a 20%
//!   confidence band
//! - Forecast accuracy scoring (MAPE / RMSE) against a held-out window
//! - Withdrawal, thaw and availability quantities grossed up for processing
//!   weight loss
//! - A six-stage handling schedule for timeline display
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use demand_forecast::pipeline::{generate_forecast, ForecastRequest, PipelineConfig};
//! use sales_data::{SalesRecord, SalesSeries};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Four weeks of history with a mild weekly pattern
//! let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let records = (0..28)
//!     .map(|i| {
//!         SalesRecord::new(
//!             start + chrono::Duration::days(i as i64),
//!             120.0 + (i % 7) as f64 * 10.0,
//!         )
//!     })
//!     .collect::<Result<Vec<_>, _>>()?;
//! let series = SalesSeries::from_records(records)?;
//!
//! let request = ForecastRequest::new(42);
//! let today = series.last_date();
//! let outcome = generate_forecast(&request, &series, today, &PipelineConfig::default())?;
//!
//! assert_eq!(outcome.points.len(), 9);
//! assert_eq!(outcome.schedule.len(), 6);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod inventory;
pub mod metrics;
pub mod model;
pub mod pipeline;

// Re-export commonly used types
pub use crate::error::{ForecastError, Result};
pub use crate::inventory::{
    InventoryControlState, InventoryScheduler, ProcessStage, ScheduleStage, StageStatus,
};
pub use crate::metrics::{forecast_accuracy, AccuracyMetrics};
pub use crate::model::{ForecastResult, SeasonalNaiveModel};
pub use crate::pipeline::{
    generate_forecast, ForecastOutcome, ForecastPoint, ForecastRequest, PipelineConfig,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
