//! # Demand Planner
//!
//! Workspace facade re-exporting the demand-planning crates: validated
//! daily sales history in [`sales_data`] and the forecasting plus
//! inventory-scheduling core in [`demand_forecast`].
//!
//! ## Example
//!
//! ```
//! use demand_planner_workspace::demand_forecast::PipelineConfig;
//!
//! let config = PipelineConfig::default();
//! assert_eq!(config.horizon_days, 9);
//! ```

pub use demand_forecast;
pub use sales_data;
