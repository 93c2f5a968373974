//! Error types for the demand_forecast crate

use thiserror::Error;

/// Custom error types for the demand_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Not enough sales history to produce a forecast
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// The pipeline was invoked without a product identifier
    #[error("Product identifier is required")]
    MissingProductId,

    /// A parameter was outside its documented domain
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Inconsistent shapes in forecast inputs or outputs
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
