//! # Sales Data
//!
//! `sales_data` provides the daily per-product sales history types used by
//! the demand-planning crates. Rows arrive from an ingestion layer (CSV
//! upload, database queries) as loosely-typed records; this crate turns them
//! into validated, strictly-chronological series once, at the boundary, so
//! everything downstream can assume clean input.
//!
//! ## Usage Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sales_data::{SalesRecord, SalesSeries, WeeklySummary};
//!
//! # fn main() -> Result<(), sales_data::SalesError> {
//! let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let records = (0..14)
//!     .map(|i| SalesRecord::new(start + chrono::Duration::days(i as i64), 100.0 + i as f64))
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! let series = SalesSeries::from_records(records)?;
//! let summary = WeeklySummary::from_series(&series);
//! assert!(summary.total_kg > 0.0);
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod stats;
pub mod utils;

pub use stats::WeeklySummary;

/// Errors that can occur when building sales history
#[derive(Error, Debug)]
pub enum SalesError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Records out of order: {0}")]
    OutOfOrder(String),

    #[error("Duplicate date: {0}")]
    DuplicateDate(String),

    #[error("Sales series must contain at least one record")]
    EmptySeries,
}

/// Result type for sales data operations
pub type Result<T> = std::result::Result<T, SalesError>;

/// One day of sales for a single product
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Calendar day the total covers
    pub date: NaiveDate,
    /// Total quantity sold that day, in kilograms
    pub quantity_kg: f64,
    /// Whether a promotion ran that day
    #[serde(default)]
    pub promotion: bool,
    /// Whether the day was a public holiday
    #[serde(default)]
    pub holiday: bool,
}

impl SalesRecord {
    /// Create a record with no promotion or holiday flags set.
    pub fn new(date: NaiveDate, quantity_kg: f64) -> Result<Self> {
        if !quantity_kg.is_finite() || quantity_kg < 0.0 {
            return Err(SalesError::InvalidRecord(format!(
                "quantity for {} must be a non-negative number, got {}",
                date, quantity_kg
            )));
        }

        Ok(Self {
            date,
            quantity_kg,
            promotion: false,
            holiday: false,
        })
    }

    /// Create a record carrying the promotion and holiday flags.
    pub fn with_flags(
        date: NaiveDate,
        quantity_kg: f64,
        promotion: bool,
        holiday: bool,
    ) -> Result<Self> {
        let mut record = Self::new(date, quantity_kg)?;
        record.promotion = promotion;
        record.holiday = holiday;
        Ok(record)
    }
}

/// Chronological, de-duplicated daily sales history for one product.
///
/// Construction validates the ordering contract once; the series is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSeries {
    records: Vec<SalesRecord>,
}

impl SalesSeries {
    /// Build a series from records already sorted by date.
    ///
    /// Rejects empty input, out-of-order dates and duplicate dates. Gaps
    /// between dates are accepted; filling them is the caller's concern.
    pub fn from_records(records: Vec<SalesRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(SalesError::EmptySeries);
        }

        for pair in records.windows(2) {
            if pair[1].date == pair[0].date {
                return Err(SalesError::DuplicateDate(pair[1].date.to_string()));
            }
            if pair[1].date < pair[0].date {
                return Err(SalesError::OutOfOrder(format!(
                    "{} follows {}",
                    pair[1].date, pair[0].date
                )));
            }
        }

        Ok(Self { records })
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Number of observed days.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series holds no records. Always false for a constructed
    /// series; present for slice-like completeness.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The daily quantities in chronological order.
    pub fn quantities(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.quantity_kg).collect()
    }

    /// Date of the most recent observation.
    pub fn last_date(&self) -> NaiveDate {
        // Non-empty by construction.
        self.records[self.records.len() - 1].date
    }

    /// Quantity of the most recent observation.
    pub fn last_quantity(&self) -> f64 {
        self.records[self.records.len() - 1].quantity_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
    }

    #[test]
    fn record_rejects_negative_quantity() {
        let result = SalesRecord::new(day(0), -1.0);
        assert!(matches!(result, Err(SalesError::InvalidRecord(_))));
    }

    #[test]
    fn record_rejects_non_finite_quantity() {
        assert!(SalesRecord::new(day(0), f64::NAN).is_err());
        assert!(SalesRecord::new(day(0), f64::INFINITY).is_err());
    }

    #[test]
    fn record_flags_default_to_false() {
        let record = SalesRecord::new(day(0), 12.5).unwrap();
        assert!(!record.promotion);
        assert!(!record.holiday);

        let flagged = SalesRecord::with_flags(day(1), 8.0, true, true).unwrap();
        assert!(flagged.promotion);
        assert!(flagged.holiday);
    }

    #[test]
    fn series_rejects_empty_input() {
        assert!(matches!(
            SalesSeries::from_records(vec![]),
            Err(SalesError::EmptySeries)
        ));
    }

    #[test]
    fn series_rejects_duplicate_dates() {
        let records = vec![
            SalesRecord::new(day(0), 10.0).unwrap(),
            SalesRecord::new(day(0), 11.0).unwrap(),
        ];
        assert!(matches!(
            SalesSeries::from_records(records),
            Err(SalesError::DuplicateDate(_))
        ));
    }

    #[test]
    fn series_rejects_out_of_order_dates() {
        let records = vec![
            SalesRecord::new(day(3), 10.0).unwrap(),
            SalesRecord::new(day(1), 11.0).unwrap(),
        ];
        assert!(matches!(
            SalesSeries::from_records(records),
            Err(SalesError::OutOfOrder(_))
        ));
    }

    #[test]
    fn series_accessors() {
        let records = vec![
            SalesRecord::new(day(0), 10.0).unwrap(),
            SalesRecord::new(day(1), 20.0).unwrap(),
            SalesRecord::new(day(4), 30.0).unwrap(),
        ];
        let series = SalesSeries::from_records(records).unwrap();

        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.quantities(), vec![10.0, 20.0, 30.0]);
        assert_eq!(series.last_date(), day(4));
        assert_eq!(series.last_quantity(), 30.0);
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = SalesRecord::with_flags(day(0), 42.5, true, false).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: SalesRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
