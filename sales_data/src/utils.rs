//! Synthetic sales history for tests and examples

use chrono::NaiveDate;
use rand::Rng;

use crate::{SalesRecord, SalesSeries};

/// Relative weekday demand profile, Monday first. Weekend days sell more.
const WEEKDAY_PROFILE: [f64; 7] = [0.8, 0.9, 0.95, 1.0, 1.15, 1.4, 1.3];

/// Generate a daily sales series with a weekly demand profile
///
/// # Arguments
/// * `days` - Number of data points to generate
/// * `base_kg` - Baseline daily demand in kilograms
/// * `noise` - Relative noise amplitude (0.0-1.0)
///
/// # Returns
/// * A validated series starting on a Monday
pub fn generate_seasonal_series(days: usize, base_kg: f64, noise: f64) -> SalesSeries {
    use rand::thread_rng;

    let mut rng = thread_rng();
    // 2023-01-02 is a Monday, lining dates up with the weekday profile.
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();

    let mut records = Vec::with_capacity(days);
    for i in 0..days {
        let date = start + chrono::Duration::days(i as i64);
        let jitter = base_kg * noise * (rng.gen::<f64>() - 0.5);
        let quantity_kg = (base_kg * WEEKDAY_PROFILE[i % 7] + jitter).max(0.0);

        records.push(SalesRecord {
            date,
            quantity_kg,
            promotion: false,
            holiday: false,
        });
    }

    SalesSeries::from_records(records).expect("generated dates are strictly increasing")
}
