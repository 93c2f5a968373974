//! Print the trailing-week summary for a synthetic sales history

use sales_data::utils::generate_seasonal_series;
use sales_data::WeeklySummary;

fn main() {
    let series = generate_seasonal_series(30, 120.0, 0.1);

    println!(
        "Generated {} days of history ending {}",
        series.len(),
        series.last_date()
    );
    println!("{}", WeeklySummary::from_series(&series));
}
