//! Run the full forecast pipeline on a synthetic sales history

use demand_forecast::pipeline::{generate_forecast, ForecastRequest, PipelineConfig};
use sales_data::utils::generate_seasonal_series;
use sales_data::WeeklySummary;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Two months of weekday-patterned history for one product
    let series = generate_seasonal_series(60, 120.0, 0.1);
    println!(
        "History: {} days ending {}",
        series.len(),
        series.last_date()
    );
    println!("{}", WeeklySummary::from_series(&series));

    let request = ForecastRequest::new(1);
    let outcome = generate_forecast(
        &request,
        &series,
        series.last_date(),
        &PipelineConfig::default(),
    )?;

    println!("Model accuracy: {}", outcome.metrics);
    println!();
    println!("Forecast:");
    for point in &outcome.points {
        println!(
            "  {}  {:>7.1} kg  [{:.1}, {:.1}]",
            point.date, point.demand_kg, point.lower_kg, point.upper_kg
        );
    }

    println!();
    println!("Inventory control:");
    println!("  Withdraw today:  {:>7.1} kg", outcome.control.withdraw_today_kg);
    println!("  In thaw:         {:>7.1} kg", outcome.control.in_thaw_kg);
    println!("  Available today: {:>7.1} kg", outcome.control.available_today_kg);

    println!();
    println!("Handling schedule:");
    for stage in &outcome.schedule {
        println!(
            "  Day {}: {:<10} {:>7.1} kg  ({:?})",
            stage.day,
            format!("{:?}", stage.stage),
            stage.amount_kg,
            stage.status
        );
    }

    Ok(())
}
