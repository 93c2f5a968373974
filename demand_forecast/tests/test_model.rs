use approx::assert_relative_eq;
use demand_forecast::model::{ForecastResult, SeasonalNaiveModel, DEFAULT_SEASONALITY};
use demand_forecast::ForecastError;

/// Four weeks where each weekday sells a constant amount.
fn weekday_constant_series() -> Vec<f64> {
    let week = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0];
    week.iter().cycle().take(28).copied().collect()
}

#[test]
fn forecast_converges_to_the_weekday_constant() {
    // Identical weeks mean zero trend, so each step should reproduce the
    // value of its weekday exactly.
    let model = SeasonalNaiveModel::with_weekly_cycle(weekday_constant_series()).unwrap();
    let forecast = model.forecast(9).unwrap();

    let expected = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 10.0, 20.0];
    for (step, &value) in expected.iter().enumerate() {
        assert_relative_eq!(forecast.mean()[step], value, epsilon = 1e-9);
    }
}

#[test]
fn confidence_band_is_twenty_percent_of_the_point_forecast() {
    let model = SeasonalNaiveModel::with_weekly_cycle(weekday_constant_series()).unwrap();
    let forecast = model.forecast(7).unwrap();

    for step in 0..forecast.len() {
        let mean = forecast.mean()[step];
        assert_relative_eq!(forecast.lower()[step], mean * 0.8, epsilon = 1e-9);
        assert_relative_eq!(forecast.upper()[step], mean * 1.2, epsilon = 1e-9);
    }
}

#[test]
fn trend_shifts_the_seasonal_average() {
    // Values 1..=28: the latest week averages 25, the week before 18, so the
    // damped trend is 3.5. Step 0 averages observations 1, 8, 15, 22.
    let data: Vec<f64> = (1..=28).map(|v| v as f64).collect();
    let model = SeasonalNaiveModel::with_weekly_cycle(data).unwrap();
    let forecast = model.forecast(1).unwrap();

    assert_relative_eq!(forecast.mean()[0], 11.5 + 3.5, epsilon = 1e-9);
    assert_relative_eq!(forecast.lower()[0], 15.0 * 0.8, epsilon = 1e-9);
    assert_relative_eq!(forecast.upper()[0], 15.0 * 1.2, epsilon = 1e-9);
}

#[test]
fn interval_invariants_hold_for_non_negative_forecasts() {
    let series = sales_data::utils::generate_seasonal_series(60, 100.0, 0.2);
    let model = SeasonalNaiveModel::with_weekly_cycle(series.quantities()).unwrap();
    let forecast = model.forecast(16).unwrap();

    for step in 0..forecast.len() {
        let (mean, lower, upper) = (
            forecast.mean()[step],
            forecast.lower()[step],
            forecast.upper()[step],
        );
        assert!(mean >= 0.0);
        assert!(lower >= 0.0);
        assert!(lower <= mean);
        assert!(mean <= upper);
    }
}

#[test]
fn zero_history_forecasts_zero() {
    let model = SeasonalNaiveModel::with_weekly_cycle(vec![0.0; 14]).unwrap();
    let forecast = model.forecast(5).unwrap();

    assert_eq!(forecast.mean(), &[0.0; 5]);
    assert_eq!(forecast.lower(), &[0.0; 5]);
    assert_eq!(forecast.upper(), &[0.0; 5]);
}

#[test]
fn mean_and_lower_are_floored_but_upper_is_not() {
    // A collapsed demand week after a large spike drives the raw forecast
    // negative: the seasonal average is 100 while the damped trend is -150.
    let mut data = vec![0.0; 7];
    data.extend(vec![300.0; 7]);
    data.extend(vec![0.0; 7]);
    let model = SeasonalNaiveModel::with_weekly_cycle(data).unwrap();
    let forecast = model.forecast(3).unwrap();

    for step in 0..forecast.len() {
        assert_eq!(forecast.mean()[step], 0.0);
        assert_eq!(forecast.lower()[step], 0.0);
        assert!(forecast.upper()[step] < 0.0);
    }
}

#[test]
fn forecasting_is_deterministic() {
    let model = SeasonalNaiveModel::with_weekly_cycle(weekday_constant_series()).unwrap();

    let first = model.forecast(9).unwrap();
    let second = model.forecast(9).unwrap();
    assert_eq!(first, second);
}

#[test]
fn zero_steps_yield_an_empty_forecast() {
    let model = SeasonalNaiveModel::with_weekly_cycle(weekday_constant_series()).unwrap();
    let forecast = model.forecast(0).unwrap();

    assert!(forecast.is_empty());
    assert_eq!(forecast.len(), 0);
}

#[test]
fn constructor_validates_inputs() {
    assert!(matches!(
        SeasonalNaiveModel::new(vec![1.0, 2.0], 0),
        Err(ForecastError::InvalidParameter(_))
    ));
    assert!(matches!(
        SeasonalNaiveModel::new(vec![], DEFAULT_SEASONALITY),
        Err(ForecastError::InsufficientData(_))
    ));
    assert!(matches!(
        ForecastResult::new(vec![1.0], vec![0.8], vec![1.2, 1.4]),
        Err(ForecastError::ValidationError(_))
    ));
}
