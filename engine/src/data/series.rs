// Shapes raw market-chart payloads into chronological series and extracts
// the per-series price extremes the Tracker view displays.
use chrono::DateTime;
use shared::models::{PricePoint, PriceSeries, SeriesExtremes};

use crate::data::coingecko::MarketChart;
use crate::error::EngineError;

/// Converts `[timestamp_ms, price]` pairs into a series ordered by
/// timestamp ascending. A timestamp outside chrono's representable range
/// is a format error.
pub fn build_series(coin_id: &str, chart: &MarketChart) -> Result<PriceSeries, EngineError> {
    let mut points = Vec::with_capacity(chart.prices.len());
    for &(timestamp_ms, price) in &chart.prices {
        let timestamp = DateTime::from_timestamp_millis(timestamp_ms).ok_or_else(|| {
            EngineError::SeriesFormat(format!("invalid timestamp: {}", timestamp_ms))
        })?;
        points.push(PricePoint { timestamp, price });
    }
    points.sort_by_key(|p| p.timestamp);

    Ok(PriceSeries {
        coin_id: coin_id.to_string(),
        points,
    })
}

/// Maximum and minimum price with the calendar date each first occurred.
/// Strict comparisons keep the earliest point on ties. `None` for an empty
/// series.
pub fn extremes(series: &PriceSeries) -> Option<SeriesExtremes> {
    let first = series.points.first()?;
    let mut max = first;
    let mut min = first;
    for point in &series.points[1..] {
        if point.price > max.price {
            max = point;
        }
        if point.price < min.price {
            min = point;
        }
    }

    Some(SeriesExtremes {
        max_price: max.price,
        max_date: max.date(),
        min_price: min.price,
        min_date: min.date(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 86_400_000;
    // 2024-01-01T00:00:00Z
    const T0: i64 = 1_704_067_200_000;

    fn chart(pairs: &[(i64, f64)]) -> MarketChart {
        MarketChart {
            prices: pairs.to_vec(),
        }
    }

    #[test]
    fn test_build_series_orders_by_timestamp() {
        let chart = chart(&[(T0 + 2 * DAY_MS, 3.0), (T0, 1.0), (T0 + DAY_MS, 2.0)]);
        let series = build_series("test-coin", &chart).unwrap();
        let prices: Vec<f64> = series.points.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
        assert!(series
            .points
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_build_series_dates_stay_chronological() {
        let chart = chart(&[(T0, 1.0), (T0 + DAY_MS, 2.0), (T0 + 3 * DAY_MS, 3.0)]);
        let series = build_series("test-coin", &chart).unwrap();
        let dates: Vec<_> = series.points.iter().map(|p| p.date()).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(dates[0].to_string(), "2024-01-01");
        assert_eq!(dates[2].to_string(), "2024-01-04");
    }

    #[test]
    fn test_build_series_invalid_timestamp() {
        let chart = chart(&[(i64::MAX, 1.0)]);
        let result = build_series("test-coin", &chart);
        assert!(matches!(result, Err(EngineError::SeriesFormat(_))));
    }

    #[test]
    fn test_extremes_known_values() {
        // [(t1, 10.0), (t2, 50.0), (t3, 30.0)] with t1 < t2 < t3
        let chart = chart(&[
            (T0, 10.0),
            (T0 + DAY_MS, 50.0),
            (T0 + 2 * DAY_MS, 30.0),
        ]);
        let series = build_series("test-coin", &chart).unwrap();
        let extremes = extremes(&series).unwrap();
        assert_eq!(extremes.max_price, 50.0);
        assert_eq!(extremes.max_date.to_string(), "2024-01-02");
        assert_eq!(extremes.min_price, 10.0);
        assert_eq!(extremes.min_date.to_string(), "2024-01-01");
    }

    #[test]
    fn test_extremes_tie_keeps_first_occurrence() {
        let chart = chart(&[
            (T0, 5.0),
            (T0 + DAY_MS, 9.0),
            (T0 + 2 * DAY_MS, 9.0),
            (T0 + 3 * DAY_MS, 5.0),
        ]);
        let series = build_series("test-coin", &chart).unwrap();
        let extremes = extremes(&series).unwrap();
        assert_eq!(extremes.max_date.to_string(), "2024-01-02");
        assert_eq!(extremes.min_date.to_string(), "2024-01-01");
    }

    #[test]
    fn test_extremes_single_point() {
        let chart = chart(&[(T0, 42.0)]);
        let series = build_series("test-coin", &chart).unwrap();
        let extremes = extremes(&series).unwrap();
        assert_eq!(extremes.max_price, 42.0);
        assert_eq!(extremes.min_price, 42.0);
        assert_eq!(extremes.max_date, extremes.min_date);
    }

    #[test]
    fn test_extremes_empty_series() {
        let series = build_series("test-coin", &chart(&[])).unwrap();
        assert!(extremes(&series).is_none());
    }
}
