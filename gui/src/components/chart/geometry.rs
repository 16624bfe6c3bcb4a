// Data-space to pixel-space mapping for the SVG line chart. Kept free of
// UI types so the projection is testable on its own.
use chrono::{DateTime, Utc};
use shared::models::PriceSeries;

/// The pixel rectangle the plot area occupies inside the SVG canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Joint data extent of every series on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    pub t_min: i64,
    pub t_max: i64,
    pub p_min: f64,
    pub p_max: f64,
}

impl DataBounds {
    // Degenerate extents (single point, flat series) get a span of 1 so
    // the projection never divides by zero.
    fn t_span(&self) -> f64 {
        let span = (self.t_max - self.t_min) as f64;
        if span > 0.0 {
            span
        } else {
            1.0
        }
    }

    fn p_span(&self) -> f64 {
        let span = self.p_max - self.p_min;
        if span > 0.0 {
            span
        } else {
            1.0
        }
    }
}

/// Extent over every point of every series; `None` when nothing has any
/// points.
pub fn data_bounds<'a, I>(series: I) -> Option<DataBounds>
where
    I: IntoIterator<Item = &'a PriceSeries>,
{
    let mut bounds: Option<DataBounds> = None;
    for s in series {
        for point in &s.points {
            let ts = point.timestamp.timestamp_millis();
            bounds = Some(match bounds {
                None => DataBounds {
                    t_min: ts,
                    t_max: ts,
                    p_min: point.price,
                    p_max: point.price,
                },
                Some(b) => DataBounds {
                    t_min: b.t_min.min(ts),
                    t_max: b.t_max.max(ts),
                    p_min: b.p_min.min(point.price),
                    p_max: b.p_max.max(point.price),
                },
            });
        }
    }
    bounds
}

pub fn x_for(timestamp_ms: i64, bounds: &DataBounds, rect: &PlotRect) -> f64 {
    rect.left + (timestamp_ms - bounds.t_min) as f64 / bounds.t_span() * rect.width
}

/// Screen y grows downward, so the maximum price maps to the rect top.
pub fn y_for(price: f64, bounds: &DataBounds, rect: &PlotRect) -> f64 {
    rect.top + (bounds.p_max - price) / bounds.p_span() * rect.height
}

/// SVG `points` attribute for one series' polyline.
pub fn polyline_points(series: &PriceSeries, bounds: &DataBounds, rect: &PlotRect) -> String {
    let mut points = String::new();
    for point in &series.points {
        let x = x_for(point.timestamp.timestamp_millis(), bounds, rect);
        let y = y_for(point.price, bounds, rect);
        points.push_str(&format!("{:.2},{:.2} ", x, y));
    }
    points.trim_end().to_string()
}

/// Evenly spaced price tick values, endpoints included, lowest first.
pub fn price_ticks(bounds: &DataBounds, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![bounds.p_min];
    }
    (0..count)
        .map(|i| bounds.p_min + (bounds.p_max - bounds.p_min) * i as f64 / (count - 1) as f64)
        .collect()
}

/// Evenly spaced time tick values, endpoints included, earliest first.
pub fn time_ticks(bounds: &DataBounds, count: usize) -> Vec<DateTime<Utc>> {
    let count = count.max(2);
    (0..count)
        .map(|i| {
            let ts = bounds.t_min + (bounds.t_max - bounds.t_min) * i as i64 / (count - 1) as i64;
            DateTime::from_timestamp_millis(ts).unwrap_or_default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PricePoint;

    const T0: i64 = 1_704_067_200_000;
    const DAY_MS: i64 = 86_400_000;

    fn series(pairs: &[(i64, f64)]) -> PriceSeries {
        PriceSeries {
            coin_id: "test-coin".to_string(),
            points: pairs
                .iter()
                .map(|&(ts, price)| PricePoint {
                    timestamp: DateTime::from_timestamp_millis(ts).unwrap(),
                    price,
                })
                .collect(),
        }
    }

    fn rect() -> PlotRect {
        PlotRect {
            left: 50.0,
            top: 10.0,
            width: 100.0,
            height: 80.0,
        }
    }

    #[test]
    fn test_bounds_cover_all_series() {
        let a = series(&[(T0, 10.0), (T0 + DAY_MS, 30.0)]);
        let b = series(&[(T0 - DAY_MS, 20.0), (T0 + 2 * DAY_MS, 5.0)]);
        let bounds = data_bounds([&a, &b]).unwrap();
        assert_eq!(bounds.t_min, T0 - DAY_MS);
        assert_eq!(bounds.t_max, T0 + 2 * DAY_MS);
        assert_eq!(bounds.p_min, 5.0);
        assert_eq!(bounds.p_max, 30.0);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(data_bounds([&series(&[])]).is_none());
    }

    #[test]
    fn test_x_projection_is_monotonic_and_hits_edges() {
        let bounds = DataBounds {
            t_min: T0,
            t_max: T0 + 4 * DAY_MS,
            p_min: 0.0,
            p_max: 1.0,
        };
        let rect = rect();
        assert_eq!(x_for(T0, &bounds, &rect), 50.0);
        assert_eq!(x_for(T0 + 4 * DAY_MS, &bounds, &rect), 150.0);
        let mid = x_for(T0 + 2 * DAY_MS, &bounds, &rect);
        assert!(mid > 50.0 && mid < 150.0);
    }

    #[test]
    fn test_y_projection_inverts_axis() {
        let bounds = DataBounds {
            t_min: T0,
            t_max: T0 + DAY_MS,
            p_min: 10.0,
            p_max: 50.0,
        };
        let rect = rect();
        // Highest price at the top of the plot area.
        assert_eq!(y_for(50.0, &bounds, &rect), 10.0);
        assert_eq!(y_for(10.0, &bounds, &rect), 90.0);
    }

    #[test]
    fn test_flat_series_does_not_divide_by_zero() {
        let bounds = DataBounds {
            t_min: T0,
            t_max: T0,
            p_min: 7.0,
            p_max: 7.0,
        };
        let rect = rect();
        assert!(x_for(T0, &bounds, &rect).is_finite());
        assert!(y_for(7.0, &bounds, &rect).is_finite());
    }

    #[test]
    fn test_polyline_one_pair_per_point() {
        let s = series(&[(T0, 1.0), (T0 + DAY_MS, 2.0), (T0 + 2 * DAY_MS, 3.0)]);
        let bounds = data_bounds([&s]).unwrap();
        let points = polyline_points(&s, &bounds, &rect());
        assert_eq!(points.split(' ').count(), 3);
    }

    #[test]
    fn test_price_ticks_span_range() {
        let bounds = DataBounds {
            t_min: T0,
            t_max: T0 + DAY_MS,
            p_min: 0.0,
            p_max: 100.0,
        };
        let ticks = price_ticks(&bounds, 5);
        assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_time_ticks_endpoints() {
        let bounds = DataBounds {
            t_min: T0,
            t_max: T0 + 4 * DAY_MS,
            p_min: 0.0,
            p_max: 1.0,
        };
        let ticks = time_ticks(&bounds, 3);
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[0].timestamp_millis(), T0);
        assert_eq!(ticks[2].timestamp_millis(), T0 + 4 * DAY_MS);
    }
}
