use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One record of the remote coin directory: machine identifier plus the
/// human-facing display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoinEntry {
    pub id: String,
    pub name: String,
}

/// A single observation of a coin's USD price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    /// Calendar date of the observation (UTC).
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// A chronologically ascending price history for one coin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceSeries {
    pub coin_id: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Maximum and minimum price over a series, each with the calendar date of
/// its first occurrence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeriesExtremes {
    pub max_price: f64,
    pub max_date: NaiveDate,
    pub min_price: f64,
    pub min_date: NaiveDate,
}

/// The fixed set of history windows the charting endpoint accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    Week,
    Month,
    Year,
    FiveYears,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 4] = [
        TimeWindow::Week,
        TimeWindow::Month,
        TimeWindow::Year,
        TimeWindow::FiveYears,
    ];

    /// Day count sent as the `days` query parameter.
    pub fn days(self) -> u32 {
        match self {
            TimeWindow::Week => 7,
            TimeWindow::Month => 30,
            TimeWindow::Year => 365,
            TimeWindow::FiveYears => 1825,
        }
    }

    /// Display label used by selection widgets.
    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::Week => "1 week",
            TimeWindow::Month => "1 month",
            TimeWindow::Year => "1 year",
            TimeWindow::FiveYears => "5 years",
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.days() == days)
    }
}

/// Outcome of one classifier forward pass. `confidence` is the raw value of
/// the winning output unit, not a calibrated probability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub digit: u8,
    pub confidence: f32,
}
