// Display formatting shared by the engine's log output and the GUI.
use chrono::NaiveDate;

/// Formats a USD price for display. Sub-dollar coins need more precision
/// than the usual two decimals, otherwise most of the catalog renders as
/// "0.00".
pub fn format_usd(price: f64) -> String {
    if price >= 1.0 {
        format!("{:.2}", price)
    } else {
        format!("{:.6}", price)
    }
}

/// Calendar date as `YYYY-MM-DD`, the format the summaries display.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_above_one() {
        assert_eq!(format_usd(43250.1278), "43250.13");
        assert_eq!(format_usd(1.0), "1.00");
    }

    #[test]
    fn test_format_usd_sub_dollar() {
        assert_eq!(format_usd(0.00001234), "0.000012");
        assert_eq!(format_usd(0.5), "0.500000");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date), "2024-03-09");
    }
}
