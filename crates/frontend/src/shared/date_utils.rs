//! Date helpers shared by the product screens.

use chrono::{Local, NaiveDate};

/// Current date at day precision, as stamped onto newly created products.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as DD.MM.YYYY for display.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(format_date(date), "15.03.2026");
    }

    #[test]
    fn test_format_date_pads_single_digits() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(format_date(date), "02.01.2026");
    }
}
