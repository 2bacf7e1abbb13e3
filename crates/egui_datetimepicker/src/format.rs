//! Default formatters used by the picker configs.
//!
//! All of them are plain `fn` pointers, so any function or non-capturing closure with the
//! same signature can replace a default.
//! See [`chrono::format::strftime`] for the pattern syntax.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Formats a selected date, e.g. for the text of the picker button.
pub type DateFormatter = fn(NaiveDate) -> String;

/// Formats a selected date together with its time of day.
pub type DateTimeFormatter = fn(NaiveDateTime) -> String;

/// Formats a time of day.
pub type TimeFormatter = fn(NaiveTime) -> String;

/// `01/05/2024`
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// `01/05/2024 02:07 PM`
pub const DATE_TIME_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// `02:07 PM`
pub const TIME_FORMAT: &str = "%I:%M %p";

/// `January 2024`
pub const TITLE_FORMAT: &str = "%B %Y";

/// `Friday, January 05, 2024`
pub const FULL_DATE_FORMAT: &str = "%A, %B %d, %Y";

/// Default for [`Config::date_formatter`](crate::Config::date_formatter).
pub fn date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Default for [`Config::date_time_formatter`](crate::Config::date_time_formatter).
pub fn date_time(date_time: NaiveDateTime) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

/// Default for [`TimePickerConfig::time_formatter`](crate::TimePickerConfig::time_formatter).
pub fn time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Title above the calendar grid, showing the month being browsed.
pub fn title(date: NaiveDate) -> String {
    date.format(TITLE_FORMAT).to_string()
}

/// Long form of a date, e.g. for a hover text on a calendar day.
pub fn full_date(date: NaiveDate) -> String {
    date.format(FULL_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_date_formatters() {
        assert_eq!(date(friday()), "01/05/2024");
        assert_eq!(title(friday()), "January 2024");
        assert_eq!(full_date(friday()), "Friday, January 05, 2024");
    }

    #[test]
    fn test_time_uses_twelve_hour_clock() {
        let afternoon = NaiveTime::from_hms_opt(14, 7, 0).unwrap();
        assert_eq!(time(afternoon), "02:07 PM");

        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(time(midnight), "12:00 AM");

        assert_eq!(date_time(friday().and_time(afternoon)), "01/05/2024 02:07 PM");
    }
}
