//! Date primitives shared by every filename convention.
//!
//! Science and ancillary filenames write dates as eight digits (`YYYYMMDD`);
//! SPICE filenames additionally use `YYYY_DOY` ordinal dates. Both forms are
//! checked against the real calendar, not only against their digit count.

use chrono::{Datelike, NaiveDate};

/// Parse a `YYYYMMDD` date.
///
/// Returns `None` unless `input` is exactly eight ASCII digits naming a real
/// calendar day.
///
/// # Examples
///
/// ```
/// # use imap_paths_core::time::parse_date;
/// assert!(parse_date("20210101").is_some());
/// assert!(parse_date("20210132").is_none());
/// assert!(parse_date("2021-01-01").is_none());
/// ```
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year = input[0..4].parse().ok()?;
    let month = input[4..6].parse().ok()?;
    let day = input[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Check that `input` is a valid `YYYYMMDD` date.
pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_some()
}

/// Render a date in the `YYYYMMDD` form used in filenames.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Check a `YYYY_DOY` pair.
///
/// The day must be an ordinal of that year (366 only in leap years). The pair
/// `0000_000` is accepted as the placeholder carried by undated kernels.
pub fn is_valid_day_of_year(year: u16, day: u16) -> bool {
    (year == 0 && day == 0) || NaiveDate::from_yo_opt(year.into(), day.into()).is_some()
}

/// A validated `YYYY_DOY` ordinal date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayOfYear {
    year: u16,
    day: u16,
}

impl DayOfYear {
    /// Create an ordinal date, or `None` if the pair fails [`is_valid_day_of_year`].
    pub fn new(year: u16, day: u16) -> Option<Self> {
        is_valid_day_of_year(year, day).then_some(Self { year, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u16 {
        self.day
    }

    /// Returns `true` for the undated `0000_000` placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.year == 0 && self.day == 0
    }

    /// The calendar date of this ordinal, `None` for the placeholder.
    pub fn to_date(&self) -> Option<NaiveDate> {
        if self.is_placeholder() {
            return None;
        }
        NaiveDate::from_yo_opt(self.year.into(), self.day.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("20210101"));
        assert!(is_valid_date("20240229"));

        assert!(!is_valid_date("2021-01-01"));
        assert!(!is_valid_date("20210132"));
        assert!(!is_valid_date("2021010"));
        assert!(!is_valid_date("202101011"));
        assert!(!is_valid_date("20230229"));
        assert!(!is_valid_date("20251320"));
        assert!(!is_valid_date("+2021010"));
    }

    #[test]
    fn test_format_date_roundtrip() {
        let date = parse_date("20250104").unwrap();

        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
        assert_eq!(format_date(date), "20250104");
    }

    #[test]
    fn test_day_of_year_bounds() {
        assert!(is_valid_day_of_year(2025, 1));
        assert!(is_valid_day_of_year(2025, 365));
        assert!(is_valid_day_of_year(2024, 366));
        assert!(is_valid_day_of_year(0, 0));

        assert!(!is_valid_day_of_year(2025, 366));
        assert!(!is_valid_day_of_year(2025, 410));
        assert!(!is_valid_day_of_year(2025, 0));
    }

    #[test]
    fn test_day_of_year_to_date() {
        let doy = DayOfYear::new(2025, 32).unwrap();
        assert_eq!(doy.to_date(), NaiveDate::from_ymd_opt(2025, 2, 1));

        let placeholder = DayOfYear::new(0, 0).unwrap();
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.to_date(), None);

        assert_eq!(DayOfYear::new(2025, 410), None);
    }
}
