//! Observation date type.

use std::fmt;

use chrono::{Duration, NaiveDate};

/// Text format of every date stored in the `measurement` table.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the look-back window used for recent observations.
pub const RECENT_WINDOW_DAYS: i64 = 365;

/// Error returned when parsing an invalid observation date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid observation date {input:?}: expected YYYY-MM-DD")]
pub struct InvalidDate {
    input: String,
}

/// A calendar day as stored in the dataset.
///
/// Stored dates are zero-padded ISO strings, so their text order is their
/// chronological order. The database filters rely on that and compare the
/// text directly.
///
/// # Examples
///
/// ```
/// use climate_server::domain::ObservationDate;
///
/// let last = ObservationDate::parse("2017-08-23").unwrap();
/// assert_eq!(last.year_before().to_string(), "2016-08-23");
///
/// assert!(ObservationDate::parse("23/08/2017").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObservationDate(NaiveDate);

impl ObservationDate {
    /// Parse a `YYYY-MM-DD` string.
    ///
    /// Only the zero-padded form is accepted: `2017-8-3` is rejected even
    /// though it names a real day, because it would not sort correctly
    /// against the stored text.
    pub fn parse(s: &str) -> Result<Self, InvalidDate> {
        let invalid = || InvalidDate {
            input: s.to_string(),
        };

        if s.len() != 10 {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(ObservationDate)
            .map_err(|_| invalid())
    }

    /// The start of the recent-observation window ending on this date.
    ///
    /// This is a fixed offset of [`RECENT_WINDOW_DAYS`], so a window that
    /// spans 29 February starts one calendar day later than "same day last
    /// year".
    pub fn year_before(&self) -> Self {
        ObservationDate(self.0 - Duration::days(RECENT_WINDOW_DAYS))
    }

    #[cfg(test)]
    fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Debug for ObservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObservationDate({})", self)
    }
}

impl fmt::Display for ObservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_dates() {
        assert!(ObservationDate::parse("2017-08-23").is_ok());
        assert!(ObservationDate::parse("2010-01-01").is_ok());
        assert!(ObservationDate::parse("2016-02-29").is_ok());
    }

    #[test]
    fn reject_malformed_dates() {
        assert!(ObservationDate::parse("").is_err());
        assert!(ObservationDate::parse("2017-8-23").is_err());
        assert!(ObservationDate::parse("2017-08-3").is_err());
        assert!(ObservationDate::parse("23-08-2017").is_err());
        assert!(ObservationDate::parse("2017/08/23").is_err());
        assert!(ObservationDate::parse("2017-08-23T00:00").is_err());
        assert!(ObservationDate::parse("yesterday").is_err());
    }

    #[test]
    fn reject_impossible_dates() {
        assert!(ObservationDate::parse("2017-02-29").is_err());
        assert!(ObservationDate::parse("2017-13-01").is_err());
        assert!(ObservationDate::parse("2017-04-31").is_err());
    }

    #[test]
    fn year_before_is_fixed_offset() {
        let date = ObservationDate::parse("2017-08-23").unwrap();
        assert_eq!(date.year_before().to_string(), "2016-08-23");

        // 2016 is a leap year, so 365 days before 2016-08-23 is 2015-08-24
        let date = ObservationDate::parse("2016-08-23").unwrap();
        assert_eq!(date.year_before().to_string(), "2015-08-24");
    }

    #[test]
    fn display_is_zero_padded() {
        let date = ObservationDate(NaiveDate::from_ymd_opt(2010, 1, 5).unwrap());
        assert_eq!(date.to_string(), "2010-01-05");
    }

    #[test]
    fn debug() {
        let date = ObservationDate::parse("2017-08-23").unwrap();
        assert_eq!(format!("{:?}", date), "ObservationDate(2017-08-23)");
    }

    #[test]
    fn error_display() {
        let err = ObservationDate::parse("soon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid observation date \"soon\": expected YYYY-MM-DD"
        );
    }
}
