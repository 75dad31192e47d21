//! Parsing of the date-range picker's values and the picker's bounds.

use time::{Date, format_description::BorrowedFormatItem, macros::date, macros::format_description};

use crate::Error;

/// An inclusive range of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first date in the range.
    pub start: Date,
    /// The last date in the range.
    pub end: Date,
}

const PICKER_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Parse the start and end dates submitted by the date-range picker.
///
/// Returns `Ok(None)` unless both dates are given and non-empty, since a
/// half-open range does not select anything. Dates are expected as
/// `YYYY-MM-DD`, anything after a `T` (a time of day) is ignored.
///
/// # Errors
/// Returns [Error::InvalidDate] if a date cannot be parsed, or
/// [Error::InvalidDateRange] if the start date is after the end date.
pub fn parse_date_range(
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<Option<DateRange>, Error> {
    let (start_date, end_date) = match (non_empty(start_date), non_empty(end_date)) {
        (Some(start_date), Some(end_date)) => (start_date, end_date),
        _ => return Ok(None),
    };

    let start = parse_picker_date(start_date)?;
    let end = parse_picker_date(end_date)?;

    if start > end {
        return Err(Error::InvalidDateRange { start, end });
    }

    Ok(Some(DateRange { start, end }))
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}

fn parse_picker_date(text: &str) -> Result<Date, Error> {
    let date_part = text.split('T').next().unwrap_or(text);

    Date::parse(date_part, PICKER_DATE_FORMAT).map_err(|error| {
        tracing::debug!("could not parse date {text:?}: {error}");
        Error::InvalidDate(text.to_owned())
    })
}

/// The bounds and defaults of the date-range picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePickerConfig {
    /// The earliest date that can be picked.
    pub min_date: Date,
    /// The latest date that can be picked.
    pub max_date: Date,
    /// The end date shown when the dashboard is first opened.
    pub default_end_date: Date,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            min_date: date!(1995 - 08 - 05),
            max_date: date!(2021 - 09 - 19),
            default_end_date: date!(2017 - 08 - 25),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::Error;

    use super::{DateRange, parse_date_range};

    #[test]
    fn parses_both_dates() {
        let got = parse_date_range(Some("2017-08-01"), Some("2017-08-25"));

        assert_eq!(
            got,
            Ok(Some(DateRange {
                start: date!(2017 - 08 - 01),
                end: date!(2017 - 08 - 25)
            }))
        );
    }

    #[test]
    fn ignores_time_of_day() {
        let got = parse_date_range(Some("2017-08-01T00:00:00"), Some("2017-08-25T00:00:00"));

        assert_eq!(
            got,
            Ok(Some(DateRange {
                start: date!(2017 - 08 - 01),
                end: date!(2017 - 08 - 25)
            }))
        );
    }

    #[test]
    fn missing_or_empty_date_gives_no_range() {
        assert_eq!(parse_date_range(None, Some("2017-08-25")), Ok(None));
        assert_eq!(parse_date_range(Some("2017-08-01"), None), Ok(None));
        assert_eq!(parse_date_range(Some(""), Some("2017-08-25")), Ok(None));
        assert_eq!(parse_date_range(Some("  "), Some("")), Ok(None));
    }

    #[test]
    fn single_day_range_is_valid() {
        let got = parse_date_range(Some("2017-08-01"), Some("2017-08-01"));

        assert!(matches!(got, Ok(Some(_))));
    }

    #[test]
    fn rejects_start_after_end() {
        let got = parse_date_range(Some("2017-08-26"), Some("2017-08-25"));

        assert_eq!(
            got,
            Err(Error::InvalidDateRange {
                start: date!(2017 - 08 - 26),
                end: date!(2017 - 08 - 25)
            })
        );
    }

    #[test]
    fn rejects_malformed_date() {
        let got = parse_date_range(Some("01.08.2017"), Some("2017-08-25"));

        assert_eq!(got, Err(Error::InvalidDate("01.08.2017".to_owned())));
    }
}
