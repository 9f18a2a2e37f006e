//! Date-of-birth validation
//!
//! Month names come from the sign-up picker, which uses its own spellings
//! (`March`, `Sept`, ...), so they are matched against a fixed table rather
//! than parsed with a date format.

use std::ops::RangeInclusive;

use chrono::{Datelike, Local, NaiveDate};

/// Month labels offered by the date-of-birth picker, in calendar order
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "March", "April", "May", "June", "July", "August", "Sept", "Oct", "Nov", "Dec",
];

/// Earliest year accepted; smaller values would be read as two-digit years
const MIN_YEAR: i32 = 100;

/// Days offered by the picker, whatever the month
pub const PICKER_DAYS: RangeInclusive<u32> = 1..=31;

/// Number of years the picker offers, ending with the current year
pub const PICKER_YEAR_SPAN: i32 = 100;

/// Years offered by the picker relative to `today`
pub fn picker_years(today: NaiveDate) -> RangeInclusive<i32> {
    let current = today.year();
    (current - PICKER_YEAR_SPAN + 1)..=current
}

/// Zero-based index of a picker month label
pub fn month_index(month: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == month)
}

/// Check a date of birth against today's local date
pub fn validate_date_of_birth(month: &str, day: &str, year: &str) -> bool {
    validate_date_of_birth_on(month, day, year, Local::now().date_naive())
}

/// Check a date of birth against an explicit reference date
///
/// All three parts must be present, the triple must name a real calendar
/// date, and that date must not be after `today`.
pub fn validate_date_of_birth_on(month: &str, day: &str, year: &str, today: NaiveDate) -> bool {
    parse_date_of_birth(month, day, year).is_some_and(|date| date <= today)
}

/// Build the calendar date named by a picker triple, if there is one
pub fn parse_date_of_birth(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    if month.is_empty() || day.is_empty() || year.is_empty() {
        return None;
    }

    let month = u32::try_from(month_index(month)?).ok()? + 1;
    let day: u32 = day.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;
    if year < MIN_YEAR {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    (date.day() == day && date.month() == month && date.year() == year).then_some(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_table() {
        assert_eq!(month_index("Jan"), Some(0));
        assert_eq!(month_index("March"), Some(2));
        assert_eq!(month_index("Sept"), Some(8));
        assert_eq!(month_index("Dec"), Some(11));
        assert_eq!(month_index("Mar"), None);
        assert_eq!(month_index("September"), None);
        assert_eq!(month_index("jan"), None);
    }

    #[test]
    fn test_picker_years() {
        let years = picker_years(on(2024, 6, 1));
        assert_eq!(*years.start(), 1925);
        assert_eq!(*years.end(), 2024);
        assert_eq!(years.count(), 100);
        assert!(PICKER_DAYS.contains(&31));
        assert!(!PICKER_DAYS.contains(&0));
    }

    #[test]
    fn test_real_dates() {
        assert!(validate_date_of_birth("Jan", "15", "1990"));
        assert!(validate_date_of_birth_on("Feb", "29", "2000", on(2024, 1, 1)));
        assert!(validate_date_of_birth_on("Sept", "30", "1985", on(2024, 1, 1)));
    }

    #[test]
    fn test_impossible_dates() {
        assert!(!validate_date_of_birth("Feb", "30", "2000"));
        assert!(!validate_date_of_birth("Feb", "29", "2001"));
        assert!(!validate_date_of_birth("April", "31", "1990"));
        assert!(!validate_date_of_birth("Jan", "0", "1990"));
        assert!(!validate_date_of_birth("Jan", "32", "1990"));
    }

    #[test]
    fn test_future_dates_rejected() {
        assert!(!validate_date_of_birth("Jan", "15", "2999"));
        assert!(!validate_date_of_birth_on("June", "2", "2024", on(2024, 6, 1)));
        assert!(validate_date_of_birth_on("June", "1", "2024", on(2024, 6, 1)));
    }

    #[test]
    fn test_missing_or_malformed_parts() {
        assert!(!validate_date_of_birth("", "15", "1990"));
        assert!(!validate_date_of_birth("Jan", "", "1990"));
        assert!(!validate_date_of_birth("Jan", "15", ""));
        assert!(!validate_date_of_birth("Janvier", "15", "1990"));
        assert!(!validate_date_of_birth("Jan", "15th", "1990"));
        assert!(!validate_date_of_birth("Jan", "15", "nineteen"));
        assert!(!validate_date_of_birth("Jan", "15", "90"));
    }

    #[test]
    fn test_parse_date_of_birth() {
        assert_eq!(parse_date_of_birth("Oct", "3", "1971"), Some(on(1971, 10, 3)));
        assert_eq!(parse_date_of_birth("Oct", " 3 ", "1971"), Some(on(1971, 10, 3)));
        assert_eq!(parse_date_of_birth("Nov", "31", "1971"), None);
    }
}
