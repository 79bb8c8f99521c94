//! Calendar days for the check-in gate.
use chrono::NaiveDate;

/// Storage format for check-in days.
pub const DAY_FORMAT: &str = "%Y-%m-%d";
/// `Date.prototype.toDateString()` form, still found in older records.
pub const LEGACY_DAY_FORMAT: &str = "%a %b %d %Y";

/// Source of "today".
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock calendar.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calendar;

impl Clock for Calendar {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A pinned day; every call returns it.
impl Clock for NaiveDate {
    fn today(&self) -> NaiveDate {
        *self
    }
}

/// Parses a stored check-in day in either accepted form.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DAY_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, LEGACY_DAY_FORMAT))
        .ok()
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_forms() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(parse_day("2026-10-18"), Some(day));
        assert_eq!(parse_day("Sun Oct 18 2026"), Some(day));
        assert_eq!(parse_day(&format_day(day)), Some(day));
    }
    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_day("yesterday"), None);
        assert_eq!(parse_day("2026-13-40"), None);
        assert_eq!(parse_day(""), None);
    }
    #[test]
    fn pinned_day() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(day.today(), day);
    }
}
