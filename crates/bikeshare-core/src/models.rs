use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

use crate::cities::City;
use crate::error::{BikeshareError, Result};
use crate::time_utils::{parse_weekday_name, weekday_name};

/// Sentinel accepted by the month and day prompts to disable a filter.
pub const ALL: &str = "all";

/// Months covered by the published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// Covered months in calendar order.
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar month number.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }
}

impl FromStr for Month {
    type Err = BikeshareError;

    fn from_str(value: &str) -> Result<Self> {
        let normalised = value.trim().to_lowercase();
        Month::ALL
            .into_iter()
            .find(|m| m.as_str() == normalised)
            .ok_or(BikeshareError::UnknownMonth(normalised))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

/// Month restriction chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    /// Whether a trip starting in calendar month `month` passes the filter.
    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m.number() == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    /// Accepts `"all"` or a covered month name, case-insensitively.
    fn from_str(value: &str) -> Result<Self> {
        if value.trim().eq_ignore_ascii_case(ALL) {
            return Ok(MonthFilter::All);
        }
        value.parse().map(MonthFilter::Only)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str(ALL),
            MonthFilter::Only(m) => m.fmt(f),
        }
    }
}

/// Day-of-week restriction chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => *d == day,
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    /// Accepts `"all"` or a full day name (`"friday"`), case-insensitively.
    fn from_str(value: &str) -> Result<Self> {
        if value.trim().eq_ignore_ascii_case(ALL) {
            return Ok(DayFilter::All);
        }
        parse_weekday_name(value)
            .map(DayFilter::Only)
            .ok_or_else(|| BikeshareError::UnknownDay(value.trim().to_lowercase()))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str(ALL),
            DayFilter::Only(d) => f.write_str(&weekday_name(*d).to_lowercase()),
        }
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// One session iteration's choice of city and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Selection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }
}

impl fmt::Display for Selection {
    /// Lower-cased names separated by spaces, e.g. `chicago march all`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.city, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_numbers_are_one_based() {
        let numbers: Vec<u32> = Month::ALL.iter().map(Month::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_month_from_str() {
        assert_eq!("March".parse::<Month>().unwrap(), Month::March);
        assert_eq!("JUNE".parse::<Month>().unwrap(), Month::June);
        assert!("july".parse::<Month>().is_err());
        assert!("mar".parse::<Month>().is_err());
    }

    #[test]
    fn test_month_filter_from_str() {
        assert_eq!("ALL".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!(
            "february".parse::<MonthFilter>().unwrap(),
            MonthFilter::Only(Month::February)
        );
        assert!("".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_month_filter_matches() {
        assert!(MonthFilter::All.matches(11));
        assert!(MonthFilter::Only(Month::March).matches(3));
        assert!(!MonthFilter::Only(Month::March).matches(4));
    }

    #[test]
    fn test_day_filter_from_str() {
        assert_eq!("all".parse::<DayFilter>().unwrap(), DayFilter::All);
        assert_eq!(
            "Friday".parse::<DayFilter>().unwrap(),
            DayFilter::Only(Weekday::Fri)
        );
        match "fri".parse::<DayFilter>() {
            Err(BikeshareError::UnknownDay(v)) => assert_eq!(v, "fri"),
            other => panic!("expected UnknownDay, got {other:?}"),
        }
    }

    #[test]
    fn test_day_filter_matches() {
        assert!(DayFilter::All.matches(Weekday::Sun));
        assert!(DayFilter::Only(Weekday::Tue).matches(Weekday::Tue));
        assert!(!DayFilter::Only(Weekday::Tue).matches(Weekday::Wed));
    }

    #[test]
    fn test_selection_display_is_lowercase() {
        let selection = Selection::new(
            City::NewYorkCity,
            MonthFilter::Only(Month::May),
            DayFilter::Only(Weekday::Sat),
        );
        assert_eq!(selection.to_string(), "new york city may saturday");

        let everything = Selection::new(City::Chicago, MonthFilter::All, DayFilter::All);
        assert_eq!(everything.to_string(), "chicago all all");
    }
}
