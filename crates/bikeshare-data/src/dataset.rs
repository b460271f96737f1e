//! In-memory trip table.
//!
//! A [`Dataset`] is one city file after parsing: the header row, which
//! optional columns exist, and the trips in file order. Derived fields
//! (month, weekday, hour, station pair) are computed from the parsed start
//! timestamp and never stored separately from it.

use std::path::{Path, PathBuf};

use bikeshare_core::time_utils::weekday_name;
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use csv::StringRecord;
use serde::Deserialize;

// ── Column names ──────────────────────────────────────────────────────────────

pub const START_TIME: &str = "Start Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city file must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    START_TIME,
    TRIP_DURATION,
    START_STATION,
    END_STATION,
    USER_TYPE,
];

/// Separator used when labelling a start/end station pair.
pub const STATION_PAIR_SEPARATOR: &str = " - ";

// ── TripRecord ────────────────────────────────────────────────────────────────

/// One CSV row as published. Blank optional cells deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    /// Seconds.
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    /// Published as a float (`1992.0`) in some cities.
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

// ── Trip ──────────────────────────────────────────────────────────────────────

/// A [`TripRecord`] with its start timestamp parsed and calendar fields
/// derived from it.
#[derive(Debug, Clone)]
pub struct Trip {
    /// 0-based position of the row in the source file.
    pub row: usize,
    pub record: TripRecord,
    pub start: NaiveDateTime,
    /// Calendar month of `start`, 1-based.
    pub month: u32,
    pub weekday: Weekday,
    /// The row exactly as read, for raw display.
    pub raw: StringRecord,
}

impl Trip {
    pub fn new(row: usize, record: TripRecord, start: NaiveDateTime, raw: StringRecord) -> Self {
        Self {
            row,
            record,
            month: start.month(),
            weekday: start.weekday(),
            start,
            raw,
        }
    }

    /// Hour of day (0-23) the trip started.
    pub fn hour(&self) -> u32 {
        self.start.hour()
    }

    /// Title-case day name, e.g. `"Tuesday"`.
    pub fn day_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    /// `"<start station> - <end station>"`.
    pub fn station_pair(&self) -> String {
        format!(
            "{}{}{}",
            self.record.start_station, STATION_PAIR_SEPARATOR, self.record.end_station
        )
    }

    pub fn birth_year(&self) -> Option<i32> {
        self.record
            .birth_year
            .filter(|y| y.is_finite())
            .map(|y| y.round() as i32)
    }

    /// Non-blank user type.
    pub fn user_type(&self) -> Option<&str> {
        non_blank(self.record.user_type.as_deref())
    }

    /// Non-blank gender.
    pub fn gender(&self) -> Option<&str> {
        non_blank(self.record.gender.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ── Schema ────────────────────────────────────────────────────────────────────

/// Which optional columns a city file provides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    pub fn from_headers(headers: &StringRecord) -> Self {
        Self {
            has_gender: headers.iter().any(|h| h == GENDER),
            has_birth_year: headers.iter().any(|h| h == BIRTH_YEAR),
        }
    }
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// Ordered trips from one city file, possibly filtered.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: PathBuf,
    headers: StringRecord,
    schema: Schema,
    trips: Vec<Trip>,
}

impl Dataset {
    pub fn new(source: impl Into<PathBuf>, headers: StringRecord, trips: Vec<Trip>) -> Self {
        let schema = Schema::from_headers(&headers);
        Self {
            source: source.into(),
            headers,
            schema,
            trips,
        }
    }

    /// File the trips were read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Up to `size` trips starting at position `start`. Empty once `start`
    /// is past the end.
    pub fn page(&self, start: usize, size: usize) -> &[Trip] {
        let begin = start.min(self.trips.len());
        let end = start.saturating_add(size).min(self.trips.len());
        &self.trips[begin..end]
    }

    /// Keep only trips for which `keep` returns `true`, preserving order.
    pub fn retain(mut self, keep: impl FnMut(&Trip) -> bool) -> Self {
        self.trips.retain(keep);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::time_utils::parse_trip_timestamp;

    fn record(start: &str, from: &str, to: &str) -> TripRecord {
        TripRecord {
            start_time: start.to_string(),
            trip_duration: 600.0,
            start_station: from.to_string(),
            end_station: to.to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: Some("  ".to_string()),
            birth_year: Some(1988.0),
        }
    }

    fn trip(row: usize, start: &str) -> Trip {
        let ts = parse_trip_timestamp(start).unwrap();
        Trip::new(row, record(start, "A", "B"), ts, StringRecord::new())
    }

    fn headers(cols: &[&str]) -> StringRecord {
        StringRecord::from(cols.to_vec())
    }

    #[test]
    fn test_trip_derived_fields_follow_start() {
        // 2017-03-14 was a Tuesday.
        let t = trip(0, "2017-03-14 17:05:01");
        assert_eq!(t.month, 3);
        assert_eq!(t.weekday, Weekday::Tue);
        assert_eq!(t.day_name(), "Tuesday");
        assert_eq!(t.hour(), 17);
    }

    #[test]
    fn test_trip_station_pair() {
        let t = trip(0, "2017-01-01 00:00:00");
        assert_eq!(t.station_pair(), "A - B");
    }

    #[test]
    fn test_trip_blank_optional_fields_are_none() {
        let t = trip(0, "2017-01-01 00:00:00");
        assert_eq!(t.gender(), None);
        assert_eq!(t.user_type(), Some("Subscriber"));
        assert_eq!(t.birth_year(), Some(1988));
    }

    #[test]
    fn test_schema_from_headers() {
        let full = headers(&["", START_TIME, GENDER, BIRTH_YEAR]);
        assert_eq!(
            Schema::from_headers(&full),
            Schema {
                has_gender: true,
                has_birth_year: true
            }
        );

        let washington = headers(&["", START_TIME, USER_TYPE]);
        assert_eq!(Schema::from_headers(&washington), Schema::default());
    }

    #[test]
    fn test_dataset_page_bounds() {
        let trips: Vec<Trip> = (0..12)
            .map(|i| trip(i, "2017-01-01 00:00:00"))
            .collect();
        let ds = Dataset::new("x.csv", headers(&[START_TIME]), trips);

        assert_eq!(ds.page(0, 5).len(), 5);
        assert_eq!(ds.page(10, 5).len(), 2);
        assert_eq!(ds.page(10, 5)[0].row, 10);
        assert!(ds.page(15, 5).is_empty());
        assert!(ds.page(usize::MAX, 5).is_empty());
    }

    #[test]
    fn test_dataset_retain_preserves_order() {
        let trips: Vec<Trip> = (0..6).map(|i| trip(i, "2017-01-01 00:00:00")).collect();
        let ds = Dataset::new("x.csv", headers(&[START_TIME]), trips).retain(|t| t.row % 2 == 1);
        let rows: Vec<usize> = ds.trips().iter().map(|t| t.row).collect();
        assert_eq!(rows, vec![1, 3, 5]);
    }
}
