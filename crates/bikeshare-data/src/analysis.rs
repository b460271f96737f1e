//! The four trip statistics shown after every load.
//!
//! Each `compute` returns `None` for an empty dataset; the reporters turn
//! that into a "no trips" message instead of inventing a value.

use crate::aggregator::{mean, mode, sum, value_counts};
use crate::dataset::{Dataset, Trip};

// ── Time of travel ────────────────────────────────────────────────────────────

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    /// 1-based calendar month.
    pub popular_month: u32,
    /// Title-case day name.
    pub popular_day: String,
    /// 0-23.
    pub popular_hour: u32,
}

impl TimeStats {
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let trips = dataset.trips();
        Some(Self {
            popular_month: mode(trips.iter().map(|t| t.month))?,
            popular_day: mode(trips.iter().map(Trip::day_name))?.to_string(),
            popular_hour: mode(trips.iter().map(Trip::hour))?,
        })
    }
}

// ── Stations ──────────────────────────────────────────────────────────────────

/// Most frequent start station, end station, and start/end combination.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub popular_start: String,
    pub popular_end: String,
    /// Formatted as `"<start> - <end>"`.
    pub popular_trip: String,
}

impl StationStats {
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let trips = dataset.trips();
        Some(Self {
            popular_start: mode(trips.iter().map(|t| t.record.start_station.as_str()))?
                .to_string(),
            popular_end: mode(trips.iter().map(|t| t.record.end_station.as_str()))?.to_string(),
            popular_trip: mode(trips.iter().map(Trip::station_pair))?,
        })
    }
}

// ── Duration ──────────────────────────────────────────────────────────────────

/// Total and mean trip duration in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
    pub trip_count: usize,
}

impl DurationStats {
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let durations = || dataset.trips().iter().map(|t| t.record.trip_duration);
        Some(Self {
            mean_seconds: mean(durations())?,
            total_seconds: sum(durations()),
            trip_count: dataset.len(),
        })
    }
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// Result for a column that only some cities publish.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldReport<T> {
    /// The city's file has no such column.
    Absent,
    Present(T),
}

impl<T> FieldReport<T> {
    /// Run `compute` only when the column exists.
    fn when(available: bool, compute: impl FnOnce() -> T) -> Self {
        if available {
            FieldReport::Present(compute())
        } else {
            FieldReport::Absent
        }
    }
}

/// Earliest, most recent and most common rider birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

impl BirthYearStats {
    /// `None` when no trip has a birth year recorded.
    fn compute(trips: &[Trip]) -> Option<Self> {
        let years = || trips.iter().filter_map(Trip::birth_year);
        Some(Self {
            earliest: years().min()?,
            most_recent: years().max()?,
            most_common: mode(years())?,
        })
    }
}

/// Rider breakdowns. Blank cells are not counted.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    /// Most frequent first.
    pub user_types: Vec<(String, usize)>,
    pub genders: FieldReport<Vec<(String, usize)>>,
    pub birth_years: FieldReport<Option<BirthYearStats>>,
}

impl UserStats {
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }
        let trips = dataset.trips();
        let schema = dataset.schema();

        Some(Self {
            user_types: owned_counts(trips.iter().filter_map(Trip::user_type)),
            genders: FieldReport::when(schema.has_gender, || {
                owned_counts(trips.iter().filter_map(Trip::gender))
            }),
            birth_years: FieldReport::when(schema.has_birth_year, || {
                BirthYearStats::compute(trips)
            }),
        })
    }
}

fn owned_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    value_counts(values)
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
