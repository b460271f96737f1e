//! City CSV loading and month/day filtering.
//!
//! Reads one city's trip file into a [`Dataset`], parsing the start
//! timestamp of every row, then projects it down to the trips matching a
//! [`Selection`].

use std::io::Read;
use std::path::Path;

use bikeshare_core::cities::CityRegistry;
use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::{DayFilter, MonthFilter, Selection};
use bikeshare_core::time_utils::parse_trip_timestamp;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::dataset::{Dataset, Trip, TripRecord, REQUIRED_COLUMNS};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the file registered for `selection.city` and apply its filters.
///
/// Any read, CSV or timestamp failure is returned to the caller; nothing is
/// skipped silently.
pub fn load_data(registry: &CityRegistry, selection: &Selection) -> Result<Dataset> {
    let path = registry.path_for(selection.city);
    let dataset = read_trips(path)?;
    let total = dataset.len();

    let filtered = apply_filter(dataset, selection.month, selection.day);

    info!(
        "Loaded {} of {} trips from {} (month: {}, day: {})",
        filtered.len(),
        total,
        filtered.source().display(),
        selection.month,
        selection.day
    );

    Ok(filtered)
}

/// Read every trip in the CSV at `path`, unfiltered.
pub fn read_trips(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).map_err(|source| BikeshareError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_trips_from(path, file)
}

/// Read trips from any reader. `source` is only used to label the dataset
/// and errors.
pub fn read_trips_from<R: Read>(source: &Path, input: R) -> Result<Dataset> {
    let csv_error = |e: csv::Error| BikeshareError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_error)?.clone();
    check_required_columns(source, &headers)?;

    let mut trips = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let raw = result.map_err(csv_error)?;
        trips.push(parse_trip(source, row, &headers, raw)?);
    }

    debug!("Read {} trips from {}", trips.len(), source.display());

    Ok(Dataset::new(source, headers, trips))
}

/// Keep only trips whose derived month and weekday pass the filters.
///
/// A pure projection: row order is preserved and `All` keeps everything.
pub fn apply_filter(dataset: Dataset, month: MonthFilter, day: DayFilter) -> Dataset {
    if month == MonthFilter::All && day == DayFilter::All {
        return dataset;
    }
    dataset.retain(|trip| month.matches(trip.month) && day.matches(trip.weekday))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn check_required_columns(source: &Path, headers: &StringRecord) -> Result<()> {
    match REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        Some(column) => Err(BikeshareError::MissingColumn {
            path: source.to_path_buf(),
            column: column.to_string(),
        }),
        None => Ok(()),
    }
}

fn parse_trip(source: &Path, row: usize, headers: &StringRecord, raw: StringRecord) -> Result<Trip> {
    let record: TripRecord = raw
        .deserialize(Some(headers))
        .map_err(|e| BikeshareError::Csv {
            path: source.to_path_buf(),
            source: e,
        })?;

    let start = parse_trip_timestamp(&record.start_time).ok_or_else(|| {
        BikeshareError::TimestampParse {
            path: source.to_path_buf(),
            row: row + 1,
            value: record.start_time.clone(),
        }
    })?;

    Ok(Trip::new(row, record, start, raw))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
