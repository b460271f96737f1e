//! Console rendering of the four trip statistics.
//!
//! Each reporter prints a heading, the computed figures (or a "no trips"
//! notice for an empty selection), how long the computation took, and a
//! closing rule.

use std::io::{self, Write};
use std::time::Instant;

use bikeshare_core::formatting::{format_duration, format_number, percentage};
use bikeshare_core::time_utils::month_name;
use bikeshare_data::analysis::{
    BirthYearStats, DurationStats, FieldReport, StationStats, TimeStats, UserStats,
};
use bikeshare_data::dataset::Dataset;
use unicode_width::UnicodeWidthStr;

use crate::console::rule;

pub const NO_TRIPS: &str = "No trips match the selected filters.";
pub const GENDER_ABSENT: &str = "Gender field not present";
pub const BIRTH_YEAR_ABSENT: &str = "Birth Year field not present";
pub const BIRTH_YEAR_EMPTY: &str = "No Birth Year data available.";

/// Most frequent month, day of week and start hour.
pub fn time_stats<W: Write>(out: &mut W, dataset: &Dataset) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    match TimeStats::compute(dataset) {
        Some(stats) => {
            let month = match month_name(stats.popular_month) {
                Some(name) => format!("{} ({})", stats.popular_month, name),
                None => stats.popular_month.to_string(),
            };
            writeln!(out, "The most common month is: {month}")?;
            writeln!(out, "The most common day of week is: {}", stats.popular_day)?;
            writeln!(out, "The most common start hour is: {}", stats.popular_hour)?;
        }
        None => writeln!(out, "{NO_TRIPS}")?,
    }

    footer(out, started)
}

/// Most popular start station, end station and trip.
pub fn station_stats<W: Write>(out: &mut W, dataset: &Dataset) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    match StationStats::compute(dataset) {
        Some(stats) => {
            writeln!(out, "The most common start station is: {}", stats.popular_start)?;
            writeln!(out, "The most common end station is: {}", stats.popular_end)?;
            writeln!(
                out,
                "The most frequent combination of start station and end station is: {}",
                stats.popular_trip
            )?;
        }
        None => writeln!(out, "{NO_TRIPS}")?,
    }

    footer(out, started)
}

/// Total and mean trip duration.
pub fn trip_duration_stats<W: Write>(out: &mut W, dataset: &Dataset) -> io::Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    match DurationStats::compute(dataset) {
        Some(stats) => {
            writeln!(
                out,
                "The total travel time is: {} seconds ({})",
                format_number(stats.total_seconds, 0),
                format_duration(stats.total_seconds)
            )?;
            writeln!(
                out,
                "The mean travel time is: {} seconds ({})",
                format_number(stats.mean_seconds, 2),
                format_duration(stats.mean_seconds)
            )?;
        }
        None => writeln!(out, "{NO_TRIPS}")?,
    }

    footer(out, started)
}

/// User type, gender and birth year breakdowns.
///
/// Gender and birth year are skipped with a notice for cities that do not
/// publish them; the rest of the report still prints.
pub fn user_stats<W: Write>(out: &mut W, dataset: &Dataset) -> io::Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    match UserStats::compute(dataset) {
        Some(stats) => {
            writeln!(out, "Counts of user types:")?;
            write_counts(out, &stats.user_types)?;

            match &stats.genders {
                FieldReport::Present(counts) => {
                    writeln!(out, "\nCounts of gender:")?;
                    write_counts(out, counts)?;
                }
                FieldReport::Absent => writeln!(out, "\n{GENDER_ABSENT}")?,
            }

            match stats.birth_years {
                FieldReport::Present(Some(BirthYearStats {
                    earliest,
                    most_recent,
                    most_common,
                })) => {
                    writeln!(out, "\nEarliest year of birth: {earliest}")?;
                    writeln!(out, "Most recent year of birth: {most_recent}")?;
                    writeln!(out, "Most common year of birth: {most_common}")?;
                }
                FieldReport::Present(None) => writeln!(out, "\n{BIRTH_YEAR_EMPTY}")?,
                FieldReport::Absent => writeln!(out, "\n{BIRTH_YEAR_ABSENT}")?,
            }
        }
        None => writeln!(out, "{NO_TRIPS}")?,
    }

    footer(out, started)
}

/// Run the four reporters in their fixed order.
pub fn all_stats<W: Write>(out: &mut W, dataset: &Dataset) -> io::Result<()> {
    time_stats(out, dataset)?;
    station_stats(out, dataset)?;
    trip_duration_stats(out, dataset)?;
    user_stats(out, dataset)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn footer<W: Write>(out: &mut W, started: Instant) -> io::Result<()> {
    writeln!(
        out,
        "\nThis took {:.6} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    writeln!(out, "{}", rule())
}

/// One indented line per value: label, count and share of the total.
fn write_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> io::Result<()> {
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let label_width = counts.iter().map(|(v, _)| v.width()).max().unwrap_or(0);
    let count_width = counts
        .iter()
        .map(|(_, n)| format_number(*n as f64, 0).len())
        .max()
        .unwrap_or(0);

    for (value, count) in counts {
        let pad = " ".repeat(label_width.saturating_sub(value.width()));
        writeln!(
            out,
            "  {value}{pad}  {:>count_width$}  ({:.1}%)",
            format_number(*count as f64, 0),
            percentage(*count as f64, total as f64, 1)
        )?;
    }
    Ok(())
}
