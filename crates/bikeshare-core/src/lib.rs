//! Domain types shared by every bikeshare crate.
//!
//! Cities and their data-file registry, the month/day selection model,
//! command-line settings, the error type, and display formatting helpers.

pub mod cities;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
