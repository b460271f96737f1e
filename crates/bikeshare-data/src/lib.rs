//! Data layer for the bikeshare explorer.
//!
//! Reads per-city trip CSVs into an in-memory [`dataset::Dataset`], filters
//! them by month and day, and computes the aggregate statistics reported
//! after every load.

pub mod aggregator;
pub mod analysis;
pub mod dataset;
pub mod reader;

pub use bikeshare_core as core;
