//! Console layer for the bikeshare explorer.
//!
//! Prompts for the city/month/day selection, renders the statistics
//! reports, and pages through raw trip rows.

pub mod console;
pub mod prompts;
pub mod reports;
pub mod table_view;

pub use bikeshare_core as core;
