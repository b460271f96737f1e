//! Runtime layer for the bikeshare explorer.
//!
//! Ties the prompts, loader, reporters and row browser into the restartable
//! interactive session.

pub mod session;

pub use bikeshare_core as core;
pub use bikeshare_data as data;
