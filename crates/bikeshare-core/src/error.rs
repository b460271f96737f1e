use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A city data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be read or deserialized.
    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column every city file must carry is absent from the header row.
    #[error("Missing column \"{column}\" in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A `Start Time` cell did not match any recognised format.
    #[error("Invalid timestamp \"{value}\" in {path} at row {row}")]
    TimestampParse {
        path: PathBuf,
        row: usize,
        value: String,
    },

    /// A city name is not one of the supported cities.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// A month name is neither `all` nor one of the covered months.
    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    /// A day name is neither `all` nor a day of the week.
    #[error("Unknown day: {0}")]
    UnknownDay(String),

    /// Standard input reached end-of-file while an answer was required.
    #[error("Input closed before a valid answer was given")]
    InputClosed,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;
