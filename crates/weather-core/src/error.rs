use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the weather report pipeline.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV stream itself was defective (bad UTF-8, I/O mid-read).
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A data row had the wrong number of fields or a non-numeric
    /// temperature. `row` is the 1-based line number in the source file,
    /// so the first data row of a clean file is row 2.
    #[error("Malformed row {row}: {msg}")]
    MalformedRow { row: usize, msg: String },

    /// A date string did not parse as an ISO-8601 calendar date.
    #[error("Invalid date format: {0}")]
    DateParse(String),

    /// An aggregate was requested over an empty series.
    #[error("{0} requires at least one value")]
    EmptyInput(&'static str),
}

/// Convenience alias used throughout the weather crates.
pub type Result<T> = std::result::Result<T, WeatherError>;
