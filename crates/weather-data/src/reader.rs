//! CSV observation-file loading.
//!
//! Reads daily weather rows (`date,lowF,highF`) and converts them into
//! [`DayReading`] values for the report generators. Any malformed data row
//! aborts the whole load: a report must never silently omit days.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use weather_core::models::{DayReading, WeatherSeries};
use weather_core::{Result, WeatherError};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a weather observation file into a [`WeatherSeries`].
///
/// The first row is always treated as a header and discarded. Blank rows
/// are skipped without being counted as data.
pub fn load_series(path: &Path) -> Result<WeatherSeries> {
    let file = File::open(path).map_err(|source| WeatherError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let series = parse_series(file)?;
    debug!("Loaded {} readings from {}", series.len(), path.display());
    Ok(series)
}

/// Parse CSV observation rows from any reader into a [`WeatherSeries`].
///
/// Fields are whitespace-trimmed. Record arity is checked by hand (the
/// reader runs in flexible mode) so the error can name the offending row.
pub fn parse_series<R: Read>(input: R) -> Result<WeatherSeries> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut series = WeatherSeries::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        // Errors name the source line, not the record ordinal: the reader
        // drops blank lines without yielding a record.
        let row = record.position().map_or(idx + 2, |p| p.line() as usize);

        // A whitespace-only line trims down to one empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        if record.len() != 3 {
            return Err(WeatherError::MalformedRow {
                row,
                msg: format!("expected 3 fields, found {}", record.len()),
            });
        }

        let low_f = parse_temperature(&record[1], row)?;
        let high_f = parse_temperature(&record[2], row)?;

        series.push(DayReading {
            date: record[0].to_string(),
            low_f,
            high_f,
        });
    }

    Ok(series)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn parse_temperature(field: &str, row: usize) -> Result<i64> {
    field.parse::<i64>().map_err(|_| WeatherError::MalformedRow {
        row,
        msg: format!("invalid temperature {:?}", field),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
