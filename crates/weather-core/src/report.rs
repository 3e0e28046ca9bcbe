//! Report-string assembly for the two output formats.

use crate::calculations::{fahrenheit_to_celsius, find_max, find_min, mean, round_to_tenth};
use crate::error::{Result, WeatherError};
use crate::formatting::{format_date, format_temperature};
use crate::models::DayReading;

/// Render the period overview: day count, overall lowest and highest
/// temperature with the day each occurs on, and the average low and high.
///
/// The output is six newline-joined lines, the last one blank. Fails with
/// [`WeatherError::EmptyInput`] on an empty series and propagates date
/// parse failures from the source data.
pub fn generate_summary(series: &[DayReading]) -> Result<String> {
    // Convert once up front; the extremum indices refer into these
    // converted sequences.
    let dates = series
        .iter()
        .map(|day| format_date(&day.date))
        .collect::<Result<Vec<_>>>()?;
    let lows: Vec<f64> = series
        .iter()
        .map(|day| fahrenheit_to_celsius(day.low_f as f64))
        .collect();
    let highs: Vec<f64> = series
        .iter()
        .map(|day| fahrenheit_to_celsius(day.high_f as f64))
        .collect();

    let lowest = find_min(&lows).ok_or(WeatherError::EmptyInput("summary"))?;
    let highest = find_max(&highs).ok_or(WeatherError::EmptyInput("summary"))?;

    let mean_low = round_to_tenth(mean(&lows)?);
    let mean_high = round_to_tenth(mean(&highs)?);

    let lines = [
        format!("{} Day Overview", series.len()),
        format!(
            "  The lowest temperature will be {}, and will occur on {}.",
            format_temperature(lowest.value),
            dates[lowest.index]
        ),
        format!(
            "  The highest temperature will be {}, and will occur on {}.",
            format_temperature(highest.value),
            dates[highest.index]
        ),
        format!(
            "  The average low this week is {}.",
            format_temperature(mean_low)
        ),
        format!(
            "  The average high this week is {}.",
            format_temperature(mean_high)
        ),
        String::new(),
    ];

    Ok(lines.join("\n"))
}

/// Render one 4-line block per reading, in series order, followed by a
/// closing blank line (so the full report ends with two blank lines).
///
/// An empty series renders as the empty string.
pub fn generate_daily_summary(series: &[DayReading]) -> Result<String> {
    let mut lines = Vec::with_capacity(series.len() * 4 + 1);

    for day in series {
        lines.push(format!("---- {} ----", format_date(&day.date)?));
        lines.push(format!(
            "  Minimum Temperature: {}",
            format_temperature(fahrenheit_to_celsius(day.low_f as f64))
        ));
        lines.push(format!(
            "  Maximum Temperature: {}",
            format_temperature(fahrenheit_to_celsius(day.high_f as f64))
        ));
        lines.push(String::new());
    }

    lines.push(String::new());

    Ok(lines.join("\n"))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
