use chrono::NaiveDate;

use crate::error::{Result, WeatherError};

/// Render a temperature with the Celsius unit suffix.
///
/// Values print in their shortest form, so whole numbers carry no decimal
/// point.
///
/// # Examples
///
/// ```
/// use weather_core::formatting::format_temperature;
///
/// assert_eq!(format_temperature(0.0), "0°C");
/// assert_eq!(format_temperature(15.6), "15.6°C");
/// assert_eq!(format_temperature(-5.5), "-5.5°C");
/// ```
pub fn format_temperature(value: f64) -> String {
    format!("{}°C", value)
}

/// Convert an ISO-8601 calendar date into its long display form.
///
/// # Examples
///
/// ```
/// use weather_core::formatting::format_date;
///
/// assert_eq!(format_date("2021-07-06").unwrap(), "Tuesday 06 July 2021");
/// ```
pub fn format_date(iso: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map_err(|_| WeatherError::DateParse(iso.to_string()))?;
    Ok(date.format("%A %d %B %Y").to_string())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
