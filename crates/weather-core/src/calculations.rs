use crate::error::{Result, WeatherError};
use crate::models::Extremum;

/// Round a value to one decimal place.
///
/// Uses `f64::round`, so exact halves go away from zero.
///
/// # Examples
///
/// ```
/// use weather_core::calculations::round_to_tenth;
///
/// assert_eq!(round_to_tenth(1.25), 1.3);
/// assert_eq!(round_to_tenth(-1.25), -1.3);
/// assert_eq!(round_to_tenth(7.0), 7.0);
/// ```
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert a Fahrenheit temperature to Celsius, rounded to one decimal place.
///
/// # Examples
///
/// ```
/// use weather_core::calculations::fahrenheit_to_celsius;
///
/// assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
/// assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
/// assert_eq!(fahrenheit_to_celsius(35.0), 1.7);
/// ```
pub fn fahrenheit_to_celsius(value: f64) -> f64 {
    round_to_tenth((value - 32.0) * 5.0 / 9.0)
}

/// Arithmetic mean of a sequence, unrounded. Callers decide display
/// precision.
///
/// Fails with [`WeatherError::EmptyInput`] on an empty slice so that
/// division by zero can never silently produce NaN.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(WeatherError::EmptyInput("mean"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Locate the minimum of a sequence.
///
/// Scans left to right keeping every value `<=` the running minimum, so on
/// exact ties the later occurrence wins. The reported value is rounded to
/// one decimal place. Returns `None` for an empty slice.
pub fn find_min(values: &[f64]) -> Option<Extremum> {
    if values.is_empty() {
        return None;
    }

    let mut min_index = 0;
    let mut min_value = f64::INFINITY;
    for (index, &value) in values.iter().enumerate() {
        if value <= min_value {
            min_index = index;
            min_value = value;
        }
    }

    Some(Extremum {
        value: round_to_tenth(min_value),
        index: min_index,
    })
}

/// Locate the maximum of a sequence.
///
/// Mirror image of [`find_min`]: scans with `>=` from negative infinity, so
/// ties also resolve to the later index.
pub fn find_max(values: &[f64]) -> Option<Extremum> {
    if values.is_empty() {
        return None;
    }

    let mut max_index = 0;
    let mut max_value = f64::NEG_INFINITY;
    for (index, &value) in values.iter().enumerate() {
        if value >= max_value {
            max_index = index;
            max_value = value;
        }
    }

    Some(Extremum {
        value: round_to_tenth(max_value),
        index: max_index,
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
