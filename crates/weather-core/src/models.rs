/// One day's observed temperatures, read from a single CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReading {
    /// ISO-8601 calendar date (`YYYY-MM-DD`) exactly as it appeared in the
    /// source. Parsed and validated only when rendered.
    pub date: String,
    /// Overnight low in degrees Fahrenheit.
    pub low_f: i64,
    /// Daytime high in degrees Fahrenheit.
    pub high_f: i64,
}

/// Ordered collection of readings. Row order is preserved from the source
/// file: extremum results refer back into it by index.
pub type WeatherSeries = Vec<DayReading>;

/// Location of an extreme value within a scanned sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    /// The extreme value, rounded to one decimal place.
    pub value: f64,
    /// Index of the winning occurrence within the sequence that was scanned.
    pub index: usize,
}
