mod bootstrap;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use weather_core::report::{generate_daily_summary, generate_summary};
use weather_data::reader::load_series;

/// Render summary reports from a CSV of daily weather observations
#[derive(Parser, Debug)]
#[command(
    name = "weather-report",
    about = "Render summary reports from a CSV of daily weather observations",
    version
)]
struct Cli {
    /// Path to the CSV observation file
    csv_file: PathBuf,

    /// Report to render
    #[arg(long, default_value = "summary", value_parser = ["summary", "daily", "both"])]
    view: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    bootstrap::setup_logging(&cli.log_level)?;

    tracing::info!("Weather Report v{} starting", env!("CARGO_PKG_VERSION"));

    let series = load_series(&cli.csv_file)?;
    tracing::info!(
        "{} readings loaded from {}",
        series.len(),
        cli.csv_file.display()
    );

    // The report strings carry their own trailing newlines.
    match cli.view.as_str() {
        "summary" => print!("{}", generate_summary(&series)?),
        "daily" => print!("{}", generate_daily_summary(&series)?),
        "both" => {
            print!("{}", generate_summary(&series)?);
            print!("{}", generate_daily_summary(&series)?);
        }
        unknown => {
            eprintln!("Unknown view mode: {}", unknown);
        }
    }

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── test_cli_default_values ───────────────────────────────────────────────

    #[test]
    fn test_cli_default_values() {
        // Parse with only the file argument to get all defaults.
        let cli = Cli::parse_from(["weather-report", "observations.csv"]);

        assert_eq!(cli.csv_file, PathBuf::from("observations.csv"));
        assert_eq!(cli.view, "summary");
        assert_eq!(cli.log_level, "INFO");
    }

    // ── test_cli_explicit_flags ───────────────────────────────────────────────

    #[test]
    fn test_cli_explicit_view() {
        let cli = Cli::parse_from(["weather-report", "observations.csv", "--view", "daily"]);
        assert_eq!(cli.view, "daily");
    }

    #[test]
    fn test_cli_view_both() {
        let cli = Cli::parse_from(["weather-report", "observations.csv", "--view", "both"]);
        assert_eq!(cli.view, "both");
    }

    #[test]
    fn test_cli_explicit_log_level() {
        let cli = Cli::parse_from(["weather-report", "observations.csv", "--log-level", "DEBUG"]);
        assert_eq!(cli.log_level, "DEBUG");
    }

    // ── test_cli_rejections ───────────────────────────────────────────────────

    #[test]
    fn test_cli_rejects_unknown_view() {
        let parsed =
            Cli::try_parse_from(["weather-report", "observations.csv", "--view", "hourly"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_log_level() {
        let parsed =
            Cli::try_parse_from(["weather-report", "observations.csv", "--log-level", "TRACE"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_cli_requires_csv_file() {
        let parsed = Cli::try_parse_from(["weather-report"]);
        assert!(parsed.is_err());
    }
}
