//! Core domain logic for the weather report pipeline.
//!
//! Pure, stateless building blocks shared by the loading and presentation
//! layers: value models, unit and date conversions, aggregate statistics
//! and report-string assembly.

pub mod calculations;
pub mod error;
pub mod formatting;
pub mod models;
pub mod report;

pub use error::{Result, WeatherError};
