//! Data ingestion layer for the weather report pipeline.
//!
//! Reads daily observation rows from CSV files on disk and converts them
//! into the typed series consumed by the report generators.

pub mod reader;

pub use weather_core as core;
