//! Neighborhood resolution and venue ingestion for the MyLocalGuide directory.

pub mod config;
pub mod error;
pub mod ingest;
pub mod neighborhoods;
pub mod telemetry;
