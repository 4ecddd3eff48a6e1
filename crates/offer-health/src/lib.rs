pub mod config;
pub mod economics;
pub mod error;
pub mod telemetry;
