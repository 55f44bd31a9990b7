pub mod certification;
pub mod config;
pub mod error;
pub mod telemetry;
