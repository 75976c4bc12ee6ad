pub mod config;
pub mod deliveries;
pub mod error;
pub mod geocoding;
pub mod telemetry;
