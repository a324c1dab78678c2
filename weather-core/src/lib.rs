//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - A plain-HTTP request executor behind the [`Executor`] trait
//! - Geocoding of a city name and queries for current temperature/wind speed
//! - Shared domain models and the human-readable report
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod forecast;
pub mod geocoding;
pub mod http;
pub mod model;
pub mod report;

pub use client::WeatherClient;
pub use config::{Config, Endpoints};
pub use error::ClientError;
pub use http::{Executor, HttpExecutor};
pub use model::{
    Location, TemperatureUnit, UnitPreference, WeatherReading, WeatherReport, WindSpeedUnit,
};
pub use report::format_report;
