//! Core library for the forecast proxy.
//!
//! This crate defines:
//! - Configuration handling
//! - The National Weather Service client (point lookup + forecast fetch)
//! - Temperature classification
//! - Shared domain models and the error type
//!
//! It is used by `forecast-server`, but can also be reused by other binaries or services.

pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use classify::{TemperatureClass, classify_temperature};
pub use config::Config;
pub use error::ForecastError;
pub use model::{Coordinate, EndpointInfo, ForecastPeriod, ForecastResult};
pub use provider::{ForecastProvider, nws::NwsProvider, provider_from_config};
