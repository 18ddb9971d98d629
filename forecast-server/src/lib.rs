//! HTTP surface of the forecast proxy.
//!
//! Exposes `GET /forecast/{lat}/{long}`, backed by a [`forecast_core::ForecastProvider`].

pub mod routes;
pub mod startup;

pub use startup::{App, AppState, router};
