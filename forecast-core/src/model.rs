use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::TemperatureClass;

/// Latitude/longitude exactly as the caller sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinate {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Result of a points lookup. Only `forecast` drives the request flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointInfo {
    pub forecast: String,
    pub forecast_hourly: Option<String>,
    pub office: Option<String>,
    pub cwa: Option<String>,
    pub grid_x: Option<i64>,
    pub grid_y: Option<i64>,
}

/// One time bucket of an NWS forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastPeriod {
    pub number: Option<u32>,
    pub name: String,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub temperature: i64,
    pub short_forecast: String,
    pub detailed_forecast: String,
}

/// Payload returned to callers of `/forecast/{lat}/{long}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResult {
    #[serde(rename = "Temperature")]
    pub temperature: TemperatureClass,
    #[serde(rename = "Summary")]
    pub summary: String,
}

impl From<&ForecastPeriod> for ForecastResult {
    fn from(period: &ForecastPeriod) -> Self {
        Self {
            temperature: TemperatureClass::from_temperature(period.temperature),
            summary: period.short_forecast.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(temperature: i64, summary: &str) -> ForecastPeriod {
        ForecastPeriod {
            number: Some(1),
            name: "Tonight".into(),
            start_time: None,
            end_time: None,
            temperature,
            short_forecast: summary.into(),
            detailed_forecast: String::new(),
        }
    }

    #[test]
    fn coordinate_display_joins_with_comma() {
        let c = Coordinate::new("33.5139", "-81.957");
        assert_eq!(c.to_string(), "33.5139,-81.957");
    }

    #[test]
    fn coordinate_is_not_validated() {
        let c = Coordinate::new("north", "");
        assert_eq!(c.to_string(), "north,");
    }

    #[test]
    fn result_from_period_classifies_temperature() {
        let result = ForecastResult::from(&period(75, "Sunny"));

        assert_eq!(result.temperature, TemperatureClass::Moderate);
        assert_eq!(result.summary, "Sunny");
    }

    #[test]
    fn result_serializes_with_capitalized_fields() {
        let result = ForecastResult::from(&period(95, "Clear"));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json, serde_json::json!({"Temperature": "hot", "Summary": "Clear"}));
    }
}
