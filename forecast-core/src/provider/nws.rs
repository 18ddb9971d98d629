use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    Config,
    error::{ForecastError, truncate_body},
    model::{Coordinate, EndpointInfo, ForecastPeriod, ForecastResult},
};

use super::ForecastProvider;

/// Client for the National Weather Service API (api.weather.gov).
#[derive(Debug, Clone)]
pub struct NwsProvider {
    base_url: String,
    http: Client,
}

impl NwsProvider {
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ForecastError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/geo+json"));

        let mut builder = Client::builder().user_agent(user_agent).default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(ForecastError::Client)?;
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { base_url, http })
    }

    pub fn from_config(config: &Config) -> Result<Self, ForecastError> {
        Self::new(
            config.points_base_url.as_str(),
            &config.user_agent,
            config.request_timeout(),
        )
    }

    pub fn points_url(&self, coordinate: &Coordinate) -> String {
        format!("{}/points/{}", self.base_url, coordinate)
    }

    /// Look up the forecast endpoint (and office metadata) for a coordinate.
    pub async fn resolve_endpoint(
        &self,
        coordinate: &Coordinate,
    ) -> Result<EndpointInfo, ForecastError> {
        let url = self.points_url(coordinate);
        let parsed: NwsPointsResponse = self.get_json(&url).await?;
        let props = parsed.properties;

        Ok(EndpointInfo {
            forecast: props.forecast,
            forecast_hourly: props.forecast_hourly,
            office: props.forecast_office,
            cwa: props.cwa,
            grid_x: props.grid_x,
            grid_y: props.grid_y,
        })
    }

    /// Fetch a forecast and return its first (current) period.
    pub async fn fetch_first_period(&self, url: &str) -> Result<ForecastPeriod, ForecastError> {
        let parsed: NwsForecastResponse = self.get_json(url).await?;
        debug!(url, updated = ?parsed.properties.updated, "fetched forecast");

        let period = parsed.properties.periods.into_iter().next().ok_or_else(|| {
            warn!(url, "forecast response contained no periods");
            ForecastError::NoForecastAvailable { url: url.to_string() }
        })?;

        Ok(ForecastPeriod {
            number: period.number,
            name: period.name,
            start_time: period.start_time,
            end_time: period.end_time,
            temperature: period.temperature,
            short_forecast: period.short_forecast,
            detailed_forecast: period.detailed_forecast,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ForecastError> {
        debug!(url, "sending NWS request");

        let res = self.http.get(url).send().await.inspect_err(|e| {
            warn!(url, error = %e, "NWS request failed");
        })?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(url, %status, "NWS returned an error status");
            return Err(ForecastError::Status {
                url: url.to_string(),
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| {
            warn!(url, error = %source, "failed to decode NWS response");
            ForecastError::Decode { url: url.to_string(), source }
        })
    }
}

#[derive(Debug, Deserialize)]
struct NwsPointsResponse {
    properties: NwsPointsProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NwsPointsProperties {
    forecast: String,
    forecast_hourly: Option<String>,
    forecast_office: Option<String>,
    cwa: Option<String>,
    grid_x: Option<i64>,
    grid_y: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct NwsForecastResponse {
    properties: NwsForecastProperties,
}

#[derive(Debug, Deserialize)]
struct NwsForecastProperties {
    updated: Option<String>,
    periods: Vec<NwsPeriod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NwsPeriod {
    number: Option<u32>,
    #[serde(default)]
    name: String,
    start_time: Option<DateTime<FixedOffset>>,
    end_time: Option<DateTime<FixedOffset>>,
    temperature: i64,
    short_forecast: String,
    #[serde(default)]
    detailed_forecast: String,
}

#[async_trait]
impl ForecastProvider for NwsProvider {
    async fn forecast(&self, coordinate: &Coordinate) -> Result<ForecastResult, ForecastError> {
        let endpoint = self.resolve_endpoint(coordinate).await?;
        debug!(
            forecast = %endpoint.forecast,
            office = ?endpoint.office,
            grid_x = ?endpoint.grid_x,
            grid_y = ?endpoint.grid_y,
            "resolved forecast endpoint"
        );

        let period = self.fetch_first_period(&endpoint.forecast).await?;
        Ok(ForecastResult::from(&period))
    }
}
