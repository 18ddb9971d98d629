use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use forecast_core::{Coordinate, ForecastError, ForecastResult};
use serde::Serialize;
use tracing::{Instrument, error, info, info_span};

use crate::startup::AppState;

/// GET /forecast/{lat}/{long}
pub async fn get_forecast(
    State(state): State<AppState>,
    Path((lat, long)): Path<(String, String)>,
) -> Result<Json<ForecastResult>, ApiError> {
    let coordinate = Coordinate::new(lat, long);
    let span = info_span!("forecast", coordinate = %coordinate);

    async move {
        let result = state.provider.forecast(&coordinate).await?;
        info!(temperature = %result.temperature, summary = %result.summary, "forecast served");
        Ok::<_, ApiError>(Json(result))
    }
    .instrument(span)
    .await
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Any lookup failure is reported as a 500 carrying the error message.
#[derive(Debug)]
pub struct ApiError(ForecastError);

impl From<ForecastError> for ApiError {
    fn from(err: ForecastError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "forecast lookup failed");

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_is_internal_server_error() {
        let err = ApiError::from(ForecastError::NoForecastAvailable {
            url: "https://x/y".into(),
        });

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
