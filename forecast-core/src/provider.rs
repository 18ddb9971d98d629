use crate::{Config, Coordinate, ForecastError, ForecastResult, provider::nws::NwsProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod nws;

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn forecast(&self, coordinate: &Coordinate) -> Result<ForecastResult, ForecastError>;
}

/// Construct the forecast provider described by `config`.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn ForecastProvider>, ForecastError> {
    let provider = NwsProvider::from_config(config)?;
    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_default_config_builds() {
        let provider = provider_from_config(&Config::default());
        assert!(provider.is_ok());
    }

    #[test]
    fn provider_from_config_with_timeout_builds() {
        let cfg = Config {
            request_timeout_secs: Some(1),
            ..Config::default()
        };
        assert!(provider_from_config(&cfg).is_ok());
    }
}
