use anyhow::{Context, Result};
use axum::{Router, routing::get};
use forecast_core::{Config, ForecastProvider, provider_from_config};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::routes;

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: Arc<dyn ForecastProvider>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/forecast/{lat}/{long}", get(routes::get_forecast))
        .with_state(state)
}

/// A bound, ready-to-serve forecast server.
pub struct App {
    listener: TcpListener,
    router: Router,
    port: u16,
}

impl App {
    pub async fn build(config: &Config) -> Result<Self> {
        let provider = provider_from_config(config).context("Failed to create NWS provider")?;
        Self::with_provider(Arc::from(provider), &config.bind_address).await
    }

    pub async fn with_provider(
        provider: Arc<dyn ForecastProvider>,
        bind_address: &str,
    ) -> Result<Self> {
        let listener = TcpListener::bind(bind_address)
            .await
            .with_context(|| format!("Failed to bind {bind_address}"))?;
        let port = listener
            .local_addr()
            .context("Failed to read bound address")?
            .port();

        Ok(Self {
            listener,
            router: router(AppState { provider }),
            port,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        info!(port = self.port, "forecast server listening");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!("forecast server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
