//! Router assembly and server lifecycle.

use crate::config::Settings;
use crate::handlers::{
    app::health_check,
    invoices::{
        create_invoice, edit_invoice, index, list_invoices, preview_totals, update_invoice,
    },
    metrics::metrics,
};
use crate::services::InvoiceClient;
use crate::AppState;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route("/invoices/preview", post(preview_totals))
        .route("/invoices/:id/edit", get(edit_invoice))
        .route("/invoices/:id", post(update_invoice).put(update_invoice))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Outermost so the span above sees the generated request id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// A bound server ready to run.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the invoice client and bind the listener. Port 0 picks a free
    /// port.
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        let client = InvoiceClient::new(&settings.backend, &settings.server)
            .map_err(|e| AppError::ConfigError(e.into()))?;
        tracing::info!(endpoint = %client.endpoint(), "Invoice API client configured");

        let state = AppState::new(Arc::new(client), settings.ui.theme);

        let address = format!("{}:{}", settings.server.host, settings.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Starting invoice-frontend on port {}", self.port);
        axum::serve(self.listener, self.router).await
    }
}
