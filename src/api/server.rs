//! HTTP API Server
//!
//! Routes the checksum, hash and health endpoints with axum on tokio.
//!
//! ## Running the Server
//!
//! ```bash
//! # Start on the default address (127.0.0.1:8443)
//! checkhash serve
//!
//! # With custom bind address
//! checkhash serve --bind 0.0.0.0 --port 8080
//! ```

use crate::api::handlers::*;
use crate::config::ServerConfig;
use crate::error::{CheckHashError, Result};
use axum::http::header::{self, HeaderName, HeaderValue};
use axum::routing::get;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};

/// Headers attached to every response unless disabled
pub fn security_headers() -> Vec<(HeaderName, HeaderValue)> {
    vec![
        (
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        ),
        (
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'self'"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (header::REFERRER_POLICY, HeaderValue::from_static("no-referrer")),
        (
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
        ),
    ]
}

/// Build the application router
pub fn router(config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/checksum", get(handle_checksum))
        .route("/hash", get(handle_hash))
        .route("/health", get(handle_health));

    if !config.security_headers {
        return router;
    }

    security_headers()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(name, value))
        })
}

/// API HTTP Server
pub struct ApiServer {
    /// Configuration
    config: ServerConfig,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind and serve until Ctrl+C
    pub async fn run(&self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Bind and serve until `shutdown` completes
    pub async fn run_until<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| CheckHashError::io(format!("bind {}", addr), e))?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` completes
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener
            .local_addr()
            .map_err(|e| CheckHashError::io("local address", e))?;

        info!(address = %local_addr, "CheckHash server listening on http://{}", local_addr);
        if !self.config.security_headers {
            warn!("Security headers disabled");
        }

        axum::serve(listener, router(&self.config))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| CheckHashError::io("serve", e))?;

        info!("CheckHash server shutting down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
