//! HTTP server: binding, routing and graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{MatchedPath, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::error::ServerError;
use crate::observability::metrics;

use super::handlers;
use super::state::AppState;

/// Largest accepted request body (contact form and key presses).
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// A running site server.
#[derive(Debug)]
pub struct SiteServer {
    addr: SocketAddr,
    cancel: CancellationToken,
    handle: JoinHandle<Result<(), ServerError>>,
}

impl SiteServer {
    /// Binds `bind_addr` and starts serving in the background.
    ///
    /// Returns once the listener is bound, so the returned address is
    /// usable immediately (also when binding port 0). The server stops
    /// when `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidAddress`] for a malformed address and
    /// [`ServerError::Bind`] if the listener cannot bind.
    pub async fn bind(
        bind_addr: &str,
        state: Arc<AppState>,
        cancel: CancellationToken,
    ) -> Result<Self, ServerError> {
        let addr = parse_bind_addr(bind_addr)?;
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind(format!("{addr}: {e}")))?;
        let addr = listener
            .local_addr()
            .map_err(|e| ServerError::Bind(format!("local_addr failed: {e}")))?;

        let router = build_router(state);
        let server_cancel = cancel.clone();
        let handle = tokio::spawn(async move {
            info!(%addr, "HTTP server listening");
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    server_cancel.cancelled().await;
                })
                .await?;
            debug!("HTTP server shut down");
            Ok(())
        });

        Ok(Self {
            addr,
            cancel,
            handle,
        })
    }

    /// The address actually bound.
    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Asks the server to stop accepting connections.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Waits until the server has shut down.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Io`] if serving failed.
    pub async fn wait(self) -> Result<(), ServerError> {
        join_result(self.handle.await)
    }

    /// Serves until the cancel token fires or the server stops by itself,
    /// whichever comes first, then waits for shutdown to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Io`] if serving failed.
    pub async fn run(mut self) -> Result<(), ServerError> {
        let cancel = self.cancel.clone();
        tokio::select! {
            () = cancel.cancelled() => {}
            joined = &mut self.handle => {
                let result = join_result(joined);
                if let Err(e) = &result {
                    error!(error = %e, "HTTP server stopped unexpectedly");
                } else {
                    warn!("HTTP server stopped before shutdown was requested");
                }
                return result;
            }
        }
        info!("shutting down");
        self.wait().await
    }
}

fn join_result(
    joined: Result<Result<(), ServerError>, tokio::task::JoinError>,
) -> Result<(), ServerError> {
    joined.map_err(|e| ServerError::Io(std::io::Error::other(e.to_string())))?
}

// ============================================================================
// Axum Router
// ============================================================================

/// Builds the router for every site route.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/dashboard", get(handlers::dashboard))
        .route("/chapters", get(handlers::chapters))
        .route("/chapter/{chapter_id}", get(handlers::chapter))
        .route(
            "/contact",
            get(handlers::contact_form).post(handlers::contact_submit),
        )
        .route("/resources", get(handlers::resources))
        .route("/team", get(handlers::team))
        .route("/preview", get(handlers::preview))
        .route("/prezi/", get(handlers::prezi))
        .route("/prezi/slides.json", get(handlers::prezi_slides))
        .route("/prezi/stream", get(handlers::prezi_stream))
        .route("/prezi/key", post(handlers::prezi_key))
        .route("/docs/{*file}", get(handlers::docs))
        .route("/healthz", get(handlers::healthz))
        .route_layer(middleware::from_fn(track_page_view))
        .fallback(handlers::not_found)
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Counts a page view under the matched route template.
async fn track_page_view(request: Request, next: Next) -> Response {
    if let Some(route) = request.extensions().get::<MatchedPath>() {
        metrics::record_page_view(route.as_str());
    }
    next.run(request).await
}

// ============================================================================
// Helpers
// ============================================================================

/// Parses a bind address into a full `host:port` form.
///
/// Accepts:
/// - `:8080` → `0.0.0.0:8080`
/// - `8080` → `0.0.0.0:8080`
/// - `1.2.3.4:8080` → as-is
///
/// # Errors
///
/// Returns [`ServerError::InvalidAddress`] if the result is not a valid
/// socket address.
pub fn parse_bind_addr(input: &str) -> Result<String, ServerError> {
    let addr = if input.starts_with(':') {
        format!("0.0.0.0{input}")
    } else if input.parse::<u16>().is_ok() {
        format!("0.0.0.0:{input}")
    } else {
        input.to_string()
    };
    addr.parse::<SocketAddr>()
        .map_err(|e| ServerError::InvalidAddress {
            input: input.to_string(),
            message: e.to_string(),
        })?;
    Ok(addr)
}

// ============================================================================
// Tests
// ============================================================================
