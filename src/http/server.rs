//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router for the relay route
//! - Compose the CORS middleware when the policy asks for it
//! - Wire up middleware (request ID, tracing)
//! - Serve on a listener until shutdown

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::{any, on, MethodFilter},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{CorsPolicy, RelayConfig, RELAY_PATH};
use crate::http::middleware::cors_middleware;
use crate::http::relay::{reject_method, relay_handler, RelayState};
use crate::http::request::{MakeRelayRequestId, RequestIdExt};
use crate::lifecycle::ShutdownSignal;
use crate::upstream::{HttpFetcher, UpstreamFetcher};

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a server that fetches from the configured upstream.
    pub fn new(config: RelayConfig) -> Self {
        let fetcher = Arc::new(HttpFetcher::new(config.upstream.url.clone()));
        Self::with_fetcher(config, fetcher)
    }

    /// Create a server around an existing fetcher.
    pub fn with_fetcher(config: RelayConfig, fetcher: Arc<dyn UpstreamFetcher>) -> Self {
        let router = build_router(config.cors.policy, RelayState::new(fetcher));
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener until a
    /// shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            path = RELAY_PATH,
            cors = ?self.config.cors.policy,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// The assembled router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the relay router.
///
/// With [`CorsPolicy::Disabled`] only `GET` reaches the handler; every other
/// method, `HEAD` included, falls through to [`reject_method`]. With [`CorsPolicy::Permissive`] every method reaches
/// the CORS middleware, which decides before the handler runs.
pub fn build_router(policy: CorsPolicy, state: RelayState) -> Router {
    let relay = match policy {
        // `head` is explicit: axum otherwise answers HEAD from the GET handler.
        CorsPolicy::Disabled => on(MethodFilter::GET, relay_handler)
            .head(reject_method)
            .fallback(reject_method),
        CorsPolicy::Permissive => any(relay_handler).layer(middleware::from_fn(cors_middleware)),
    };

    Router::new()
        .route(RELAY_PATH, relay)
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request.request_id(),
            )
        }))
        .layer(SetRequestIdLayer::x_request_id(MakeRelayRequestId))
}
