use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, middleware};
use http::StatusCode;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use crate::core::ServerState;

/// HTTP access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::menu_items::router())
        .merge(crate::api::customers::router())
}

/// Build the complete application: routes, state and tower middleware
pub fn build_router(state: ServerState) -> Router {
    crate::api::health::mark_started();
    let timeout = state.config.request_timeout();
    with_middleware(build_app().with_state(state), timeout)
}

/// Wrap a router with the tower middleware stack
///
/// Requests exceeding `timeout` are answered with 408.
fn with_middleware(router: Router, timeout: Duration) -> Router {
    router
        // Tower HTTP middleware
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP access log middleware
        .layer(middleware::from_fn(log_request))
}

#[derive(Clone, Debug)]
pub struct HttpService {
    state: ServerState,
    router: Router,
}

impl HttpService {
    pub fn new(state: ServerState) -> Self {
        let router = build_router(state.clone());
        Self { state, router }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `addr` until `shutdown_signal` resolves
    pub async fn start_server<F>(&self, addr: SocketAddr, shutdown_signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle: axum_server::Handle<SocketAddr> = axum_server::Handle::new();

        // Handle shutdown signal
        let handle_clone = handle.clone();
        let grace = self.state.config.shutdown_timeout();
        tokio::spawn(async move {
            shutdown_signal.await;
            handle_clone.graceful_shutdown(Some(grace));
        });

        self.serve(addr, handle).await
    }

    /// Serve on `addr` under an externally owned handle
    ///
    /// `handle.listening()` resolves to the bound address, which makes port 0 usable.
    pub async fn serve(
        &self,
        addr: SocketAddr,
        handle: axum_server::Handle<SocketAddr>,
    ) -> std::io::Result<()> {
        tracing::info!("Starting HTTP server on {}", addr);

        axum_server::bind(addr)
            .handle(handle)
            .serve(self.router.clone().into_make_service())
            .await
    }
}
