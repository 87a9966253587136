//! HTTP API
//!
//! - [`health`] - liveness and database check
//! - [`kitchen_orders`] - order orchestration endpoints under `/orders`
//! - [`menu`] - menu catalog endpoints under `/menu`
//! - [`middleware`] - request logging
//! - [`extract`] - extractors that reject with the error envelope

pub mod extract;
pub mod health;
pub mod kitchen_orders;
pub mod menu;
pub mod middleware;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator (uuid v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// All routes, no middleware, no state
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(kitchen_orders::router())
        .merge(menu::router())
}

/// Fully configured application with middleware and state applied
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // ========== Tower HTTP Middleware ==========
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // Request logging sees the request id set below
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // ========== Request ID ==========
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .with_state(state)
}
