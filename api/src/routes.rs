//! API route definitions

use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    response::Response,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, Span};

use crate::handlers;
use crate::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    // One span per request; "started" and "completed" events carry the timing
    let request_logging = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        })
        .on_request(|_request: &Request<Body>, _span: &Span| {
            info!("started");
        })
        .on_response(|response: &Response, latency: Duration, _span: &Span| {
            info!(
                status = response.status().as_u16(),
                latency_ms = latency.as_millis() as u64,
                "completed"
            );
        });

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Users
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/users/:id",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        // Layers
        .layer(request_logging)
        .with_state(state)
}
