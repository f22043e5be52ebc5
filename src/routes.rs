use axum::{extract::Request, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;

use crate::handlers::{health, networks};
use crate::services::NetworkService;

pub fn create_router(service: NetworkService) -> Router {
    let api_routes = Router::new()
        .route("/api/networks", get(networks::list).post(networks::create))
        .route(
            "/api/networks/{id}",
            get(networks::get_by_id).delete(networks::delete),
        );

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .merge(api_routes)
        .with_state(service)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    tracing::span!(
                        Level::INFO,
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(
                    |response: &axum::response::Response,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::event!(
                            Level::INFO,
                            status = %response.status(),
                            latency = ?latency,
                            "request completed"
                        );
                    },
                ),
        )
}
