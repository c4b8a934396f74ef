use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::interface_adapters::handlers::{
    method_not_allowed, nearby_search, preflight, pricing_lookup, token_exchange,
};
use crate::interface_adapters::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    // Browser clients call the proxy directly, so allow any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Wire the HTTP routes to their handlers. The per-route fallback keeps
    // wrong-method responses on the JSON envelope instead of an empty 405.
    Router::new()
        .route(
            "/api/auth",
            post(token_exchange)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/listings",
            get(nearby_search)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/pricing",
            get(pricing_lookup)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(cors)
        .with_state(state)
}
