use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::ProxyError;
use crate::interface_adapters::protocol::{
    ErrorResponse, NearbyQuery, PricingQuery, TokenResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::nearby_search::NearbySearchUseCase;
use crate::use_cases::pricing::PricingUseCase;
use crate::use_cases::token_exchange::TokenExchangeUseCase;

// Handler for the credential-for-token exchange.
#[tracing::instrument(name = "token_exchange", skip_all)]
pub async fn token_exchange(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TokenResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = TokenExchangeUseCase {
        provider: state.lodging.clone(),
    };

    let token = use_case
        .execute()
        .await
        .map_err(|err| map_proxy_error(err, ErrorContext::TokenExchange))?;

    Ok(Json(TokenResponse {
        access_token: token.access_token,
        expires_in: token.expires_in,
    }))
}

// Handler for the nearby listings search.
#[tracing::instrument(name = "nearby_search", skip_all)]
pub async fn nearby_search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearbyQuery>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let use_case = NearbySearchUseCase {
        provider: state.lodging.clone(),
    };

    let body = use_case
        .execute(query)
        .await
        .map_err(|err| map_proxy_error(err, ErrorContext::NearbySearch))?;

    Ok(passthrough(body))
}

// Handler for the listing pricing lookup.
#[tracing::instrument(name = "pricing_lookup", skip_all)]
pub async fn pricing_lookup(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PricingQuery>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let use_case = PricingUseCase {
        provider: state.lodging.clone(),
    };

    let body = use_case
        .execute(query)
        .await
        .map_err(|err| map_proxy_error(err, ErrorContext::Pricing))?;

    Ok(passthrough(body))
}

// Handler for plain OPTIONS requests; real preflights are answered by the
// CORS layer before they reach the router.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

// Known routes hit with the wrong method get the JSON envelope instead of
// axum's default empty 405.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None)
}

// Upstream bodies are forwarded as raw bytes so the passthrough stays
// byte-for-byte; re-serializing could reorder keys.
fn passthrough(body: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

// Which endpoint produced the error, for the summary string.
enum ErrorContext {
    TokenExchange,
    NearbySearch,
    Pricing,
}

impl ErrorContext {
    fn upstream_summary(&self) -> &'static str {
        match self {
            ErrorContext::TokenExchange => "Failed to authenticate",
            ErrorContext::NearbySearch => "Failed to fetch listings",
            ErrorContext::Pricing => "Failed to fetch pricing",
        }
    }
}

// Maps use-case errors to HTTP responses. Auth and upstream failures both
// surface as 500: the caller cannot remediate either.
fn map_proxy_error(
    err: ProxyError,
    context: ErrorContext,
) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ProxyError::MissingParameters(message) => {
            tracing::warn!(%message, "rejected request with missing parameters");
            error_response(StatusCode::BAD_REQUEST, message, None)
        }
        ProxyError::AuthFailed(message) => {
            tracing::error!(detail = ?message, "token exchange failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to authenticate",
                message,
            )
        }
        ProxyError::UpstreamFailed(message) => {
            tracing::error!(detail = ?message, "upstream call failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                context.upstream_summary(),
                message,
            )
        }
    }
}

// Helper to build a JSON error response.
fn error_response(
    status: StatusCode,
    error: &str,
    message: Option<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
        }),
    )
}
