use std::net::SocketAddr;
use std::sync::Arc;

use crate::domain::Credentials;
use crate::interface_adapters::clients::BoomClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;

// Production base of the lodging API; override with BOOM_API_URL.
const DEFAULT_API_URL: &str = "https://app.boomnow.com";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    // Credentials are read once at startup and injected into the client;
    // they are never logged and never echoed in responses.
    let client_id = match std::env::var("BOOM_CLIENT_ID") {
        Ok(value) => value,
        Err(_) => {
            tracing::error!("BOOM_CLIENT_ID must be set");
            return;
        }
    };
    let client_secret = match std::env::var("BOOM_CLIENT_SECRET") {
        Ok(value) => value,
        Err(_) => {
            tracing::error!("BOOM_CLIENT_SECRET must be set");
            return;
        }
    };
    if client_id.is_empty() || client_secret.is_empty() {
        tracing::error!("lodging API credentials must not be empty");
        return;
    }

    let base_url = std::env::var("BOOM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
    tracing::debug!(base_url = %base_url, "lodging client configured.");

    let lodging = Arc::new(BoomClient::new(
        base_url,
        Credentials {
            client_id,
            client_secret,
        },
    ));
    let state = Arc::new(AppState { lodging });

    // Start the web server with the HTTP routes wired up.
    let app = routes::app(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    // Bind TCP listener with error handling.
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };
    tracing::info!(%addr, "listening");

    // Serve app and report errors rather than panicking.
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
    }
}
