use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::LodgingError;

// Client credentials for the lodging API token exchange.
// No Debug derive on purpose so the secret cannot leak into logs.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

// Bearer token returned by the lodging API token endpoint.
// The expiry is informational only; the proxy never caches the token.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
}

// Validated nearby-search request with defaults already applied.
// Coordinate values are forwarded as received; range checks belong upstream.
#[derive(Clone, Debug)]
pub struct NearbySearch {
    pub lat: String,
    pub lng: String,
    pub rad: String,
    pub adults: Option<String>,
    pub children: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

// Validated pricing request for a single listing and date range.
#[derive(Clone, Debug)]
pub struct PricingRequest {
    pub listing_id: String,
    pub check_in: String,
    pub check_out: String,
    pub adults: String,
    pub children: Option<String>,
}

// The handlers and use cases depend on this trait, not the concrete client.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait LodgingProvider: Send + Sync {
    async fn exchange_token(&self) -> Result<AccessToken, LodgingError>;

    async fn search_nearby(
        &self,
        token: &str,
        search: &NearbySearch,
    ) -> Result<Vec<u8>, LodgingError>;

    async fn listing_pricing(
        &self,
        token: &str,
        request: &PricingRequest,
    ) -> Result<Vec<u8>, LodgingError>;
}
