use serde::{Deserialize, Serialize};

// Inbound query string for the nearby listings search.
// Everything is optional at this layer; the use case decides what is required.
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub adults: Option<String>,
    pub children: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

// Inbound query string for the listing pricing lookup.
#[derive(Debug, Deserialize)]
pub struct PricingQuery {
    pub listing_id: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub adults: Option<String>,
    pub children: Option<String>,
}

// Response payload for the token exchange endpoint.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

// JSON error envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    // Stable summary of what failed.
    pub error: String,
    // Upstream-supplied detail, omitted entirely when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
