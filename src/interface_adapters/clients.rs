use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    AccessToken, Credentials, LodgingError, LodgingProvider, NearbySearch, PricingRequest,
};

// Base path of the lodging API's public surface.
const API_PREFIX: &str = "/open_api/v1";

// The clients defined here are reqwest clients for external services.
// Thin wrapper around reqwest for the lodging API; the only network-facing adapter.
pub struct BoomClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorResponse {
    message: String,
}

impl BoomClient {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }
}

// Builds the outbound listings query, skipping optional fields that are absent.
fn nearby_query(search: &NearbySearch) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("nearby", "true".to_string()),
        ("lat", search.lat.clone()),
        ("lng", search.lng.clone()),
        ("rad", search.rad.clone()),
    ];

    if let Some(adults) = &search.adults {
        pairs.push(("adults", adults.clone()));
    }
    if let Some(children) = &search.children {
        pairs.push(("children", children.clone()));
    }
    if let Some(check_in) = &search.check_in {
        pairs.push(("check_in", check_in.clone()));
    }
    if let Some(check_out) = &search.check_out {
        pairs.push(("check_out", check_out.clone()));
    }

    pairs
}

fn pricing_query(request: &PricingRequest) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("check_in", request.check_in.clone()),
        ("check_out", request.check_out.clone()),
        ("adults", request.adults.clone()),
    ];

    if let Some(children) = &request.children {
        pairs.push(("children", children.clone()));
    }

    pairs
}

// Keep the upstream `message` field when the error body carries one, so
// handlers can forward it to the caller.
async fn rejection(res: reqwest::Response) -> LodgingError {
    let message = res
        .json::<UpstreamErrorResponse>()
        .await
        .ok()
        .map(|payload| payload.message);

    LodgingError::Rejected { message }
}

#[async_trait]
impl LodgingProvider for BoomClient {
    async fn exchange_token(&self) -> Result<AccessToken, LodgingError> {
        let url = format!("{}{}/auth/token", self.base_url, API_PREFIX);
        let res = self
            .http
            .post(url)
            .json(&self.credentials)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "token endpoint unreachable");
                LodgingError::Unreachable
            })?;

        if !res.status().is_success() {
            return Err(rejection(res).await);
        }

        // An unparsable token body is a plain auth failure, not a distinct
        // parse error.
        res.json::<AccessToken>()
            .await
            .map_err(|_| LodgingError::Unreachable)
    }

    async fn search_nearby(
        &self,
        token: &str,
        search: &NearbySearch,
    ) -> Result<Vec<u8>, LodgingError> {
        let url = format!("{}{}/listings", self.base_url, API_PREFIX);
        let res = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(&nearby_query(search))
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "listings endpoint unreachable");
                LodgingError::Unreachable
            })?;

        if !res.status().is_success() {
            return Err(rejection(res).await);
        }

        // Raw bytes so the handler can forward the payload verbatim.
        let body = res.bytes().await.map_err(|_| LodgingError::Unreachable)?;
        Ok(body.to_vec())
    }

    async fn listing_pricing(
        &self,
        token: &str,
        request: &PricingRequest,
    ) -> Result<Vec<u8>, LodgingError> {
        let url = format!(
            "{}{}/listings/{}/pricing",
            self.base_url, API_PREFIX, request.listing_id
        );
        let res = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(&pricing_query(request))
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "pricing endpoint unreachable");
                LodgingError::Unreachable
            })?;

        if !res.status().is_success() {
            return Err(rejection(res).await);
        }

        let body = res.bytes().await.map_err(|_| LodgingError::Unreachable)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search() -> NearbySearch {
        NearbySearch {
            lat: "34.05".to_string(),
            lng: "-118.24".to_string(),
            rad: "50000".to_string(),
            adults: None,
            children: None,
            check_in: None,
            check_out: None,
        }
    }

    #[test]
    fn when_optional_fields_are_absent_then_nearby_query_has_only_required_pairs() {
        let pairs = nearby_query(&search());

        assert_eq!(
            pairs,
            vec![
                ("nearby", "true".to_string()),
                ("lat", "34.05".to_string()),
                ("lng", "-118.24".to_string()),
                ("rad", "50000".to_string()),
            ]
        );
    }

    #[test]
    fn when_optional_fields_are_present_then_nearby_query_includes_them() {
        let mut s = search();
        s.adults = Some("3".to_string());
        s.children = Some("1".to_string());
        s.check_in = Some("2024-06-01".to_string());
        s.check_out = Some("2024-06-05".to_string());

        let pairs = nearby_query(&s);

        assert!(pairs.contains(&("adults", "3".to_string())));
        assert!(pairs.contains(&("children", "1".to_string())));
        assert!(pairs.contains(&("check_in", "2024-06-01".to_string())));
        assert!(pairs.contains(&("check_out", "2024-06-05".to_string())));
    }

    #[test]
    fn when_children_is_absent_then_pricing_query_omits_it() {
        let request = PricingRequest {
            listing_id: "42".to_string(),
            check_in: "2024-06-01".to_string(),
            check_out: "2024-06-05".to_string(),
            adults: "2".to_string(),
            children: None,
        };

        let pairs = pricing_query(&request);

        assert_eq!(
            pairs,
            vec![
                ("check_in", "2024-06-01".to_string()),
                ("check_out", "2024-06-05".to_string()),
                ("adults", "2".to_string()),
            ]
        );
    }

    #[test]
    fn when_children_is_present_then_pricing_query_includes_it() {
        let request = PricingRequest {
            listing_id: "42".to_string(),
            check_in: "2024-06-01".to_string(),
            check_out: "2024-06-05".to_string(),
            adults: "2".to_string(),
            children: Some("1".to_string()),
        };

        let pairs = pricing_query(&request);

        assert!(pairs.contains(&("children", "1".to_string())));
    }
}
