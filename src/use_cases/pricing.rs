use std::sync::Arc;

use crate::domain::{LodgingProvider, PricingRequest, ProxyError};
use crate::interface_adapters::protocol::PricingQuery;
use crate::use_cases::{auth_error, present, upstream_error};

// Default occupancy when the caller does not supply one.
const DEFAULT_ADULTS: &str = "2";

const MISSING_PARAMS: &str = "Missing required parameters: listing_id, check_in, check_out";

// Listing pricing use case with an injected provider.
pub struct PricingUseCase {
    pub provider: Arc<dyn LodgingProvider>,
}

impl PricingUseCase {
    pub async fn execute(&self, query: PricingQuery) -> Result<Vec<u8>, ProxyError> {
        // Fail fast: no token is acquired when required parameters are missing.
        let request = validate(query)?;

        let token = self.provider.exchange_token().await.map_err(auth_error)?;

        self.provider
            .listing_pricing(&token.access_token, &request)
            .await
            .map_err(upstream_error)
    }
}

fn validate(query: PricingQuery) -> Result<PricingRequest, ProxyError> {
    let listing_id =
        present(query.listing_id).ok_or(ProxyError::MissingParameters(MISSING_PARAMS))?;
    let check_in = present(query.check_in).ok_or(ProxyError::MissingParameters(MISSING_PARAMS))?;
    let check_out =
        present(query.check_out).ok_or(ProxyError::MissingParameters(MISSING_PARAMS))?;

    Ok(PricingRequest {
        listing_id,
        check_in,
        check_out,
        adults: present(query.adults).unwrap_or_else(|| DEFAULT_ADULTS.to_string()),
        children: present(query.children),
    })
}
