use std::sync::Arc;

use crate::domain::{LodgingProvider, NearbySearch, ProxyError};
use crate::interface_adapters::protocol::NearbyQuery;
use crate::use_cases::{auth_error, present, upstream_error};

// Default search radius in meters when the caller does not supply one.
const DEFAULT_RADIUS: &str = "50000";

const MISSING_PARAMS: &str = "Missing required parameters: lat, lng";

// Nearby listings search use case with an injected provider.
pub struct NearbySearchUseCase {
    pub provider: Arc<dyn LodgingProvider>,
}

impl NearbySearchUseCase {
    pub async fn execute(&self, query: NearbyQuery) -> Result<Vec<u8>, ProxyError> {
        // Validation happens before any network activity.
        let search = validate(query)?;

        // A fresh token per request; nothing is cached across invocations.
        let token = self.provider.exchange_token().await.map_err(auth_error)?;

        self.provider
            .search_nearby(&token.access_token, &search)
            .await
            .map_err(upstream_error)
    }
}

fn validate(query: NearbyQuery) -> Result<NearbySearch, ProxyError> {
    let lat = present(query.lat).ok_or(ProxyError::MissingParameters(MISSING_PARAMS))?;
    let lng = present(query.lng).ok_or(ProxyError::MissingParameters(MISSING_PARAMS))?;

    Ok(NearbySearch {
        lat,
        lng,
        rad: present(query.radius).unwrap_or_else(|| DEFAULT_RADIUS.to_string()),
        adults: present(query.adults),
        children: present(query.children),
        check_in: present(query.check_in),
        check_out: present(query.check_out),
    })
}
