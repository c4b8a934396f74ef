use std::sync::Arc;

use crate::domain::{AccessToken, LodgingProvider, ProxyError};
use crate::use_cases::auth_error;

// Credential exchange use case. The credentials themselves live inside the
// provider; callers never supply or see them.
pub struct TokenExchangeUseCase {
    pub provider: Arc<dyn LodgingProvider>,
}

impl TokenExchangeUseCase {
    pub async fn execute(&self) -> Result<AccessToken, ProxyError> {
        self.provider.exchange_token().await.map_err(auth_error)
    }
}
