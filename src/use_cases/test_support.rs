use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{
    AccessToken, LodgingError, LodgingProvider, NearbySearch, PricingRequest,
};

pub(crate) const TEST_TOKEN: &str = "test-token";

// Which provider call should fail, and how.
#[derive(Clone, Copy, Default, PartialEq)]
pub(crate) enum FakeFailure {
    #[default]
    None,
    TokenRejected,
    TokenUnreachable,
    UpstreamRejected,
    UpstreamUnreachable,
}

// Everything the fake provider was asked to do, for assertions.
#[derive(Default)]
pub(crate) struct Calls {
    pub token_exchanges: u32,
    pub searches: Vec<(String, NearbySearch)>,
    pub pricings: Vec<(String, PricingRequest)>,
}

// Recording fake for the lodging provider port. Succeeds by default with a
// fixed token and a small JSON body; failure modes are opt-in per test.
pub(crate) struct FakeLodging {
    failure: FakeFailure,
    message: Option<String>,
    body: Vec<u8>,
    pub calls: Mutex<Calls>,
}

impl FakeLodging {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            failure: FakeFailure::default(),
            message: None,
            body: br#"{"ok":true}"#.to_vec(),
            calls: Mutex::new(Calls::default()),
        })
    }

    pub(crate) fn failing(failure: FakeFailure) -> Arc<Self> {
        Arc::new(Self {
            failure,
            message: None,
            body: Vec::new(),
            calls: Mutex::new(Calls::default()),
        })
    }

    pub(crate) fn failing_with_message(failure: FakeFailure, message: &str) -> Arc<Self> {
        Arc::new(Self {
            failure,
            message: Some(message.to_string()),
            body: Vec::new(),
            calls: Mutex::new(Calls::default()),
        })
    }

    pub(crate) fn with_body(body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            failure: FakeFailure::default(),
            message: None,
            body: body.to_vec(),
            calls: Mutex::new(Calls::default()),
        })
    }

    pub(crate) fn token_exchange_count(&self) -> u32 {
        self.calls.lock().expect("calls mutex poisoned").token_exchanges
    }

    pub(crate) fn recorded_search(&self) -> Option<(String, NearbySearch)> {
        let guard = self.calls.lock().expect("calls mutex poisoned");
        guard.searches.first().cloned()
    }

    pub(crate) fn recorded_pricing(&self) -> Option<(String, PricingRequest)> {
        let guard = self.calls.lock().expect("calls mutex poisoned");
        guard.pricings.first().cloned()
    }

    pub(crate) fn upstream_call_count(&self) -> usize {
        let guard = self.calls.lock().expect("calls mutex poisoned");
        guard.searches.len() + guard.pricings.len()
    }

    fn upstream_result(&self) -> Result<Vec<u8>, LodgingError> {
        match self.failure {
            FakeFailure::UpstreamRejected => Err(LodgingError::Rejected {
                message: self.message.clone(),
            }),
            FakeFailure::UpstreamUnreachable => Err(LodgingError::Unreachable),
            _ => Ok(self.body.clone()),
        }
    }
}

#[async_trait]
impl LodgingProvider for FakeLodging {
    async fn exchange_token(&self) -> Result<AccessToken, LodgingError> {
        self.calls.lock().expect("calls mutex poisoned").token_exchanges += 1;

        match self.failure {
            FakeFailure::TokenRejected => Err(LodgingError::Rejected {
                message: self.message.clone(),
            }),
            FakeFailure::TokenUnreachable => Err(LodgingError::Unreachable),
            _ => Ok(AccessToken {
                access_token: TEST_TOKEN.to_string(),
                expires_in: 3600,
            }),
        }
    }

    async fn search_nearby(
        &self,
        token: &str,
        search: &NearbySearch,
    ) -> Result<Vec<u8>, LodgingError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .searches
            .push((token.to_string(), search.clone()));

        self.upstream_result()
    }

    async fn listing_pricing(
        &self,
        token: &str,
        request: &PricingRequest,
    ) -> Result<Vec<u8>, LodgingError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .pricings
            .push((token.to_string(), request.clone()));

        self.upstream_result()
    }
}
