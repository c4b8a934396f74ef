pub mod nearby_search;
pub mod pricing;
pub mod token_exchange;

#[cfg(test)]
pub(crate) mod test_support;

use crate::domain::{LodgingError, ProxyError};

// Treats empty strings the same as absent parameters, matching the
// original service's falsy checks.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn auth_error(err: LodgingError) -> ProxyError {
    match err {
        LodgingError::Rejected { message } => ProxyError::AuthFailed(message),
        LodgingError::Unreachable => ProxyError::AuthFailed(None),
    }
}

pub(crate) fn upstream_error(err: LodgingError) -> ProxyError {
    match err {
        LodgingError::Rejected { message } => ProxyError::UpstreamFailed(message),
        LodgingError::Unreachable => ProxyError::UpstreamFailed(None),
    }
}
