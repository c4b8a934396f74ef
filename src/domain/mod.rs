mod errors;
mod lodging;

// Re-export the domain boundary types and ports.
pub use errors::{LodgingError, ProxyError};
pub use lodging::{AccessToken, Credentials, LodgingProvider, NearbySearch, PricingRequest};
