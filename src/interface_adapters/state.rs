use std::sync::Arc;

use crate::domain::LodgingProvider;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub lodging: Arc<dyn LodgingProvider>,
}
