//! API server state

use std::sync::Arc;

use crate::config::AppConfig;
use crate::service::PollutionService;
use crate::Result;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Orchestrates the upstream calls for each request
    pub service: Arc<PollutionService>,
}

impl AppState {
    pub fn new(service: Arc<PollutionService>) -> Self {
        Self { service }
    }

    /// Build state backed by real HTTP clients
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let service = PollutionService::from_config(config)?;
        Ok(Self::new(Arc::new(service)))
    }
}
