use std::sync::Arc;

use itp_core::model::ApiSettings;
use itp_core::Clock;

use crate::api::{HttpLmsApi, LmsApi};
use crate::progress::ProgressService;
use crate::simulation::SimulationService;

/// Assembles the member-facing services over a shared API client.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    simulation: Arc<SimulationService>,
}

impl AppServices {
    /// Build services backed by the HTTP API.
    #[must_use]
    pub fn new_http(settings: ApiSettings, clock: Clock) -> Self {
        Self::with_api(Arc::new(HttpLmsApi::new(settings)), clock)
    }

    /// Build services over any API implementation.
    #[must_use]
    pub fn with_api(api: Arc<dyn LmsApi>, clock: Clock) -> Self {
        Self {
            progress: Arc::new(ProgressService::new(clock, Arc::clone(&api))),
            simulation: Arc::new(SimulationService::new(clock, api)),
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn simulation(&self) -> Arc<SimulationService> {
        Arc::clone(&self.simulation)
    }
}
