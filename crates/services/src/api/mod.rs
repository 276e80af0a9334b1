mod client;
mod dto;

pub use client::HttpLmsApi;
pub use dto::{
    AccessBreakdownDto, EligibilityDto, GrantSourceDto, SimulationAttemptDto, SimulationHistoryDto,
};

use async_trait::async_trait;

use itp_core::model::{AccessBreakdown, EligibilityCheck, SimulationAttempt};

use crate::error::ApiError;

/// Remote API contract the services depend on.
///
/// Production uses [`HttpLmsApi`]; tests substitute an in-memory fake.
#[async_trait]
pub trait LmsApi: Send + Sync {
    /// Fetch the per-source unlocked-unit breakdown for the session user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the body cannot be
    /// decoded.
    async fn fetch_access_breakdown(&self, token: &str) -> Result<AccessBreakdown, ApiError>;

    /// Fetch the simulation eligibility payload for the session user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the body cannot be
    /// decoded.
    async fn fetch_eligibility(&self, token: &str) -> Result<EligibilityCheck, ApiError>;

    /// Fetch the user's past simulation attempts.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the body cannot be
    /// decoded.
    async fn fetch_simulation_history(
        &self,
        token: &str,
    ) -> Result<Vec<SimulationAttempt>, ApiError>;
}
