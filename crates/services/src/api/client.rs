use async_trait::async_trait;
use reqwest::Client;

use itp_core::model::{AccessBreakdown, ApiSettings, EligibilityCheck, SimulationAttempt};

use super::dto::{AccessBreakdownDto, EligibilityDto, SimulationHistoryDto};
use super::LmsApi;
use crate::error::ApiError;

/// HTTP implementation of the platform API.
#[derive(Clone)]
pub struct HttpLmsApi {
    client: Client,
    settings: ApiSettings,
}

impl HttpLmsApi {
    #[must_use]
    pub fn new(settings: ApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.settings.base_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json<T>(&self, path: &str, token: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(self.endpoint(path))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LmsApi for HttpLmsApi {
    async fn fetch_access_breakdown(&self, token: &str) -> Result<AccessBreakdown, ApiError> {
        let dto: AccessBreakdownDto = self.get_json("member/unit-access", token).await?;
        Ok(dto.into_domain())
    }

    async fn fetch_eligibility(&self, token: &str) -> Result<EligibilityCheck, ApiError> {
        let dto: EligibilityDto = self.get_json("member/simulation/eligibility", token).await?;
        Ok(dto.into_check())
    }

    async fn fetch_simulation_history(
        &self,
        token: &str,
    ) -> Result<Vec<SimulationAttempt>, ApiError> {
        let dto: SimulationHistoryDto = self.get_json("member/simulation/history", token).await?;
        Ok(dto.into_domain())
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
