use std::sync::Arc;

use itp_core::model::EligibilityCheck;
use itp_core::{Clock, GateContext};

use super::view::{ExamGateView, SimulationHistoryItem};
use crate::api::LmsApi;
use crate::error::SimulationError;
use crate::session_context::SessionContext;

/// Simulation gate and history facade.
#[derive(Clone)]
pub struct SimulationService {
    clock: Clock,
    api: Arc<dyn LmsApi>,
}

impl SimulationService {
    #[must_use]
    pub fn new(clock: Clock, api: Arc<dyn LmsApi>) -> Self {
        Self { clock, api }
    }

    /// Decide whether the session user may start or resume a simulation.
    ///
    /// A 401/403 from the API classifies as `Forbidden`; any other fetch
    /// failure degrades to an unavailable check, which classifies as
    /// `GenericIneligible`. The call itself never fails.
    pub async fn exam_gate(&self, ctx: &SessionContext) -> ExamGateView {
        let gate_ctx = GateContext::new(ctx.role());

        if !ctx.role().is_learner() {
            return ExamGateView {
                gate: gate_ctx.classify(&EligibilityCheck::unavailable(), false),
                checked_at: self.clock.now(),
            };
        }

        let (check, has_access_error) = match self.api.fetch_eligibility(ctx.token()).await {
            Ok(check) => (check, false),
            Err(err) if err.is_forbidden() => (EligibilityCheck::unavailable(), true),
            Err(err) => {
                tracing::warn!(error = %err, "eligibility fetch failed, reporting generic ineligibility");
                (EligibilityCheck::unavailable(), false)
            }
        };

        ExamGateView {
            gate: gate_ctx.classify(&check, has_access_error),
            checked_at: self.clock.now(),
        }
    }

    /// History rows for the simulation-history page, newest first.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::Api` when the fetch fails.
    pub async fn load_history(
        &self,
        ctx: &SessionContext,
    ) -> Result<Vec<SimulationHistoryItem>, SimulationError> {
        let mut attempts = self.api.fetch_simulation_history(ctx.token()).await?;
        attempts.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(attempts
            .iter()
            .map(SimulationHistoryItem::from_attempt)
            .collect())
    }
}
