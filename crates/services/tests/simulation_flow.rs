use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use itp_core::model::{AccessBreakdown, EligibilityCheck, ReasonCode, Role, SimulationAttempt};
use itp_core::time::fixed_now;
use itp_core::ExamGate;
use services::{ApiError, AppServices, Clock, LmsApi, SessionContext, SimulationError};

struct FakeLmsApi {
    eligibility: Result<EligibilityCheck, reqwest::StatusCode>,
    history: Result<Vec<SimulationAttempt>, reqwest::StatusCode>,
}

impl FakeLmsApi {
    fn with_eligibility(check: EligibilityCheck) -> Self {
        Self {
            eligibility: Ok(check),
            history: Ok(Vec::new()),
        }
    }

    fn failing_eligibility(status: reqwest::StatusCode) -> Self {
        Self {
            eligibility: Err(status),
            history: Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl LmsApi for FakeLmsApi {
    async fn fetch_access_breakdown(&self, _token: &str) -> Result<AccessBreakdown, ApiError> {
        Ok(AccessBreakdown::empty())
    }

    async fn fetch_eligibility(&self, _token: &str) -> Result<EligibilityCheck, ApiError> {
        self.eligibility.clone().map_err(ApiError::Status)
    }

    async fn fetch_simulation_history(
        &self,
        _token: &str,
    ) -> Result<Vec<SimulationAttempt>, ApiError> {
        self.history.clone().map_err(ApiError::Status)
    }
}

fn app(api: FakeLmsApi) -> AppServices {
    AppServices::with_api(Arc::new(api), Clock::fixed(fixed_now()))
}

fn attempt(id: i64, days_ago: i64, total: u32) -> SimulationAttempt {
    SimulationAttempt {
        id,
        listening: 50,
        structure: 50,
        reading: 50,
        total,
        completed_at: fixed_now() - Duration::days(days_ago),
        finished: true,
    }
}

#[tokio::test]
async fn eligible_with_incomplete_attempt_resumes() {
    let app = app(FakeLmsApi::with_eligibility(EligibilityCheck::granted(true)));
    let ctx = SessionContext::new(Role::Learner, "tok");

    let view = app.simulation().exam_gate(&ctx).await;

    assert_eq!(view.gate, ExamGate::Resume);
    assert_eq!(view.checked_at, fixed_now());
    assert!(view.gate.can_enter());
}

#[tokio::test]
async fn denial_reason_maps_to_a_specific_state() {
    let app = app(FakeLmsApi::with_eligibility(EligibilityCheck::denied(
        "Tidak ada paket aktif",
    )));
    let ctx = SessionContext::new(Role::Learner, "tok");

    let view = app.simulation().exam_gate(&ctx).await;
    assert_eq!(view.gate, ExamGate::NoPackage);
}

#[tokio::test]
async fn denial_code_maps_without_reason_text() {
    let app = app(FakeLmsApi::with_eligibility(
        EligibilityCheck::denied_with_code(ReasonCode::PackageLacksSimulation),
    ));
    let ctx = SessionContext::new(Role::Learner, "tok");

    let view = app.simulation().exam_gate(&ctx).await;
    assert_eq!(view.gate, ExamGate::PackageLacksSimulation);
}

#[tokio::test]
async fn forbidden_fetch_classifies_as_forbidden() {
    let app = app(FakeLmsApi::failing_eligibility(
        reqwest::StatusCode::FORBIDDEN,
    ));
    let ctx = SessionContext::new(Role::Learner, "tok");

    let view = app.simulation().exam_gate(&ctx).await;
    assert_eq!(view.gate, ExamGate::Forbidden);
    assert!(!view.gate.can_enter());
}

#[tokio::test]
async fn other_fetch_failures_degrade_to_generic() {
    let app = app(FakeLmsApi::failing_eligibility(
        reqwest::StatusCode::BAD_GATEWAY,
    ));
    let ctx = SessionContext::new(Role::Learner, "tok");

    let view = app.simulation().exam_gate(&ctx).await;
    assert_eq!(view.gate, ExamGate::GenericIneligible);
}

#[tokio::test]
async fn instructor_bypasses_the_eligibility_fetch() {
    // The fake would answer 403; non-learner roles never reach it.
    let app = app(FakeLmsApi::failing_eligibility(
        reqwest::StatusCode::FORBIDDEN,
    ));
    let ctx = SessionContext::new(Role::Instructor, "tok");

    let view = app.simulation().exam_gate(&ctx).await;
    assert_eq!(view.gate, ExamGate::EligibleInstructor);
    assert!(view.gate.can_enter());
}

#[tokio::test]
async fn history_is_sorted_newest_first() {
    let api = FakeLmsApi {
        eligibility: Ok(EligibilityCheck::granted(false)),
        history: Ok(vec![attempt(1, 30, 470), attempt(2, 1, 503), attempt(3, 7, 490)]),
    };
    let app = app(api);
    let ctx = SessionContext::new(Role::Learner, "tok");

    let items = app.simulation().load_history(&ctx).await.unwrap();

    let ids: Vec<_> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert_eq!(items[0].total, 503);
}

#[tokio::test]
async fn history_fetch_failure_surfaces_as_an_error() {
    let api = FakeLmsApi {
        eligibility: Ok(EligibilityCheck::granted(false)),
        history: Err(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
    };
    let app = app(api);
    let ctx = SessionContext::new(Role::Learner, "tok");

    let err = app.simulation().load_history(&ctx).await.unwrap_err();
    assert!(matches!(err, SimulationError::Api(_)));
}
