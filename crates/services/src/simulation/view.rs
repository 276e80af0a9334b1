use chrono::{DateTime, Utc};

use itp_core::model::SimulationAttempt;
use itp_core::ExamGate;

/// Row identifier for a simulation attempt.
///
/// NOTE: This is `i64` to match API row IDs.
pub type AttemptId = i64;

/// Gate decision for the exam-taking viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamGateView {
    pub gate: ExamGate,
    pub checked_at: DateTime<Utc>,
}

/// Presentation-agnostic row for the simulation-history page.
///
/// The UI may format timestamps (e.g., relative time, locale) as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationHistoryItem {
    pub id: AttemptId,
    pub listening: u32,
    pub structure: u32,
    pub reading: u32,
    pub total: u32,
    pub completed_at: DateTime<Utc>,
    pub finished: bool,
}

impl SimulationHistoryItem {
    #[must_use]
    pub fn from_attempt(attempt: &SimulationAttempt) -> Self {
        Self {
            id: attempt.id,
            listening: attempt.listening,
            structure: attempt.structure,
            reading: attempt.reading,
            total: attempt.total,
            completed_at: attempt.completed_at,
            finished: attempt.finished,
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
