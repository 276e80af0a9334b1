use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One simulation attempt, as reported by the API for the history page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationAttempt {
    pub id: i64,
    pub listening: u32,
    pub structure: u32,
    pub reading: u32,
    /// Converted total score as reported by the server.
    pub total: u32,
    pub completed_at: DateTime<Utc>,
    pub finished: bool,
}

impl SimulationAttempt {
    /// Mean of the three section scores.
    #[must_use]
    pub fn section_average(&self) -> f64 {
        f64::from(self.listening + self.structure + self.reading) / 3.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
