use serde::{Deserialize, Serialize};

/// Server-reported eligibility payload for starting a timed simulation, as
/// the classifier sees it after fetching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EligibilityCheck {
    pub eligible: bool,
    /// Free-text denial reason. Matched against the legacy substring table
    /// only when no `reason_code` is present.
    pub reason: Option<String>,
    /// Enumerated denial code, preferred over `reason` when the server sends
    /// one.
    pub reason_code: Option<ReasonCode>,
    /// An unfinished attempt exists and may be resumed.
    pub has_incomplete: bool,
}

impl EligibilityCheck {
    /// An eligible check, optionally with an attempt to resume.
    #[must_use]
    pub fn granted(has_incomplete: bool) -> Self {
        Self {
            eligible: true,
            reason: None,
            reason_code: None,
            has_incomplete,
        }
    }

    /// A denied check carrying only a free-text reason.
    #[must_use]
    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            reason: Some(reason.into()),
            reason_code: None,
            has_incomplete: false,
        }
    }

    /// A denied check carrying an enumerated code.
    #[must_use]
    pub fn denied_with_code(code: ReasonCode) -> Self {
        Self {
            eligible: false,
            reason: None,
            reason_code: Some(code),
            has_incomplete: false,
        }
    }

    /// Degraded default for when the payload could not be fetched or decoded.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }
}

/// Enumerated denial codes the server may send instead of free text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    Inactive,
    AlreadyTaken,
    NoPackage,
    PackageLacksSimulation,
    PlanNotApproved,
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
