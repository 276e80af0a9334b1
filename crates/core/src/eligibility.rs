use crate::model::{EligibilityCheck, ReasonCode, Role};

//
// ─── GATE STATES ───────────────────────────────────────────────────────────────
//

/// UI-facing state of the simulation gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExamGate {
    /// The API refused the eligibility check itself (401/403).
    Forbidden,
    /// The learner's plan is not active.
    Inactive,
    AlreadyTaken,
    NoPackage,
    /// An active package exists but does not include simulation rights.
    PackageLacksSimulation,
    PlanNotApproved,
    /// Not eligible for a reason the client does not recognize.
    GenericIneligible,
    Ready,
    /// An unfinished attempt exists and may be resumed.
    Resume,
    /// Non-learner roles bypass eligibility entirely.
    EligibleInstructor,
}

impl ExamGate {
    /// True when the user may enter the exam viewer, fresh or resumed.
    #[must_use]
    pub fn can_enter(&self) -> bool {
        matches!(
            self,
            ExamGate::Ready | ExamGate::Resume | ExamGate::EligibleInstructor
        )
    }
}

impl From<ReasonCode> for ExamGate {
    fn from(code: ReasonCode) -> Self {
        match code {
            ReasonCode::Inactive => ExamGate::Inactive,
            ReasonCode::AlreadyTaken => ExamGate::AlreadyTaken,
            ReasonCode::NoPackage => ExamGate::NoPackage,
            ReasonCode::PackageLacksSimulation => ExamGate::PackageLacksSimulation,
            ReasonCode::PlanNotApproved => ExamGate::PlanNotApproved,
        }
    }
}

//
// ─── REASON SHIM ───────────────────────────────────────────────────────────────
//

/// Legacy free-text reason fragments, matched case-sensitively in table
/// order. Compatibility shim for servers that cannot send `reason_code`.
const REASON_KEYWORDS: [(&str, ExamGate); 5] = [
    ("tidak aktif", ExamGate::Inactive),
    ("sudah pernah", ExamGate::AlreadyTaken),
    ("Tidak ada paket aktif", ExamGate::NoPackage),
    ("tidak memiliki akses simulasi", ExamGate::PackageLacksSimulation),
    ("Belum ada rencana belajar aktif", ExamGate::PlanNotApproved),
];

//
// ─── CLASSIFIER ────────────────────────────────────────────────────────────────
//

/// Explicit inputs for eligibility classification.
///
/// Like [`crate::access::AccessContext`], this is built by the caller; the
/// classifier reads no ambient session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateContext {
    role: Role,
}

impl GateContext {
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Map a fetched eligibility check to the gate state, first match wins:
    ///
    /// 1. Non-learner role: `EligibleInstructor`.
    /// 2. `has_access_error`: `Forbidden`.
    /// 3. Not eligible with a `reason_code`: that code's state.
    /// 4. Not eligible with a recognized reason substring: the mapped state.
    /// 5. Not eligible otherwise: `GenericIneligible`.
    /// 6. Eligible with an unfinished attempt: `Resume`.
    /// 7. Eligible: `Ready`.
    ///
    /// There is no error path; unrecognized input lands on
    /// `GenericIneligible`.
    #[must_use]
    pub fn classify(&self, check: &EligibilityCheck, has_access_error: bool) -> ExamGate {
        if !self.role.is_learner() {
            return ExamGate::EligibleInstructor;
        }

        if has_access_error {
            return ExamGate::Forbidden;
        }

        if !check.eligible {
            if let Some(code) = check.reason_code {
                return ExamGate::from(code);
            }
            if let Some(reason) = check.reason.as_deref() {
                for (needle, gate) in REASON_KEYWORDS {
                    if reason.contains(needle) {
                        return gate;
                    }
                }
            }
            return ExamGate::GenericIneligible;
        }

        if check.has_incomplete {
            ExamGate::Resume
        } else {
            ExamGate::Ready
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
