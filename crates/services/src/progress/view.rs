use chrono::{DateTime, Utc};

use itp_core::access::ModuleAccessSummary;
use itp_core::model::{Module, UnitAccess, UnitId, UnitTreatment};

/// Presentation-agnostic entry for one unit in the sidebar or progress list.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no styling class names
///
/// The renderer decides how each treatment looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitListItem {
    pub unit: UnitId,
    pub is_intro: bool,
    pub access: UnitAccess,
    pub treatment: UnitTreatment,
}

impl UnitListItem {
    #[must_use]
    pub fn from_access(unit: UnitId, access: UnitAccess) -> Self {
        Self {
            unit,
            is_intro: unit.is_intro(),
            access,
            treatment: UnitTreatment::for_access(access),
        }
    }
}

/// Resolved unit list and aggregate counts for one module view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleProgressView {
    pub module: Module,
    pub title: &'static str,
    /// Every unit of the module in order, unit 0 first.
    pub units: Vec<UnitListItem>,
    /// Aggregates over the gradeable units only.
    pub summary: ModuleAccessSummary,
    pub fetched_at: DateTime<Utc>,
}

/// Per-module summaries for the learning-progress report page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReportView {
    pub modules: Vec<ModuleAccessSummary>,
    pub fetched_at: DateTime<Utc>,
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
