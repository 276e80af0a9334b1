use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use super::{Module, UnitId};

/// Unlocked-unit grants from the two independent sources: the approved
/// learning plan and the purchased course package.
///
/// A missing module key means "no units granted by that source"; the
/// membership accessors never fail. Fetched once per page view and immutable
/// for the lifetime of the view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessBreakdown {
    from_plan: HashMap<Module, BTreeSet<UnitId>>,
    from_package: HashMap<Module, BTreeSet<UnitId>>,
}

impl AccessBreakdown {
    #[must_use]
    pub fn new(
        from_plan: HashMap<Module, BTreeSet<UnitId>>,
        from_package: HashMap<Module, BTreeSet<UnitId>>,
    ) -> Self {
        Self {
            from_plan,
            from_package,
        }
    }

    /// A breakdown granting nothing from either source.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the approved learning plan grants `unit` of `module`.
    #[must_use]
    pub fn granted_by_plan(&self, module: Module, unit: UnitId) -> bool {
        self.from_plan
            .get(&module)
            .is_some_and(|units| units.contains(&unit))
    }

    /// Whether the purchased package grants `unit` of `module`.
    #[must_use]
    pub fn granted_by_package(&self, module: Module, unit: UnitId) -> bool {
        self.from_package
            .get(&module)
            .is_some_and(|units| units.contains(&unit))
    }
}

/// Which grant source unlocked a unit.
///
/// `Admin` is a sentinel meaning no restriction applies (non-learner roles);
/// it is not itself a grant source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessSource {
    Plan,
    Package,
    Both,
    None,
    Admin,
}

impl AccessSource {
    /// Plan access dominates package access: `Both` counts as plan.
    #[must_use]
    pub fn counts_as_plan(&self) -> bool {
        matches!(self, AccessSource::Plan | AccessSource::Both)
    }
}

/// Resolved access for a single unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitAccess {
    pub unlocked: bool,
    pub source: AccessSource,
}

/// Visual treatment of a unit entry, a fixed lookup keyed by
/// `(unlocked, source)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitTreatment {
    /// Strong emphasis: unlocked through the plan (or unrestricted role).
    Full,
    /// Secondary emphasis: unlocked through the package only.
    Muted,
    /// Locked, with no access-source distinction.
    Disabled,
}

impl UnitTreatment {
    #[must_use]
    pub fn for_access(access: UnitAccess) -> Self {
        match (access.unlocked, access.source) {
            (true, AccessSource::Plan | AccessSource::Both | AccessSource::Admin) => {
                UnitTreatment::Full
            }
            (true, AccessSource::Package) => UnitTreatment::Muted,
            (true, AccessSource::None) | (false, _) => UnitTreatment::Disabled,
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown_with_plan(module: Module, units: &[u8]) -> AccessBreakdown {
        let mut from_plan = HashMap::new();
        from_plan.insert(module, units.iter().copied().map(UnitId::new).collect());
        AccessBreakdown::new(from_plan, HashMap::new())
    }

    #[test]
    fn missing_module_grants_nothing() {
        let breakdown = breakdown_with_plan(Module::Reading, &[0, 1]);
        assert!(!breakdown.granted_by_plan(Module::Listening, UnitId::new(1)));
        assert!(!breakdown.granted_by_package(Module::Reading, UnitId::new(1)));
    }

    #[test]
    fn membership_checks_exact_units() {
        let breakdown = breakdown_with_plan(Module::Reading, &[0, 1, 3]);
        assert!(breakdown.granted_by_plan(Module::Reading, UnitId::new(3)));
        assert!(!breakdown.granted_by_plan(Module::Reading, UnitId::new(2)));
    }

    #[test]
    fn both_counts_as_plan() {
        assert!(AccessSource::Plan.counts_as_plan());
        assert!(AccessSource::Both.counts_as_plan());
        assert!(!AccessSource::Package.counts_as_plan());
        assert!(!AccessSource::Admin.counts_as_plan());
        assert!(!AccessSource::None.counts_as_plan());
    }

    #[test]
    fn treatment_lookup_covers_every_source() {
        let full = [AccessSource::Plan, AccessSource::Both, AccessSource::Admin];
        for source in full {
            let access = UnitAccess {
                unlocked: true,
                source,
            };
            assert_eq!(UnitTreatment::for_access(access), UnitTreatment::Full);
        }

        let muted = UnitAccess {
            unlocked: true,
            source: AccessSource::Package,
        };
        assert_eq!(UnitTreatment::for_access(muted), UnitTreatment::Muted);

        for source in [
            AccessSource::Plan,
            AccessSource::Package,
            AccessSource::Both,
            AccessSource::None,
            AccessSource::Admin,
        ] {
            let access = UnitAccess {
                unlocked: false,
                source,
            };
            assert_eq!(UnitTreatment::for_access(access), UnitTreatment::Disabled);
        }
    }

    #[test]
    fn breakdown_serde_roundtrip() {
        let breakdown = breakdown_with_plan(Module::Listening, &[0, 1, 2]);
        let json = serde_json::to_string(&breakdown).unwrap();
        let parsed: AccessBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, breakdown);
    }
}
