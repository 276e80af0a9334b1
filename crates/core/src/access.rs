use crate::model::{AccessBreakdown, AccessSource, Module, Role, UnitAccess, UnitId};

//
// ─── CONTEXT ───────────────────────────────────────────────────────────────────
//

/// Explicit inputs for unit-access resolution.
///
/// Built once per page view from the session role and the breakdown fetched
/// for that view. Resolution reads nothing else: the same context always
/// resolves the same answers.
///
/// # Examples
///
/// ```
/// # use itp_core::access::AccessContext;
/// # use itp_core::model::{AccessSource, Module, Role, UnitId};
/// let ctx = AccessContext::new(Role::Learner, None);
/// let access = ctx.resolve(Module::Reading, UnitId::new(3));
///
/// // No breakdown data: open access, attributed to the plan.
/// assert!(access.unlocked);
/// assert_eq!(access.source, AccessSource::Plan);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AccessContext {
    role: Role,
    breakdown: Option<AccessBreakdown>,
}

impl AccessContext {
    #[must_use]
    pub fn new(role: Role, breakdown: Option<AccessBreakdown>) -> Self {
        Self { role, breakdown }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn breakdown(&self) -> Option<&AccessBreakdown> {
        self.breakdown.as_ref()
    }

    /// Resolve whether `unit` of `module` is unlocked and which source
    /// granted it.
    ///
    /// Rules, in order:
    ///
    /// 1. Non-learner roles are unrestricted: unlocked, source `Admin`.
    /// 2. An absent breakdown fails open: unlocked, source `Plan`.
    /// 3. Otherwise the unit's membership in the plan and package sets
    ///    decides both fields; a unit in both sets resolves to `Both`.
    ///
    /// There is no error path. Absent data and out-of-range units degrade to
    /// the open or locked defaults above.
    #[must_use]
    pub fn resolve(&self, module: Module, unit: UnitId) -> UnitAccess {
        if !self.role.is_learner() {
            return UnitAccess {
                unlocked: true,
                source: AccessSource::Admin,
            };
        }

        let Some(breakdown) = &self.breakdown else {
            return UnitAccess {
                unlocked: true,
                source: AccessSource::Plan,
            };
        };

        let from_plan = breakdown.granted_by_plan(module, unit);
        let from_package = breakdown.granted_by_package(module, unit);

        let source = match (from_plan, from_package) {
            (true, true) => AccessSource::Both,
            (true, false) => AccessSource::Plan,
            (false, true) => AccessSource::Package,
            (false, false) => AccessSource::None,
        };

        UnitAccess {
            unlocked: from_plan || from_package,
            source,
        }
    }

    /// Aggregate resolved access over the gradeable units of `module`
    /// (unit 0 excluded).
    ///
    /// A `Both` unit counts toward `from_plan` only, never `from_package`.
    /// For non-learner roles every unit counts as unlocked while both grant
    /// buckets stay zero: `Admin` is not a grant source.
    #[must_use]
    pub fn module_summary(&self, module: Module) -> ModuleAccessSummary {
        let mut summary = ModuleAccessSummary::empty(module);

        for unit in module.real_units() {
            let access = self.resolve(module, unit);
            if access.unlocked {
                summary.unlocked += 1;
            }
            if access.source.counts_as_plan() {
                summary.from_plan += 1;
            } else if access.source == AccessSource::Package {
                summary.from_package += 1;
            }
        }

        summary
    }
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Per-module aggregate of resolved access over the gradeable units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleAccessSummary {
    pub module: Module,
    /// Gradeable units in the module (unit 0 excluded).
    pub total: u32,
    pub unlocked: u32,
    /// Units whose source is `Plan` or `Both`.
    pub from_plan: u32,
    /// Units whose source is `Package` only.
    pub from_package: u32,
}

impl ModuleAccessSummary {
    fn empty(module: Module) -> Self {
        Self {
            module,
            total: u32::from(module.unit_count()).saturating_sub(1),
            unlocked: 0,
            from_plan: 0,
            from_package: 0,
        }
    }

    /// Whether every gradeable unit of the module is unlocked.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unlocked == self.total
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
