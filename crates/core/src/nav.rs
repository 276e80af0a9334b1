//! Role-based navigation policy.
//!
//! Every page used to re-derive its navigation base and redirect target from
//! the stored role and the current path; these two functions are the single
//! place that decision lives now.

use crate::model::{Module, Role};

/// Root path of a role's page tree.
#[must_use]
pub fn base_path(role: Role) -> &'static str {
    match role {
        Role::Learner => "/member",
        Role::Instructor => "/instructor",
        Role::Admin => "/admin",
    }
}

/// Where to send a visitor whose current path is outside their role's tree.
///
/// Returns `None` when `path` is already under the role's base.
#[must_use]
pub fn redirect_target(role: Role, path: &str) -> Option<String> {
    let base = base_path(role);
    if in_base(path, base) {
        None
    } else {
        Some(base.to_string())
    }
}

/// Path of a module's material page for the given role.
#[must_use]
pub fn material_path(role: Role, module: Module) -> String {
    format!("{}/material/{}", base_path(role), module.as_str())
}

/// Path of the simulation pages for the given role.
#[must_use]
pub fn simulation_path(role: Role) -> String {
    format!("{}/simulation", base_path(role))
}

/// Segment-aware prefix test: `/member` and `/member/...` are under
/// `/member`, `/memberships` is not.
fn in_base(path: &str, base: &str) -> bool {
    match path.strip_prefix(base) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
