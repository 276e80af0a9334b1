mod access;
mod eligibility;
mod ids;
mod module;
mod role;
mod settings;
mod simulation;

pub use access::{AccessBreakdown, AccessSource, UnitAccess, UnitTreatment};
pub use eligibility::{EligibilityCheck, ReasonCode};
pub use ids::{ParseIdError, UnitId};
pub use module::{Module, ParseModuleError};
pub use role::{ParseRoleError, Role};
pub use settings::{ApiSettings, ApiSettingsDraft, ApiSettingsError};
pub use simulation::SimulationAttempt;
