#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod error;
pub mod progress;
pub mod session_context;
pub mod simulation;

pub use itp_core::Clock;

pub use api::{HttpLmsApi, LmsApi};
pub use app_services::AppServices;
pub use error::{ApiError, SimulationError};

pub use progress::{ModuleProgressView, ProgressReportView, ProgressService, UnitListItem};
pub use session_context::SessionContext;
pub use simulation::{AttemptId, ExamGateView, SimulationHistoryItem, SimulationService};
