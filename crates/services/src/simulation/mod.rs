mod service;
mod view;

// Public API of the simulation subsystem.
pub use crate::error::SimulationError;
pub use service::SimulationService;
pub use view::{AttemptId, ExamGateView, SimulationHistoryItem};
