// ==========================================
// Learner Record Validation - Population Layer
// ==========================================
// Responsibility: orchestration of the per-run cache population
// ==========================================

pub mod orchestrator;

pub use orchestrator::{
    PopulationError, PopulationOrchestrator, PopulationState, ValidationContext,
};
