// ==========================================
// Learner Record Validation - Derived Data Providers
// ==========================================
// Responsibility: small pure predicates computed from static tables
//                 and the populated caches, reused across many rules
// ==========================================

pub mod apprenticeship;

pub use apprenticeship::ApprenticeshipProgrammes;
