// ==========================================
// Learner Record Validation - Lookup Layer
// ==========================================
// Responsibility: bundled resource model + builder that compiles it
//                 into the internal data cache
// ==========================================

pub mod builder;
pub mod resource;

pub use builder::{LookupBuilder, LookupError, LookupResult};
pub use resource::{LookupCategory, LookupChild, LookupOption, LookupResource};

/// Reference lookup resource bundled with the crate.
pub const EMBEDDED_LOOKUPS: &str = include_str!("../../resources/lookups.json");
