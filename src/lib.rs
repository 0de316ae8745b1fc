// ==========================================
// Learner Record Validation - Core Library
// ==========================================
// System role: cache population and cross-referenced lookup layer
//              underneath the business-rule engine
// Guarantee: caches are fully populated exactly once before any rule
//            reads them; independent caches populate concurrently
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - batch model and value types
pub mod domain;

// Cache layer - the four per-run cache containers
pub mod cache;

// Lookup layer - bundled resource + builder
pub mod lookup;

// External layer - reference source seams and subsetting extractor
pub mod external;

// Population layer - orchestration
pub mod population;

// Derived-data providers
pub mod derived;

// Logging
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::{
    AcademicYear, CodedLookup, CodedNestedLookup, FrameworkKey, Learner, LearningDelivery,
    Message, MessageHeader, SimpleLookup, TimeRestrictedLookup, ValidityPeriod,
};

// Caches
pub use cache::{
    CacheError, ExternalDataCache, FileDataCache, InternalDataCache, MessageCache,
};

// Lookup building
pub use lookup::{LookupBuilder, LookupError, EMBEDDED_LOOKUPS};

// External extraction
pub use external::{
    CrossReferenceExtractor, ExternalSourceError, LearnerNumberSource, QualificationSource,
};

// Orchestration
pub use population::{
    PopulationError, PopulationOrchestrator, PopulationState, ValidationContext,
};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Learner Record Validation Service";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
