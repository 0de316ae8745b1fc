// ==========================================
// Learner Record Validation - External Reference Layer
// ==========================================
// Responsibility: source seams, row models, and the extractor that
//                 subsets external data down to the batch's demand
// ==========================================

pub mod extractor;
pub mod in_memory;
pub mod models;
pub mod sources;

pub use extractor::CrossReferenceExtractor;
pub use in_memory::{
    FailingQualificationSource, InMemoryLearnerNumberSource, InMemoryQualificationSource,
};
pub use models::{
    FrameworkAim, FrameworkCommonComponent, FrameworkDetail, QualificationAnnualValue,
    QualificationCategory, QualificationDetail,
};
pub use sources::{ExternalSourceError, LearnerNumberSource, QualificationSource, SourceResult};
