// ==========================================
// Learner Record Validation - External Source Traits
// ==========================================
// Responsibility: seams over the two external reference services
// Contract: every query takes a key set and matches any key in it;
//           an empty set matches nothing. Backends are free to
//           implement the bulk fetch with a batched query, an index,
//           or an in-memory filter.
// ==========================================

use crate::domain::types::FrameworkKey;
use crate::external::models::{FrameworkDetail, QualificationDetail};
use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

// ==========================================
// ExternalSourceError
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExternalSourceError {
    #[error("qualifications catalogue query failed: {0}")]
    QualificationQuery(String),

    #[error("framework register query failed: {0}")]
    FrameworkQuery(String),

    #[error("learner number registry query failed: {0}")]
    RegistryQuery(String),
}

/// Result alias for external source queries.
pub type SourceResult<T> = Result<T, ExternalSourceError>;

// ==========================================
// QualificationSource Trait
// ==========================================
// Implementors: InMemoryQualificationSource (bundled), service-backed
// sources in deployment
#[async_trait]
pub trait QualificationSource: Send + Sync {
    /// Rows whose aim reference is in `aim_refs`; an empty set
    /// matches nothing. Unmatched refs are simply absent from the
    /// result, never an error.
    async fn qualifications_for_aims(
        &self,
        aim_refs: &HashSet<String>,
    ) -> SourceResult<Vec<QualificationDetail>>;

    /// Rows whose (framework, programme type, pathway) tuple equals
    /// any key in `keys`; an empty set matches nothing.
    async fn frameworks_for_keys(
        &self,
        keys: &HashSet<FrameworkKey>,
    ) -> SourceResult<Vec<FrameworkDetail>>;
}

// ==========================================
// LearnerNumberSource Trait
// ==========================================
#[async_trait]
pub trait LearnerNumberSource: Send + Sync {
    /// The subset of `learner_numbers` known to the registry.
    async fn existing_learner_numbers(
        &self,
        learner_numbers: &HashSet<i64>,
    ) -> SourceResult<HashSet<i64>>;
}
