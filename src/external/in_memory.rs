// ==========================================
// Learner Record Validation - In-Memory External Sources
// ==========================================
// Responsibility: reference-data sources backed by plain collections
// Use: the CLI runner loads these from a JSON file; the integration
//      tests construct them directly
// ==========================================

use crate::domain::types::FrameworkKey;
use crate::external::models::{FrameworkDetail, QualificationDetail};
use crate::external::sources::{
    ExternalSourceError, LearnerNumberSource, QualificationSource, SourceResult,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// InMemoryQualificationSource
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryQualificationSource {
    #[serde(default)]
    pub qualifications: Vec<QualificationDetail>,
    #[serde(default)]
    pub frameworks: Vec<FrameworkDetail>,
}

impl InMemoryQualificationSource {
    pub fn new(
        qualifications: Vec<QualificationDetail>,
        frameworks: Vec<FrameworkDetail>,
    ) -> Self {
        Self {
            qualifications,
            frameworks,
        }
    }
}

#[async_trait]
impl QualificationSource for InMemoryQualificationSource {
    async fn qualifications_for_aims(
        &self,
        aim_refs: &HashSet<String>,
    ) -> SourceResult<Vec<QualificationDetail>> {
        Ok(self
            .qualifications
            .iter()
            .filter(|q| aim_refs.contains(&q.aim_ref))
            .cloned()
            .collect())
    }

    async fn frameworks_for_keys(
        &self,
        keys: &HashSet<FrameworkKey>,
    ) -> SourceResult<Vec<FrameworkDetail>> {
        Ok(self
            .frameworks
            .iter()
            .filter(|f| keys.contains(&f.key()))
            .cloned()
            .collect())
    }
}

// ==========================================
// InMemoryLearnerNumberSource
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryLearnerNumberSource {
    #[serde(default)]
    pub registry: HashSet<i64>,
}

impl InMemoryLearnerNumberSource {
    pub fn new(registry: HashSet<i64>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl LearnerNumberSource for InMemoryLearnerNumberSource {
    async fn existing_learner_numbers(
        &self,
        learner_numbers: &HashSet<i64>,
    ) -> SourceResult<HashSet<i64>> {
        Ok(self.registry.intersection(learner_numbers).copied().collect())
    }
}

// ==========================================
// FailingQualificationSource - error-path test double
// ==========================================
// Always fails, for exercising the orchestrator's failure handling.
#[derive(Debug, Clone, Default)]
pub struct FailingQualificationSource;

#[async_trait]
impl QualificationSource for FailingQualificationSource {
    async fn qualifications_for_aims(
        &self,
        _aim_refs: &HashSet<String>,
    ) -> SourceResult<Vec<QualificationDetail>> {
        Err(ExternalSourceError::QualificationQuery(
            "catalogue unavailable".to_string(),
        ))
    }

    async fn frameworks_for_keys(
        &self,
        _keys: &HashSet<FrameworkKey>,
    ) -> SourceResult<Vec<FrameworkDetail>> {
        Err(ExternalSourceError::FrameworkQuery(
            "register unavailable".to_string(),
        ))
    }
}
