// ==========================================
// Learner Record Validation - External Data Cache
// ==========================================
// Responsibility: the subset of external reference data referenced
//                 by the current batch, reshaped for O(1) rule access
// Note: this is a deliberate subsetting cache, not a mirror - a code
//       absent here is a validatable condition downstream, not an error
// ==========================================

use crate::domain::types::FrameworkKey;
use crate::external::models::{FrameworkDetail, QualificationDetail};
use std::collections::{HashMap, HashSet};

// ==========================================
// ExternalDataCache - per-run external reference subset
// ==========================================
// Written once by CrossReferenceExtractor, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalDataCache {
    pub(crate) learning_deliveries: HashMap<String, QualificationDetail>,
    pub(crate) frameworks: Vec<FrameworkDetail>,
    pub(crate) learner_numbers: HashSet<i64>,
}

impl ExternalDataCache {
    /// Qualification detail for an aim reference, if the batch
    /// referenced it and the external source had a row.
    pub fn learning_delivery(&self, aim_ref: &str) -> Option<&QualificationDetail> {
        self.learning_deliveries.get(aim_ref)
    }

    pub fn learning_deliveries(&self) -> &HashMap<String, QualificationDetail> {
        &self.learning_deliveries
    }

    pub fn frameworks(&self) -> &[FrameworkDetail] {
        &self.frameworks
    }

    /// First framework row matching the exact key tuple.
    pub fn framework_for_key(&self, key: &FrameworkKey) -> Option<&FrameworkDetail> {
        self.frameworks.iter().find(|f| f.key() == *key)
    }

    /// Membership test against the learner-number registry subset.
    pub fn contains_learner_number(&self, learner_number: i64) -> bool {
        self.learner_numbers.contains(&learner_number)
    }

    pub fn learner_numbers(&self) -> &HashSet<i64> {
        &self.learner_numbers
    }
}
