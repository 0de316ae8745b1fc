// ==========================================
// Learner Record Validation - Cross-Reference Extractor
// ==========================================
// Responsibility: compute the batch's demand sets and pull only the
//                 matching rows from the external sources into the
//                 external data cache
// Red line: never load the full external datasets; every query is
//           scoped to keys the batch actually references
// ==========================================

use crate::cache::ExternalDataCache;
use crate::domain::types::FrameworkKey;
use crate::domain::Message;
use crate::external::sources::{LearnerNumberSource, QualificationSource, SourceResult};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

// ==========================================
// CrossReferenceExtractor
// ==========================================
// Sources are supplied at construction; a missing source is a wiring
// failure there, not a per-row failure during extraction.
pub struct CrossReferenceExtractor<Q, L>
where
    Q: QualificationSource,
    L: LearnerNumberSource,
{
    qualification_source: Arc<Q>,
    learner_number_source: Arc<L>,
}

impl<Q, L> CrossReferenceExtractor<Q, L>
where
    Q: QualificationSource,
    L: LearnerNumberSource,
{
    pub fn new(qualification_source: Arc<Q>, learner_number_source: Arc<L>) -> Self {
        Self {
            qualification_source,
            learner_number_source,
        }
    }

    /// Build the external cache for one batch.
    ///
    /// The three queries are independent and run concurrently; the
    /// cache is only constructed once all three succeed.
    pub async fn extract(&self, message: &Message) -> SourceResult<ExternalDataCache> {
        let aim_refs = aim_ref_demand_set(message);
        let framework_keys = framework_key_demand_set(message);
        let learner_numbers = learner_number_demand_set(message);
        debug!(
            aim_refs = aim_refs.len(),
            framework_keys = framework_keys.len(),
            learner_numbers = learner_numbers.len(),
            "computed demand sets"
        );

        let (qualifications, frameworks, matched_numbers) = tokio::try_join!(
            self.qualification_source.qualifications_for_aims(&aim_refs),
            self.qualification_source.frameworks_for_keys(&framework_keys),
            self.learner_number_source
                .existing_learner_numbers(&learner_numbers),
        )?;

        let learning_deliveries: HashMap<String, _> = qualifications
            .into_iter()
            .map(|q| (q.aim_ref.clone(), q))
            .collect();

        // Framework aims not referenced by the batch are dropped even
        // when the framework itself matched.
        let frameworks = frameworks
            .into_iter()
            .map(|mut framework| {
                framework
                    .framework_aims
                    .retain(|aim| aim_refs.contains(&aim.aim_ref));
                framework
            })
            .collect();

        Ok(ExternalDataCache {
            learning_deliveries,
            frameworks,
            learner_numbers: matched_numbers,
        })
    }
}

// ==========================================
// Demand set computation
// ==========================================

/// Distinct non-null aim references across all learning deliveries.
pub fn aim_ref_demand_set(message: &Message) -> HashSet<String> {
    message
        .learners
        .iter()
        .flat_map(|learner| &learner.learning_deliveries)
        .filter_map(|delivery| delivery.aim_ref.clone())
        .collect()
}

/// Distinct complete (framework, programme type, pathway) tuples.
pub fn framework_key_demand_set(message: &Message) -> HashSet<FrameworkKey> {
    message
        .learners
        .iter()
        .flat_map(|learner| &learner.learning_deliveries)
        .filter_map(|delivery| delivery.framework_key())
        .collect()
}

/// Distinct learner numbers across the batch.
pub fn learner_number_demand_set(message: &Message) -> HashSet<i64> {
    message
        .learners
        .iter()
        .filter_map(|learner| learner.learner_number)
        .collect()
}
