// ==========================================
// Learner Record Validation - Apprenticeship Programme Provider
// ==========================================
// Responsibility: answer "is this programme type an apprenticeship"
//                 from a static table, and "is this delivery a known
//                 apprenticeship" against the populated external cache
// Note: representative of the derived-data providers consumed by the
//       rule layer; pure, no mutable state
// ==========================================

use crate::cache::ExternalDataCache;
use crate::domain::LearningDelivery;

// ==========================================
// ApprenticeshipProgrammes
// ==========================================
pub struct ApprenticeshipProgrammes;

impl ApprenticeshipProgrammes {
    /// Programme types operated as apprenticeships.
    pub const PROGRAMME_TYPES: [i32; 7] = [2, 3, 20, 21, 22, 23, 25];

    pub fn is_apprenticeship(programme_type: Option<i32>) -> bool {
        programme_type.is_some_and(|p| Self::PROGRAMME_TYPES.contains(&p))
    }

    /// A delivery counts as a known apprenticeship when its programme
    /// type is in the static table and its framework key matched a
    /// row in the external reference cache.
    pub fn is_apprenticeship_delivery(
        external: &ExternalDataCache,
        delivery: &LearningDelivery,
    ) -> bool {
        Self::is_apprenticeship(delivery.programme_type)
            && delivery
                .framework_key()
                .is_some_and(|key| external.framework_for_key(&key).is_some())
    }
}
