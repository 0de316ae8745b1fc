// ==========================================
// Learner Record Validation - Message Cache
// ==========================================
// Responsibility: single-slot holder for the parsed batch,
//                 set exactly once per run
// Note: single assignment is enforced; a second set is an error
//       rather than a silent replace, so rule results cannot
//       depend on a half-replaced batch
// ==========================================

use crate::cache::error::{CacheError, CacheResult};
use crate::domain::Message;
use std::sync::Arc;

// ==========================================
// MessageCache - one slot, one run
// ==========================================
#[derive(Debug, Default)]
pub struct MessageCache {
    slot: Option<Arc<Message>>,
}

impl MessageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the batch for this run.
    ///
    /// # Returns
    /// - Err(CacheError::AlreadyPopulated): a batch is already held
    pub fn set(&mut self, message: Arc<Message>) -> CacheResult<()> {
        if self.slot.is_some() {
            return Err(CacheError::AlreadyPopulated);
        }
        self.slot = Some(message);
        Ok(())
    }

    /// The currently held batch.
    ///
    /// # Returns
    /// - Err(CacheError::NotPopulated): called before `set`
    pub fn get(&self) -> CacheResult<&Arc<Message>> {
        self.slot.as_ref().ok_or(CacheError::NotPopulated)
    }

    pub fn is_populated(&self) -> bool {
        self.slot.is_some()
    }
}
