// ==========================================
// Learner Record Validation - File Data Cache
// ==========================================
// Responsibility: flat O(1) projection of batch header fields and
//                 top-level collections, avoiding repeated traversal
//                 of the batch's nested shape
// Tolerance: an absent batch yields the documented empty default,
//            never an error - some run modes validate a batch that
//            failed to parse and still execute file-level rules
// ==========================================

use crate::domain::{DestinationAndProgression, Learner, Message};
use chrono::NaiveDateTime;
use std::sync::Arc;

// ==========================================
// FileDataCache - per-run header projection
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileDataCache {
    preparation_date: Option<NaiveDateTime>,
    provider_id: Option<i64>,
    message: Option<Arc<Message>>,
}

impl FileDataCache {
    /// Pure projection off the batch; no filtering, no validation.
    pub fn populate(message: Option<&Arc<Message>>) -> Self {
        match message {
            Some(message) => Self {
                preparation_date: message.header.preparation_date,
                provider_id: message.header.provider_id,
                message: Some(Arc::clone(message)),
            },
            None => Self::default(),
        }
    }

    pub fn preparation_date(&self) -> Option<NaiveDateTime> {
        self.preparation_date
    }

    pub fn provider_id(&self) -> Option<i64> {
        self.provider_id
    }

    /// The batch's learner list; empty when no batch was supplied.
    pub fn learners(&self) -> &[Learner] {
        self.message
            .as_deref()
            .map(|m| m.learners.as_slice())
            .unwrap_or(&[])
    }

    /// The batch's destination-and-progression records; empty when
    /// no batch was supplied.
    pub fn destination_records(&self) -> &[DestinationAndProgression] {
        self.message
            .as_deref()
            .map(|m| m.destination_records.as_slice())
            .unwrap_or(&[])
    }
}
