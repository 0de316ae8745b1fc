// ==========================================
// Learner Record Validation - Batch Domain Model
// ==========================================
// Responsibility: the parsed input batch ("the message") for one
//                 validation run
// Ownership: owned exclusively by the run, immutable once parsed;
//            the population layer wraps it in Arc and never mutates it
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// MessageHeader - batch-level header fields
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageHeader {
    pub preparation_date: Option<NaiveDateTime>, // when the batch file was prepared
    pub provider_id: Option<i64>,                // submitting organisation identifier
}

// ==========================================
// Message - the full parsed batch
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub header: MessageHeader,
    #[serde(default)]
    pub learners: Vec<Learner>,
    #[serde(default)]
    pub destination_records: Vec<DestinationAndProgression>,
}

// ==========================================
// Learner - one learner with nested sub-records
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Learner {
    pub learner_ref: String,             // provider-scoped learner reference
    pub learner_number: Option<i64>,     // national learner number
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub learning_deliveries: Vec<LearningDelivery>,
    #[serde(default)]
    pub employment_statuses: Vec<EmploymentStatus>,
    #[serde(default)]
    pub monitorings: Vec<LearnerMonitoring>,
}

// ==========================================
// LearningDelivery - one aim/course record
// ==========================================
// Contract fields are optional at this layer; presence rules are
// the business rules' concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningDelivery {
    pub aim_seq_number: i32,             // position within the learner's deliveries
    pub aim_ref: Option<String>,         // learning aim reference code
    pub aim_type: Option<i32>,
    pub funding_model: Option<i32>,
    pub programme_type: Option<i32>,
    pub framework_code: Option<i32>,
    pub pathway_code: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub planned_end_date: Option<NaiveDate>,
    pub completion_status: Option<i32>,
    #[serde(default)]
    pub monitorings: Vec<DeliveryMonitoring>,
}

impl LearningDelivery {
    /// The framework key for this delivery, present only when all
    /// three components are supplied.
    pub fn framework_key(&self) -> Option<crate::domain::types::FrameworkKey> {
        match (self.framework_code, self.programme_type, self.pathway_code) {
            (Some(framework_code), Some(programme_type), Some(pathway_code)) => {
                Some(crate::domain::types::FrameworkKey {
                    framework_code,
                    programme_type,
                    pathway_code,
                })
            }
            _ => None,
        }
    }
}

// ==========================================
// Monitoring and employment sub-records
// ==========================================

/// Delivery-level monitoring record (type + code pair).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryMonitoring {
    pub fam_type: String,
    pub fam_code: String,
}

/// Learner-level monitoring record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearnerMonitoring {
    pub fam_type: String,
    pub fam_code: String,
}

/// Employment status at a point in time, with its own monitoring list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmploymentStatus {
    pub status_code: Option<i32>,
    pub date_applies: Option<NaiveDate>,
    #[serde(default)]
    pub monitorings: Vec<EmploymentMonitoring>,
}

/// Employment status monitoring record (typed integer code).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmploymentMonitoring {
    pub esm_type: String,
    pub esm_code: i32,
}

// ==========================================
// DestinationAndProgression - post-programme outcomes
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationAndProgression {
    pub learner_ref: String,
    pub learner_number: Option<i64>,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub outcome_type: Option<String>,
    pub outcome_code: Option<i32>,
    pub start_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_key_requires_all_three_components() {
        let mut delivery = LearningDelivery {
            framework_code: Some(10),
            programme_type: Some(2),
            pathway_code: Some(1),
            ..Default::default()
        };
        assert!(delivery.framework_key().is_some());

        delivery.pathway_code = None;
        assert!(delivery.framework_key().is_none());
    }
}
