// ==========================================
// Test data builders - for integration tests
// ==========================================

use chrono::NaiveDate;
use learner_validation::domain::{Learner, LearningDelivery, Message, MessageHeader};
use learner_validation::external::{FrameworkAim, FrameworkDetail, QualificationDetail};

// ==========================================
// Learner builder
// ==========================================

pub struct LearnerBuilder {
    learner_ref: String,
    learner_number: Option<i64>,
    learning_deliveries: Vec<LearningDelivery>,
}

impl LearnerBuilder {
    pub fn new(learner_ref: &str) -> Self {
        Self {
            learner_ref: learner_ref.to_string(),
            learner_number: None,
            learning_deliveries: Vec::new(),
        }
    }

    pub fn learner_number(mut self, learner_number: i64) -> Self {
        self.learner_number = Some(learner_number);
        self
    }

    pub fn delivery(mut self, delivery: LearningDelivery) -> Self {
        self.learning_deliveries.push(delivery);
        self
    }

    pub fn build(self) -> Learner {
        Learner {
            learner_ref: self.learner_ref,
            learner_number: self.learner_number,
            learning_deliveries: self.learning_deliveries,
            ..Default::default()
        }
    }
}

// ==========================================
// Delivery helpers
// ==========================================

pub fn delivery_with_aim(aim_seq_number: i32, aim_ref: &str) -> LearningDelivery {
    LearningDelivery {
        aim_seq_number,
        aim_ref: Some(aim_ref.to_string()),
        ..Default::default()
    }
}

pub fn delivery_with_framework(
    aim_seq_number: i32,
    aim_ref: &str,
    framework_code: i32,
    programme_type: i32,
    pathway_code: i32,
) -> LearningDelivery {
    LearningDelivery {
        aim_seq_number,
        aim_ref: Some(aim_ref.to_string()),
        framework_code: Some(framework_code),
        programme_type: Some(programme_type),
        pathway_code: Some(pathway_code),
        ..Default::default()
    }
}

// ==========================================
// Message helper
// ==========================================

pub fn message_with_learners(learners: Vec<Learner>) -> Message {
    Message {
        header: MessageHeader {
            preparation_date: NaiveDate::from_ymd_opt(2025, 9, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0),
            provider_id: Some(10003456),
        },
        learners,
        ..Default::default()
    }
}

// ==========================================
// External reference row helpers
// ==========================================

pub fn qualification(aim_ref: &str) -> QualificationDetail {
    QualificationDetail {
        aim_ref: aim_ref.to_string(),
        level_code: Some("2".to_string()),
        ..Default::default()
    }
}

pub fn framework_aim(aim_ref: &str, framework_code: i32, programme_type: i32, pathway_code: i32) -> FrameworkAim {
    FrameworkAim {
        aim_ref: aim_ref.to_string(),
        framework_code,
        programme_type,
        pathway_code,
        ..Default::default()
    }
}

pub fn framework(
    framework_code: i32,
    programme_type: i32,
    pathway_code: i32,
    framework_aims: Vec<FrameworkAim>,
) -> FrameworkDetail {
    FrameworkDetail {
        framework_code,
        programme_type,
        pathway_code,
        framework_aims,
        ..Default::default()
    }
}
