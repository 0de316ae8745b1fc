// ==========================================
// Learner Record Validation - External Reference Models
// ==========================================
// Responsibility: reshaped rows from the qualifications catalogue
//                 and the framework register
// Note: source-specific navigation is flattened into three parallel
//       sub-lists per qualification row before it reaches the cache
// ==========================================

use crate::domain::types::FrameworkKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// QualificationDetail - one qualifications-catalogue row
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualificationDetail {
    pub aim_ref: String,
    pub level_code: Option<String>,
    pub effective_from: Option<NaiveDate>,
    pub effective_to: Option<NaiveDate>,
    #[serde(default)]
    pub annual_values: Vec<QualificationAnnualValue>,
    #[serde(default)]
    pub framework_aims: Vec<FrameworkAim>,
    #[serde(default)]
    pub categories: Vec<QualificationCategory>,
}

/// Per-year funding attributes of a qualification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualificationAnnualValue {
    pub effective_from: Option<NaiveDate>,
    pub effective_to: Option<NaiveDate>,
    pub basic_skills: Option<i32>,
    pub full_level_two: Option<i32>,
    pub full_level_three: Option<i32>,
}

/// Membership of an aim in a funding framework.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameworkAim {
    pub aim_ref: String,
    pub framework_code: i32,
    pub programme_type: i32,
    pub pathway_code: i32,
    pub effective_from: Option<NaiveDate>,
    pub effective_to: Option<NaiveDate>,
}

/// Category tagging of a qualification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualificationCategory {
    pub category_ref: i32,
    pub effective_from: Option<NaiveDate>,
    pub effective_to: Option<NaiveDate>,
}

// ==========================================
// FrameworkDetail - one framework-register row
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameworkDetail {
    pub framework_code: i32,
    pub programme_type: i32,
    pub pathway_code: i32,
    pub effective_from: Option<NaiveDate>,
    pub effective_to: Option<NaiveDate>,
    #[serde(default)]
    pub framework_aims: Vec<FrameworkAim>,
    #[serde(default)]
    pub common_components: Vec<FrameworkCommonComponent>,
}

impl FrameworkDetail {
    pub fn key(&self) -> FrameworkKey {
        FrameworkKey {
            framework_code: self.framework_code,
            programme_type: self.programme_type,
            pathway_code: self.pathway_code,
        }
    }
}

/// Common component (e.g. functional skills) attached to a framework.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameworkCommonComponent {
    pub common_component: i32,
    pub effective_from: Option<NaiveDate>,
    pub effective_to: Option<NaiveDate>,
}
