// ==========================================
// Learner Record Validation - Shared Domain Types
// ==========================================
// Responsibility: lookup category enumerations, framework keys,
//                 validity windows, academic year boundaries
// Note: category code values are opaque keys; their regulatory
//       meaning lives in the rule layer, not here
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// SimpleLookup - integer-coded flat categories
// ==========================================
// Each category maps to a plain set of integer codes in the
// bundled lookup resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimpleLookup {
    AimType,
    CompletionStatus,
    EmploymentStatus,
    FundingModel,
}

impl SimpleLookup {
    /// Static dispatch table: every variant the builder must materialize.
    pub const ALL: [SimpleLookup; 4] = [
        SimpleLookup::AimType,
        SimpleLookup::CompletionStatus,
        SimpleLookup::EmploymentStatus,
        SimpleLookup::FundingModel,
    ];

    /// Category name as it appears in the lookup resource.
    pub fn resource_key(&self) -> &'static str {
        match self {
            SimpleLookup::AimType => "AimType",
            SimpleLookup::CompletionStatus => "CompStatus",
            SimpleLookup::EmploymentStatus => "EmpStat",
            SimpleLookup::FundingModel => "FundModel",
        }
    }
}

impl fmt::Display for SimpleLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource_key())
    }
}

// ==========================================
// CodedLookup - string-coded flat categories
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodedLookup {
    ContactPreference,
    Domicile,
    FinanceType,
}

impl CodedLookup {
    pub const ALL: [CodedLookup; 3] = [
        CodedLookup::ContactPreference,
        CodedLookup::Domicile,
        CodedLookup::FinanceType,
    ];

    pub fn resource_key(&self) -> &'static str {
        match self {
            CodedLookup::ContactPreference => "ContPrefType",
            CodedLookup::Domicile => "Domicile",
            CodedLookup::FinanceType => "FinType",
        }
    }
}

impl fmt::Display for CodedLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource_key())
    }
}

// ==========================================
// CodedNestedLookup - categories with named children
// ==========================================
// Each child names a monitoring type and carries its own
// integer code list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodedNestedLookup {
    DeliveryMonitoring,
    EmploymentMonitoring,
    LearnerMonitoring,
}

impl CodedNestedLookup {
    pub const ALL: [CodedNestedLookup; 3] = [
        CodedNestedLookup::DeliveryMonitoring,
        CodedNestedLookup::EmploymentMonitoring,
        CodedNestedLookup::LearnerMonitoring,
    ];

    pub fn resource_key(&self) -> &'static str {
        match self {
            CodedNestedLookup::DeliveryMonitoring => "LearnDelFAMType",
            CodedNestedLookup::EmploymentMonitoring => "ESMType",
            CodedNestedLookup::LearnerMonitoring => "LearnerFAMType",
        }
    }
}

impl fmt::Display for CodedNestedLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource_key())
    }
}

// ==========================================
// TimeRestrictedLookup - code -> validity window categories
// ==========================================
// Codes carry optional validFrom/validTo attributes; an absent
// bound means the window is open on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRestrictedLookup {
    DisabilityCategory,
    AccommodationType,
    EntryQualification,
}

/// Declared key type of a time-restricted category's codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKeyType {
    Integer,
    Text,
}

impl TimeRestrictedLookup {
    pub const ALL: [TimeRestrictedLookup; 3] = [
        TimeRestrictedLookup::DisabilityCategory,
        TimeRestrictedLookup::AccommodationType,
        TimeRestrictedLookup::EntryQualification,
    ];

    pub fn resource_key(&self) -> &'static str {
        match self {
            TimeRestrictedLookup::DisabilityCategory => "LLDDCat",
            TimeRestrictedLookup::AccommodationType => "AccomCode",
            TimeRestrictedLookup::EntryQualification => "QualEnt3",
        }
    }

    /// Integer-keyed categories must have codes that parse as i32;
    /// a non-numeric code there is a fatal population error.
    pub fn key_type(&self) -> LookupKeyType {
        match self {
            TimeRestrictedLookup::DisabilityCategory => LookupKeyType::Integer,
            TimeRestrictedLookup::AccommodationType => LookupKeyType::Text,
            TimeRestrictedLookup::EntryQualification => LookupKeyType::Text,
        }
    }
}

impl fmt::Display for TimeRestrictedLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource_key())
    }
}

// ==========================================
// ValidityPeriod - [from, to] window for a reference code
// ==========================================
// A missing bound defaults to the minimum/maximum representable
// date. Rules test "is code valid on date X" against this window,
// so the open-ended default must be preserved exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityPeriod {
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
}

impl ValidityPeriod {
    pub fn new(valid_from: Option<NaiveDate>, valid_to: Option<NaiveDate>) -> Self {
        Self {
            valid_from: valid_from.unwrap_or(NaiveDate::MIN),
            valid_to: valid_to.unwrap_or(NaiveDate::MAX),
        }
    }

    /// Inclusive on both bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.valid_from <= date && date <= self.valid_to
    }
}

impl Default for ValidityPeriod {
    fn default() -> Self {
        Self::new(None, None)
    }
}

// ==========================================
// FrameworkKey - (framework, programme type, pathway) tuple
// ==========================================
// Identifies a funding framework. A learning delivery contributes
// a key only when all three components are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameworkKey {
    pub framework_code: i32,
    pub programme_type: i32,
    pub pathway_code: i32,
}

impl fmt::Display for FrameworkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.framework_code, self.programme_type, self.pathway_code
        )
    }
}

// ==========================================
// AcademicYear - collection year calendar boundaries
// ==========================================
// Supplied per collection year by the caller; the builder does not
// hard-code a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYear {
    pub start: NaiveDate,
    pub august_thirty_first: NaiveDate,
    pub january_first: NaiveDate,
    pub end: NaiveDate,
}

impl AcademicYear {
    /// Boundaries for the academic year starting 1 August of `start_year`.
    ///
    /// # Arguments
    /// - start_year: calendar year the collection year opens in
    ///   (e.g. 2025 for the 2025/26 year)
    pub fn for_collection_year(start_year: u16) -> Self {
        let start_year = i32::from(start_year);
        // u16 keeps the year inside chrono's supported range, so
        // from_ymd_opt cannot return None here.
        let ymd = |y: i32, m: u32, d: u32| {
            NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
        };
        Self {
            start: ymd(start_year, 8, 1),
            august_thirty_first: ymd(start_year, 8, 31),
            january_first: ymd(start_year + 1, 1, 1),
            end: ymd(start_year + 1, 7, 31),
        }
    }
}

// ==========================================
// Tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_period_defaults_to_open_window() {
        let period = ValidityPeriod::new(None, None);
        assert_eq!(period.valid_from, NaiveDate::MIN);
        assert_eq!(period.valid_to, NaiveDate::MAX);
        assert!(period.contains(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()));
    }

    #[test]
    fn validity_period_bounds_are_inclusive() {
        let from = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        let period = ValidityPeriod::new(Some(from), Some(to));
        assert!(period.contains(from));
        assert!(period.contains(to));
        assert!(!period.contains(from.pred_opt().unwrap()));
        assert!(!period.contains(to.succ_opt().unwrap()));
    }

    #[test]
    fn academic_year_boundaries() {
        let year = AcademicYear::for_collection_year(2025);
        assert_eq!(year.start, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
        assert_eq!(
            year.august_thirty_first,
            NaiveDate::from_ymd_opt(2025, 8, 31).unwrap()
        );
        assert_eq!(
            year.january_first,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
        assert_eq!(year.end, NaiveDate::from_ymd_opt(2026, 7, 31).unwrap());
    }

    #[test]
    fn dispatch_tables_cover_every_variant() {
        assert_eq!(SimpleLookup::ALL.len(), 4);
        assert_eq!(CodedLookup::ALL.len(), 3);
        assert_eq!(CodedNestedLookup::ALL.len(), 3);
        assert_eq!(TimeRestrictedLookup::ALL.len(), 3);
    }
}
