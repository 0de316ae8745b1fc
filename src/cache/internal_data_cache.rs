// ==========================================
// Learner Record Validation - Internal Data Cache
// ==========================================
// Responsibility: read-optimized reference lookups compiled from the
//                 bundled resource, in four shapes plus two dedicated
//                 validity maps and the academic year value
// Invariant: every category enumerated in the four category-kind
//            enumerations has an entry after population; the builder
//            fails rather than leave one out
// ==========================================

use crate::domain::types::{
    AcademicYear, CodedLookup, CodedNestedLookup, SimpleLookup, TimeRestrictedLookup,
    ValidityPeriod,
};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

// ==========================================
// InternalDataCache - reference lookup container
// ==========================================
// Written once by LookupBuilder, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalDataCache {
    pub(crate) simple_sets: HashMap<SimpleLookup, HashSet<i32>>,
    pub(crate) coded_sets: HashMap<CodedLookup, HashSet<String>>,
    pub(crate) coded_nested_sets: HashMap<CodedNestedLookup, HashMap<String, HashSet<i32>>>,
    pub(crate) validity_lookups: HashMap<TimeRestrictedLookup, HashMap<String, ValidityPeriod>>,
    // Two physically distinct maps used directly by rules, typed to
    // their natural key types.
    pub(crate) disability_categories: HashMap<i32, ValidityPeriod>,
    pub(crate) accommodation_types: HashMap<String, ValidityPeriod>,
    pub(crate) academic_year: AcademicYear,
}

impl InternalDataCache {
    // ===== Simple (integer) lookups =====

    pub fn simple_codes(&self, lookup: SimpleLookup) -> Option<&HashSet<i32>> {
        self.simple_sets.get(&lookup)
    }

    pub fn contains_simple(&self, lookup: SimpleLookup, code: i32) -> bool {
        self.simple_sets
            .get(&lookup)
            .is_some_and(|codes| codes.contains(&code))
    }

    // ===== Coded (string) lookups =====

    pub fn coded_codes(&self, lookup: CodedLookup) -> Option<&HashSet<String>> {
        self.coded_sets.get(&lookup)
    }

    pub fn contains_coded(&self, lookup: CodedLookup, code: &str) -> bool {
        self.coded_sets
            .get(&lookup)
            .is_some_and(|codes| codes.contains(code))
    }

    // ===== Nested coded lookups =====

    pub fn nested_codes(
        &self,
        lookup: CodedNestedLookup,
    ) -> Option<&HashMap<String, HashSet<i32>>> {
        self.coded_nested_sets.get(&lookup)
    }

    pub fn contains_nested(&self, lookup: CodedNestedLookup, child: &str, code: i32) -> bool {
        self.coded_nested_sets
            .get(&lookup)
            .and_then(|children| children.get(child))
            .is_some_and(|codes| codes.contains(&code))
    }

    // ===== Time-restricted lookups =====

    pub fn validity(&self, lookup: TimeRestrictedLookup) -> Option<&HashMap<String, ValidityPeriod>> {
        self.validity_lookups.get(&lookup)
    }

    /// "Is `code` valid on `date`" for the given category; false for
    /// unknown codes.
    pub fn is_valid_on(&self, lookup: TimeRestrictedLookup, code: &str, date: NaiveDate) -> bool {
        self.validity_lookups
            .get(&lookup)
            .and_then(|codes| codes.get(code))
            .is_some_and(|period| period.contains(date))
    }

    /// Dedicated integer-keyed disability category map.
    pub fn disability_categories(&self) -> &HashMap<i32, ValidityPeriod> {
        &self.disability_categories
    }

    /// Dedicated string-keyed accommodation type map.
    pub fn accommodation_types(&self) -> &HashMap<String, ValidityPeriod> {
        &self.accommodation_types
    }

    pub fn academic_year(&self) -> AcademicYear {
        self.academic_year
    }
}
