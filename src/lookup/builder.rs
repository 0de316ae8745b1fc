// ==========================================
// Learner Record Validation - Reference Lookup Builder
// ==========================================
// Responsibility: compile the bundled resource into the four lookup
//                 shapes of InternalDataCache
// Red line: a declared category missing from the resource, or a code
//           that fails its declared type, aborts population - a
//           partially built lookup would silently under-validate
//           the whole batch
// ==========================================

use crate::cache::InternalDataCache;
use crate::domain::types::{
    AcademicYear, CodedLookup, CodedNestedLookup, LookupKeyType, SimpleLookup,
    TimeRestrictedLookup, ValidityPeriod,
};
use crate::lookup::resource::{LookupCategory, LookupResource};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

// ==========================================
// LookupError - fatal lookup population errors
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("lookup resource is not valid JSON: {0}")]
    MalformedResource(String),

    #[error("lookup category '{category}' declared but missing from resource")]
    MissingCategory { category: &'static str },

    #[error("code '{code}' in category '{category}' does not parse as an integer")]
    InvalidCode {
        category: &'static str,
        code: String,
    },
}

/// Result alias for lookup building.
pub type LookupResult<T> = Result<T, LookupError>;

// ==========================================
// LookupBuilder
// ==========================================
pub struct LookupBuilder {
    academic_year: AcademicYear,
}

impl LookupBuilder {
    /// # Arguments
    /// - academic_year: calendar boundaries for the collection year
    ///   under validation, supplied by the caller
    pub fn new(academic_year: AcademicYear) -> Self {
        Self { academic_year }
    }

    /// Compile `resource_json` into a fully populated cache.
    ///
    /// Every category named by the four category-kind enumerations is
    /// materialized via the ALL dispatch tables; none may be absent.
    pub fn build(&self, resource_json: &str) -> LookupResult<InternalDataCache> {
        let resource = LookupResource::from_json(resource_json)?;

        let mut simple_sets = HashMap::new();
        for lookup in SimpleLookup::ALL {
            let category = required_category(&resource, lookup.resource_key())?;
            let codes = integer_codes(lookup.resource_key(), &category.options)?;
            debug!(category = %lookup, codes = codes.len(), "built simple lookup");
            simple_sets.insert(lookup, codes);
        }

        let mut coded_sets = HashMap::new();
        for lookup in CodedLookup::ALL {
            let category = required_category(&resource, lookup.resource_key())?;
            let codes: HashSet<String> =
                category.options.iter().map(|o| o.code.clone()).collect();
            debug!(category = %lookup, codes = codes.len(), "built coded lookup");
            coded_sets.insert(lookup, codes);
        }

        let mut coded_nested_sets = HashMap::new();
        for lookup in CodedNestedLookup::ALL {
            let category = required_category(&resource, lookup.resource_key())?;
            let mut children = HashMap::new();
            for (child_name, child) in &category.children {
                let codes = integer_codes(lookup.resource_key(), &child.options)?;
                children.insert(child_name.clone(), codes);
            }
            debug!(category = %lookup, children = children.len(), "built nested lookup");
            coded_nested_sets.insert(lookup, children);
        }

        let mut validity_lookups = HashMap::new();
        for lookup in TimeRestrictedLookup::ALL {
            let category = required_category(&resource, lookup.resource_key())?;
            let windows = validity_windows(lookup, category)?;
            debug!(category = %lookup, codes = windows.len(), "built validity lookup");
            validity_lookups.insert(lookup, windows);
        }

        // The two direct maps reuse the already-validated generic
        // windows, re-keyed to their natural types.
        let disability_categories = validity_lookups
            [&TimeRestrictedLookup::DisabilityCategory]
            .iter()
            .map(|(code, period)| {
                code.parse::<i32>()
                    .map(|code| (code, *period))
                    .map_err(|_| LookupError::InvalidCode {
                        category: TimeRestrictedLookup::DisabilityCategory.resource_key(),
                        code: code.clone(),
                    })
            })
            .collect::<LookupResult<HashMap<i32, ValidityPeriod>>>()?;

        let accommodation_types =
            validity_lookups[&TimeRestrictedLookup::AccommodationType].clone();

        Ok(InternalDataCache {
            simple_sets,
            coded_sets,
            coded_nested_sets,
            validity_lookups,
            disability_categories,
            accommodation_types,
            academic_year: self.academic_year,
        })
    }
}

// ==========================================
// Helpers
// ==========================================

fn required_category<'a>(
    resource: &'a LookupResource,
    category: &'static str,
) -> LookupResult<&'a LookupCategory> {
    resource
        .category(category)
        .ok_or(LookupError::MissingCategory { category })
}

/// Parse option codes as integers; a non-numeric code in an integer
/// category is fatal.
fn integer_codes(
    category: &'static str,
    options: &[crate::lookup::resource::LookupOption],
) -> LookupResult<HashSet<i32>> {
    options
        .iter()
        .map(|option| {
            option
                .code
                .parse::<i32>()
                .map_err(|_| LookupError::InvalidCode {
                    category,
                    code: option.code.clone(),
                })
        })
        .collect()
}

/// Build code -> window, validating integer-keyed categories' codes up
/// front so the failure surfaces at population time.
fn validity_windows(
    lookup: TimeRestrictedLookup,
    category: &LookupCategory,
) -> LookupResult<HashMap<String, ValidityPeriod>> {
    let mut windows = HashMap::new();
    for option in &category.options {
        if lookup.key_type() == LookupKeyType::Integer && option.code.parse::<i32>().is_err() {
            return Err(LookupError::InvalidCode {
                category: lookup.resource_key(),
                code: option.code.clone(),
            });
        }
        windows.insert(
            option.code.clone(),
            ValidityPeriod::new(option.valid_from, option.valid_to),
        );
    }
    Ok(windows)
}
