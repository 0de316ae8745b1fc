// ==========================================
// Learner Record Validation - Lookup Resource Model
// ==========================================
// Responsibility: serde model of the bundled category/option
//                 reference resource
// Shape: category name -> { options[], children{ name -> options[] } }
//        each option carries a code and optional validFrom/validTo
// ==========================================

use crate::lookup::builder::LookupError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

// ==========================================
// LookupResource - parsed resource tree
// ==========================================
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResource {
    pub categories: HashMap<String, LookupCategory>,
}

impl LookupResource {
    /// Parse the raw resource; an unparseable resource is a fatal
    /// population error.
    pub fn from_json(raw: &str) -> Result<Self, LookupError> {
        serde_json::from_str(raw).map_err(|e| LookupError::MalformedResource(e.to_string()))
    }

    pub fn category(&self, name: &str) -> Option<&LookupCategory> {
        self.categories.get(name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupCategory {
    #[serde(default)]
    pub options: Vec<LookupOption>,
    #[serde(default)]
    pub children: HashMap<String, LookupChild>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupChild {
    #[serde(default)]
    pub options: Vec<LookupOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupOption {
    pub code: String,
    #[serde(default, rename = "validFrom")]
    pub valid_from: Option<NaiveDate>,
    #[serde(default, rename = "validTo")]
    pub valid_to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_options_with_optional_window_bounds() {
        let raw = r#"{
            "categories": {
                "LLDDCat": {
                    "options": [
                        { "code": "1", "validTo": "2015-07-31" },
                        { "code": "4" }
                    ]
                }
            }
        }"#;
        let resource = LookupResource::from_json(raw).unwrap();
        let category = resource.category("LLDDCat").unwrap();
        assert_eq!(category.options.len(), 2);
        assert_eq!(
            category.options[0].valid_to,
            Some(NaiveDate::from_ymd_opt(2015, 7, 31).unwrap())
        );
        assert_eq!(category.options[1].valid_from, None);
        assert_eq!(category.options[1].valid_to, None);
    }

    #[test]
    fn malformed_resource_is_an_error() {
        let err = LookupResource::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LookupError::MalformedResource(_)));
    }
}
