//! Cross-locale completeness validation
//!
//! Runs offline (tests, CI) over loaded bundles; the runtime session never
//! depends on it.

use crate::bundle::{Category, TranslationBundle};
use crate::locale::Locale;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::debug;

/// A key present in at least one locale but missing from another
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingKey {
    pub locale: Locale,
    pub key: String,
}

impl fmt::Display for MissingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.locale.code(), self.key)
    }
}

/// Outcome of a completeness run over a set of locale bundles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub missing_keys: Vec<MissingKey>,
    pub errors: Vec<String>,
}

/// Validate that every string-bearing key is present in every supported
/// locale.
///
/// The key universe is the union of string-leaf paths across all supplied
/// bundles. A supported locale absent from `bundles` is reported once as an
/// error instead of once per key; a category whose value is not an object is
/// reported as an error for that locale and validation continues with the
/// rest.
pub fn validate(bundles: &HashMap<Locale, TranslationBundle>) -> ValidationReport {
    let mut errors = Vec::new();

    let mut universe = BTreeSet::new();
    for bundle in bundles.values() {
        universe.extend(bundle.string_paths());
    }
    debug!("Validating {} keys across locales", universe.len());

    let mut missing_keys = Vec::new();
    for locale in Locale::all() {
        let Some(bundle) = bundles.get(&locale) else {
            errors.push(format!(
                "locale {} is missing from the supplied bundles",
                locale.code()
            ));
            continue;
        };

        for category in Category::all() {
            if !bundle.category(category).is_object() {
                errors.push(format!(
                    "locale {} category '{}' is not an object",
                    locale.code(),
                    category.as_str()
                ));
            }
        }

        for key in &universe {
            if bundle.resolve(key).is_none() {
                missing_keys.push(MissingKey {
                    locale,
                    key: key.clone(),
                });
            }
        }
    }

    ValidationReport {
        is_valid: missing_keys.is_empty() && errors.is_empty(),
        missing_keys,
        errors,
    }
}
