//! Bundle loading from per-locale, per-category JSON resources

use crate::bundle::{Category, TranslationBundle};
use crate::error::{I18nError, I18nResult};
use crate::locale::Locale;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Deepest object nesting accepted in a category resource. JSON input
/// cannot be cyclic, so a depth cap is what remains of guarding against
/// structures too pathological to serialize back out.
const MAX_NESTING_DEPTH: usize = 32;

/// Loads translation bundles from `<base_dir>/<locale>/<category>.json`
#[derive(Debug, Clone)]
pub struct BundleLoader {
    /// Base directory for locale resources
    base_dir: PathBuf,
}

impl BundleLoader {
    /// Create a new BundleLoader
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the base directory for resources
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Load a bundle for a locale named by an arbitrary tag.
    ///
    /// This is the argument-validating entry point: an empty or unsupported
    /// tag is rejected so the caller can decide how to recover.
    pub async fn load_tag(&self, tag: &str) -> I18nResult<TranslationBundle> {
        match Locale::from_tag(tag) {
            Some(locale) => self.load(locale).await,
            None => Err(I18nError::UnsupportedLocale {
                tag: tag.to_string(),
            }),
        }
    }

    /// Load a locale's bundle.
    ///
    /// The four categories load concurrently and fail independently: a
    /// category that cannot be read, parsed, or shape-validated is logged
    /// and replaced by an empty object. Only when every category fails does
    /// the whole load fail, which is what a missing locale directory
    /// produces.
    pub async fn load(&self, locale: Locale) -> I18nResult<TranslationBundle> {
        debug!("Loading bundle for locale: {}", locale.code());

        let loads = Category::all().map(|category| self.load_category(locale, category));
        let results = futures::future::join_all(loads).await;

        let mut categories = Map::new();
        let mut failures = 0usize;
        for (category, result) in Category::all().into_iter().zip(results) {
            let value = match result {
                Ok(value) => value,
                Err(err) => {
                    warn!(
                        "Category '{}' failed to load for {}: {}",
                        category.as_str(),
                        locale.code(),
                        err
                    );
                    failures += 1;
                    Value::Object(Map::new())
                }
            };
            categories.insert(category.as_str().to_string(), value);
        }

        if failures == Category::all().len() {
            return Err(I18nError::BundleUnavailable {
                locale: locale.code().to_string(),
            });
        }

        info!(
            "Loaded bundle for {} ({} of {} categories)",
            locale.code(),
            Category::all().len() - failures,
            Category::all().len()
        );
        Ok(TranslationBundle::from_parts(categories))
    }

    /// Load and validate a single category resource
    async fn load_category(&self, locale: Locale, category: Category) -> I18nResult<Value> {
        let path = self
            .base_dir
            .join(locale.short_code())
            .join(category.resource_file());
        let display_path = path.to_string_lossy().to_string();

        let content =
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|_| I18nError::ResourceLoad {
                    path: display_path.clone(),
                })?;

        let value: Value = serde_json::from_str(&content).map_err(|err| I18nError::Parse {
            path: display_path.clone(),
            message: err.to_string(),
        })?;

        validate_shape(&value, &display_path)?;
        Ok(value)
    }
}

fn validate_shape(value: &Value, path: &str) -> I18nResult<()> {
    if !value.is_object() {
        return Err(I18nError::Shape {
            path: path.to_string(),
            reason: "category root must be a JSON object".to_string(),
        });
    }
    if exceeds_depth(value, MAX_NESTING_DEPTH) {
        return Err(I18nError::Shape {
            path: path.to_string(),
            reason: format!("nesting exceeds {MAX_NESTING_DEPTH} levels"),
        });
    }
    Ok(())
}

fn exceeds_depth(value: &Value, budget: usize) -> bool {
    if budget == 0 {
        return true;
    }
    match value {
        Value::Object(map) => map.values().any(|v| exceeds_depth(v, budget - 1)),
        Value::Array(items) => items.iter().any(|v| exceeds_depth(v, budget - 1)),
        _ => false,
    }
}
