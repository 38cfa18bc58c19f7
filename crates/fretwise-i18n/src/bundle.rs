//! Translation bundles and their fixed content categories

use crate::locale::Locale;
use crate::resolver;
use serde_json::{json, Map, Value};

/// Fixed top-level content partitions of a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Interface strings (navigation, buttons, labels)
    Ui,
    /// Lesson content (titles, descriptions, practice prompts)
    Lessons,
    /// Chord and song reference content
    Chords,
    /// Error and status messages
    Errors,
}

impl Category {
    /// Get the category name used as the bundle's top-level key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Lessons => "lessons",
            Self::Chords => "chords",
            Self::Errors => "errors",
        }
    }

    /// Parse a category from its name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ui" => Some(Self::Ui),
            "lessons" => Some(Self::Lessons),
            "chords" => Some(Self::Chords),
            "errors" => Some(Self::Errors),
            _ => None,
        }
    }

    /// Get all categories, in bundle order
    pub fn all() -> [Self; 4] {
        [Self::Ui, Self::Lessons, Self::Chords, Self::Errors]
    }

    /// Get the resource file name for this category
    pub fn resource_file(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

/// The full set of translatable content for one locale.
///
/// Every category is always present; a category that failed to load is an
/// empty object, so resolution degrades to "not found" instead of hitting
/// absent structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationBundle {
    categories: Map<String, Value>,
}

impl TranslationBundle {
    /// Create a bundle with all categories empty
    pub fn empty() -> Self {
        let mut categories = Map::new();
        for category in Category::all() {
            categories.insert(category.as_str().to_string(), json!({}));
        }
        Self { categories }
    }

    /// Build a bundle from per-category values, filling in absent categories
    /// as empty objects. Values are stored as given; the loader is the layer
    /// that guarantees object-shaped categories.
    pub fn from_parts(parts: Map<String, Value>) -> Self {
        let mut bundle = Self::empty();
        for (name, value) in parts {
            if Category::from_name(&name).is_some() {
                bundle.categories.insert(name, value);
            }
        }
        bundle
    }

    /// The bundle installed when a locale (and its fallback) cannot be
    /// loaded at all: empty categories plus one resolvable error message.
    pub fn load_failed(locale: Locale) -> Self {
        let mut bundle = Self::empty();
        bundle.categories.insert(
            Category::Errors.as_str().to_string(),
            json!({
                "load_failed": format!("Failed to load content for {}", locale.code()),
            }),
        );
        bundle
    }

    /// Get a category's content tree
    pub fn category(&self, category: Category) -> &Value {
        // Constructors insert every category, so the lookup cannot miss.
        self.categories
            .get(category.as_str())
            .unwrap_or(&Value::Null)
    }

    /// Replace a category's content tree
    pub fn set_category(&mut self, category: Category, value: Value) {
        self.categories.insert(category.as_str().to_string(), value);
    }

    /// Resolve a dotted key path against this bundle.
    ///
    /// The first segment names the category; the rest resolves within its
    /// tree. Returns `None` for unknown categories, missing paths, and
    /// non-string leaves.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        let (category_name, rest) = path.split_once('.')?;
        let category = Category::from_name(category_name)?;
        resolver::resolve(self.category(category), rest)
    }

    /// Collect the dotted, category-prefixed paths of every string leaf,
    /// in sorted order.
    pub fn string_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for category in Category::all() {
            resolver::collect_string_paths(
                self.category(category),
                category.as_str(),
                &mut paths,
            );
        }
        paths.sort();
        paths
    }
}

impl Default for TranslationBundle {
    fn default() -> Self {
        Self::empty()
    }
}
