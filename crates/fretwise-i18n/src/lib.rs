//! Internationalization runtime for the Fretwise guitar-learning app
//!
//! This crate provides the translation-resolution engine behind the app's
//! localized interface. It includes:
//!
//! - Locale management and system-language detection
//! - Per-category bundle loading with partial-failure isolation
//! - Dotted-key resolution over JSON content trees
//! - Placeholder interpolation with mandatory HTML escaping
//! - Locale-aware number, date, and plural formatting
//! - Cross-locale completeness validation
//!
//! # Example
//!
//! ```no_run
//! use fretwise_i18n::{template_vars, BundleLoader, I18nManager, MemoryPreferenceStore};
//!
//! # async fn example() {
//! let loader = BundleLoader::new("locales");
//! let prefs = Box::new(MemoryPreferenceStore::default());
//! let manager = I18nManager::with_system_language(loader, prefs).await;
//!
//! let greeting = manager.t("ui.navigation.home", None);
//! let welcome = manager.t("ui.greeting", template_vars!["name" => "Ana"].as_ref());
//! println!("{greeting} / {welcome}");
//! # }
//! ```

pub mod bundle;
pub mod error;
pub mod format;
pub mod interpolate;
pub mod loader;
pub mod locale;
pub mod manager;
pub mod resolver;
pub mod validator;

pub use bundle::{Category, TranslationBundle};
pub use error::{I18nError, I18nResult};
pub use format::{
    format_date, format_number, format_plural, parse_and_format_date, plural_category, DateStyle,
    NumberOptions, PluralCategory, PluralForms, INVALID_DATE,
};
pub use interpolate::{escape_html, interpolate, interpolate_value, TemplateVars};
pub use loader::BundleLoader;
pub use locale::{system_language_tags, Locale};
pub use manager::{
    FilePreferenceStore, I18nManager, MemoryPreferenceStore, PreferenceStore,
    LOCALE_PREFERENCE_KEY,
};
pub use resolver::{collect_string_paths, resolve};
pub use validator::{validate, MissingKey, ValidationReport};
