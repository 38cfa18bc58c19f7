//! Translation session orchestration
//!
//! [`I18nManager`] owns the current locale and bundle, persists the locale
//! preference, and exposes the resolve/format surface the presentation
//! layer consumes. Resolution and formatting never fail; only bundle loads
//! have an error channel, and the manager converts those into fallbacks.

use crate::bundle::TranslationBundle;
use crate::format::{self, DateStyle, NumberOptions, PluralForms};
use crate::interpolate::{self, TemplateVars};
use crate::loader::BundleLoader;
use crate::locale::{system_language_tags, Locale};
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Fixed storage key for the persisted locale preference
pub const LOCALE_PREFERENCE_KEY: &str = "fretwise.locale";

/// Persisted locale preference storage.
///
/// Injected at construction so the session never reaches for an implicit
/// process-wide store.
pub trait PreferenceStore: Send + Sync {
    /// Read the stored preference, if any
    fn load(&self) -> Option<String>;
    /// Persist the preference
    fn save(&self, tag: &str) -> io::Result<()>;
}

/// Preference store backed by a single file under [`LOCALE_PREFERENCE_KEY`]
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store rooted at the given directory
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(LOCALE_PREFERENCE_KEY),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn save(&self, tag: &str) -> io::Result<()> {
        std::fs::write(&self.path, tag)
    }
}

/// In-memory preference store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.lock().clone()
    }

    fn save(&self, tag: &str) -> io::Result<()> {
        *self.value.lock() = Some(tag.to_string());
        Ok(())
    }
}

#[derive(Debug)]
struct SessionState {
    current_locale: Locale,
    is_loading: bool,
    last_error: Option<String>,
}

/// Stateful translation session for one application instance
pub struct I18nManager {
    /// Locale to fall back to when a load fails
    default_locale: Locale,
    /// Bundle source
    loader: BundleLoader,
    /// Injected preference storage
    prefs: Box<dyn PreferenceStore>,
    /// Current bundle, replaced wholesale so readers never see a torn state
    bundle: ArcSwap<TranslationBundle>,
    state: RwLock<SessionState>,
    /// Bumped on every locale change; loads completing under a stale
    /// generation are discarded, so the last-initiated change wins.
    generation: AtomicU64,
}

impl I18nManager {
    /// Create a session, resolving the initial locale from the persisted
    /// preference, then the supplied environment language tags, then the
    /// default locale.
    ///
    /// Initialization always produces a usable session: load failures fall
    /// back per locale and, in the worst case, install an empty bundle with
    /// a resolvable error entry.
    pub async fn new(
        loader: BundleLoader,
        prefs: Box<dyn PreferenceStore>,
        env_tags: &[String],
    ) -> Self {
        let initial = match prefs.load().as_deref().and_then(Locale::from_tag) {
            Some(locale) => {
                debug!("Using persisted locale preference: {}", locale.code());
                locale
            }
            None => {
                let detected = Locale::detect(env_tags);
                debug!("Detected locale from environment: {}", detected.code());
                detected
            }
        };

        let manager = Self {
            default_locale: Locale::default(),
            loader,
            prefs,
            bundle: ArcSwap::from_pointee(TranslationBundle::empty()),
            state: RwLock::new(SessionState {
                current_locale: initial,
                is_loading: false,
                last_error: None,
            }),
            generation: AtomicU64::new(0),
        };

        manager.persist_preference(initial);
        let generation = manager.generation.load(Ordering::SeqCst);
        manager.reload(initial, generation).await;

        info!(
            "I18n session initialized with locale: {}",
            manager.current_locale().code()
        );
        manager
    }

    /// Create a session using the host environment's language list
    pub async fn with_system_language(loader: BundleLoader, prefs: Box<dyn PreferenceStore>) -> Self {
        let tags = system_language_tags();
        Self::new(loader, prefs, &tags).await
    }

    /// Switch the session to a new locale.
    ///
    /// The locale change and preference write happen before any I/O, so
    /// callers observe the new locale immediately; the bundle follows when
    /// its load completes. Overlapping calls resolve to the most recently
    /// initiated one.
    pub async fn change_locale(&self, locale: Locale) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write();
            state.current_locale = locale;
        }
        self.persist_preference(locale);
        debug!("Locale changed to {}", locale.code());

        self.reload(locale, generation).await;
    }

    async fn reload(&self, locale: Locale, generation: u64) {
        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.last_error = None;
        }

        match self.loader.load(locale).await {
            Ok(bundle) => self.finish_load(generation, locale, bundle, None),
            Err(err) if locale != self.default_locale => {
                warn!(
                    "Bundle load failed for {}, falling back to {}: {}",
                    locale.code(),
                    self.default_locale.code(),
                    err
                );
                match self.loader.load(self.default_locale).await {
                    Ok(bundle) => {
                        let message = format!(
                            "Failed to load {}; using {} instead",
                            locale.code(),
                            self.default_locale.code()
                        );
                        self.finish_load(generation, self.default_locale, bundle, Some(message));
                    }
                    Err(fallback_err) => {
                        warn!(
                            "Fallback load of {} also failed: {}",
                            self.default_locale.code(),
                            fallback_err
                        );
                        self.finish_load(
                            generation,
                            locale,
                            TranslationBundle::load_failed(locale),
                            Some(fallback_err.to_string()),
                        );
                    }
                }
            }
            Err(err) => {
                warn!("Bundle load failed for default locale: {}", err);
                self.finish_load(
                    generation,
                    locale,
                    TranslationBundle::load_failed(locale),
                    Some(err.to_string()),
                );
            }
        }
    }

    fn finish_load(
        &self,
        generation: u64,
        locale: Locale,
        bundle: TranslationBundle,
        error: Option<String>,
    ) {
        let mut state = self.state.write();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Discarding stale bundle load for {}", locale.code());
            return;
        }
        self.bundle.store(Arc::new(bundle));
        state.current_locale = locale;
        state.is_loading = false;
        state.last_error = error;
    }

    fn persist_preference(&self, locale: Locale) {
        if let Err(err) = self.prefs.save(locale.code()) {
            warn!("Failed to persist locale preference: {}", err);
        }
    }

    /// Resolve a key against the current bundle and interpolate `vars`.
    ///
    /// A missing key resolves to the key itself, so untranslated content
    /// surfaces as its path in the UI instead of a blank or a panic.
    pub fn translate(&self, key: &str, vars: Option<&TemplateVars>) -> String {
        let bundle = self.bundle.load();
        match bundle.resolve(key) {
            Some(template) => match vars {
                Some(vars) => interpolate::interpolate(template, vars),
                None => template.to_string(),
            },
            None => {
                warn!("Translation missing for key '{}'", key);
                key.to_string()
            }
        }
    }

    /// Shorthand for [`translate`](Self::translate)
    pub fn t(&self, key: &str, vars: Option<&TemplateVars>) -> String {
        self.translate(key, vars)
    }

    /// Format a number in the current locale
    pub fn format_number(&self, value: f64, options: Option<&NumberOptions>) -> String {
        format::format_number(value, self.current_locale(), options)
    }

    /// Format a date in the current locale
    pub fn format_date(&self, date: &DateTime<Utc>, style: DateStyle) -> String {
        format::format_date(date, self.current_locale(), style)
    }

    /// Parse and format a raw date string in the current locale
    pub fn parse_and_format_date(&self, raw: &str, style: DateStyle) -> String {
        format::parse_and_format_date(raw, self.current_locale(), style)
    }

    /// Format a pluralized message in the current locale
    pub fn format_plural(&self, count: u64, forms: &PluralForms, include_count: bool) -> String {
        format::format_plural(count, self.current_locale(), forms, include_count)
    }

    /// Get the current locale
    pub fn current_locale(&self) -> Locale {
        self.state.read().current_locale
    }

    /// Get the default locale
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Whether a bundle load is in flight
    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    /// The most recent non-fatal load error, if any
    pub fn last_error(&self) -> Option<String> {
        self.state.read().last_error.clone()
    }

    /// Snapshot of the current bundle
    pub fn bundle(&self) -> Arc<TranslationBundle> {
        self.bundle.load_full()
    }
}

impl std::fmt::Debug for I18nManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("I18nManager")
            .field("default_locale", &self.default_locale)
            .field("current_locale", &state.current_locale)
            .field("is_loading", &state.is_loading)
            .field("last_error", &state.last_error)
            .finish()
    }
}
