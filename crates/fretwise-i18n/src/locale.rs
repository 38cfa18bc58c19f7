//! Locale registry and system-language detection

use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    Portuguese,
    English,
}

impl Default for Locale {
    fn default() -> Self {
        Self::Portuguese
    }
}

impl Locale {
    /// Get the language code for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Self::Portuguese => "pt-BR",
            Self::English => "en-US",
        }
    }

    /// Get the short language code for this locale
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::Portuguese => "pt",
            Self::English => "en",
        }
    }

    /// Parse a locale from a language code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pt" | "pt-BR" => Some(Self::Portuguese),
            "en" | "en-US" => Some(Self::English),
            _ => None,
        }
    }

    /// Parse a locale from an arbitrary language tag.
    ///
    /// Matching is case-insensitive and falls back to the primary language
    /// subtag, so `en-GB` and `PT-pt` both resolve to a supported locale.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }
        let lowered = tag.to_ascii_lowercase();
        for locale in Self::all() {
            if lowered == locale.code().to_ascii_lowercase() {
                return Some(locale);
            }
        }
        let primary = lowered.split(['-', '_']).next().unwrap_or("");
        Self::all()
            .into_iter()
            .find(|locale| locale.short_code() == primary)
    }

    /// Get all supported locales
    pub fn all() -> Vec<Self> {
        vec![Self::Portuguese, Self::English]
    }

    /// Check whether a language tag names a supported locale
    pub fn is_supported(tag: &str) -> bool {
        Self::from_tag(tag).is_some()
    }

    /// Get the display name for this locale
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Portuguese => "Português",
            Self::English => "English",
        }
    }

    /// Pick the best supported locale from an ordered list of language tags.
    ///
    /// Exact code matches win over primary-subtag matches, and earlier tags
    /// win over later ones within each pass. Falls back to the default
    /// locale when nothing matches.
    pub fn detect(tags: &[String]) -> Self {
        for tag in tags {
            let lowered = tag.trim().to_ascii_lowercase();
            if let Some(locale) = Self::all()
                .into_iter()
                .find(|locale| lowered == locale.code().to_ascii_lowercase())
            {
                return locale;
            }
        }
        for tag in tags {
            if let Some(locale) = Self::from_tag(tag) {
                return locale;
            }
        }
        Self::default()
    }
}

/// Read the host environment's preferred language tags, most preferred first.
pub fn system_language_tags() -> Vec<String> {
    sys_locale::get_locales().collect()
}
