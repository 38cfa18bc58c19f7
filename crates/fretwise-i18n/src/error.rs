//! Error types for internationalization operations

use thiserror::Error;

/// Errors that can occur during internationalization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// Locale tag is empty or not in the supported set
    #[error("Unsupported locale: {tag:?}")]
    UnsupportedLocale { tag: String },

    /// Failed to read a bundle resource file
    #[error("Failed to load resource file: {path}")]
    ResourceLoad { path: String },

    /// Failed to parse a bundle resource as JSON
    #[error("Failed to parse resource {path}: {message}")]
    Parse { path: String, message: String },

    /// Resource parsed but has an unusable shape
    #[error("Invalid shape for resource {path}: {reason}")]
    Shape { path: String, reason: String },

    /// Every category of a locale's bundle failed to load
    #[error("No bundle content available for locale {locale}")]
    BundleUnavailable { locale: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for fretwise_common::FretwiseError {
    fn from(err: I18nError) -> Self {
        let locale = match &err {
            I18nError::UnsupportedLocale { tag } => Some(tag.clone()),
            I18nError::BundleUnavailable { locale } => Some(locale.clone()),
            _ => None,
        };
        Self::Localization {
            message: err.to_string(),
            locale,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fretwise_common::FretwiseError;

    #[test]
    fn test_error_display() {
        let err = I18nError::UnsupportedLocale {
            tag: "xx-YY".to_string(),
        };
        assert!(err.to_string().contains("xx-YY"));

        let err = I18nError::BundleUnavailable {
            locale: "pt-BR".to_string(),
        };
        assert!(err.to_string().contains("pt-BR"));
    }

    #[test]
    fn test_conversion_to_app_error() {
        let err = I18nError::BundleUnavailable {
            locale: "en-US".to_string(),
        };
        let app_err: FretwiseError = err.into();
        match app_err {
            FretwiseError::Localization { locale, .. } => {
                assert_eq!(locale.as_deref(), Some("en-US"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
