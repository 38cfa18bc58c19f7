//! Integration tests for the i18n runtime

use fretwise_i18n::{
    template_vars, BundleLoader, Category, FilePreferenceStore, I18nError, I18nManager, Locale,
    MemoryPreferenceStore, NumberOptions, PreferenceStore,
};
use std::fs;
use tempfile::TempDir;

/// Create a temporary directory with test locale files
fn create_test_locales() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    fs::create_dir_all(temp_dir.path().join("pt")).unwrap();
    fs::create_dir_all(temp_dir.path().join("en")).unwrap();

    fs::write(
        temp_dir.path().join("pt/ui.json"),
        r#"{"navigation": {"home": "Início"}, "greeting": "Olá, {{name}}!"}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("pt/lessons.json"),
        r#"{"beginner": {"title": "Primeiros acordes"}}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("pt/chords.json"),
        r#"{"c_major": {"name": "Dó maior"}}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("pt/errors.json"),
        r#"{"generic": "Algo deu errado."}"#,
    )
    .unwrap();

    fs::write(
        temp_dir.path().join("en/ui.json"),
        r#"{"navigation": {"home": "Home"}, "greeting": "Hello, {{name}}!"}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("en/lessons.json"),
        r#"{"beginner": {"title": "First chords"}}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("en/chords.json"),
        r#"{"c_major": {"name": "C major"}}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("en/errors.json"),
        r#"{"generic": "Something went wrong."}"#,
    )
    .unwrap();

    temp_dir
}

#[tokio::test]
async fn test_loader_loads_full_bundle() {
    let temp_dir = create_test_locales();
    let loader = BundleLoader::new(temp_dir.path());

    let bundle = loader.load(Locale::Portuguese).await.unwrap();
    assert_eq!(bundle.resolve("ui.navigation.home"), Some("Início"));
    assert_eq!(bundle.resolve("lessons.beginner.title"), Some("Primeiros acordes"));
    assert_eq!(bundle.resolve("chords.c_major.name"), Some("Dó maior"));
    assert_eq!(bundle.resolve("errors.generic"), Some("Algo deu errado."));
}

#[tokio::test]
async fn test_loader_rejects_bad_tags() {
    let temp_dir = create_test_locales();
    let loader = BundleLoader::new(temp_dir.path());

    assert!(matches!(
        loader.load_tag("").await,
        Err(I18nError::UnsupportedLocale { .. })
    ));
    assert!(matches!(
        loader.load_tag("es-ES").await,
        Err(I18nError::UnsupportedLocale { .. })
    ));
    // Primary-subtag matching still routes to a supported locale.
    assert!(loader.load_tag("en-GB").await.is_ok());
}

#[tokio::test]
async fn test_loader_isolates_category_failures() {
    let temp_dir = create_test_locales();
    // One unparseable category and one with a non-object root.
    fs::write(temp_dir.path().join("pt/lessons.json"), "{not json").unwrap();
    fs::write(temp_dir.path().join("pt/chords.json"), r#"["array"]"#).unwrap();

    let loader = BundleLoader::new(temp_dir.path());
    let bundle = loader.load(Locale::Portuguese).await.unwrap();

    // Broken categories degrade to empty objects, siblings are intact.
    assert!(bundle.category(Category::Lessons).is_object());
    assert_eq!(bundle.resolve("lessons.beginner.title"), None);
    assert!(bundle.category(Category::Chords).is_object());
    assert_eq!(bundle.resolve("ui.navigation.home"), Some("Início"));
    assert_eq!(bundle.resolve("errors.generic"), Some("Algo deu errado."));
}

#[tokio::test]
async fn test_loader_fails_when_every_category_fails() {
    let temp_dir = TempDir::new().unwrap();
    let loader = BundleLoader::new(temp_dir.path());

    let result = loader.load(Locale::English).await;
    assert!(matches!(result, Err(I18nError::BundleUnavailable { .. })));
}

#[tokio::test]
async fn test_session_honors_stored_preference() {
    let temp_dir = create_test_locales();
    let prefs = MemoryPreferenceStore::default();
    prefs.save("en-US").unwrap();

    // Environment points at Portuguese; the stored preference must win
    // without detection being consulted.
    let env_tags = vec!["pt-BR".to_string()];
    let manager = I18nManager::new(
        BundleLoader::new(temp_dir.path()),
        Box::new(prefs),
        &env_tags,
    )
    .await;

    assert_eq!(manager.current_locale(), Locale::English);
    assert_eq!(manager.t("ui.navigation.home", None), "Home");
    assert!(!manager.is_loading());
}

#[tokio::test]
async fn test_session_detects_environment_language() {
    let temp_dir = create_test_locales();
    let prefs = MemoryPreferenceStore::default();

    let env_tags = vec!["en-GB".to_string(), "fr-FR".to_string()];
    let manager = I18nManager::new(
        BundleLoader::new(temp_dir.path()),
        Box::new(prefs),
        &env_tags,
    )
    .await;

    assert_eq!(manager.current_locale(), Locale::English);
}

#[tokio::test]
async fn test_session_ignores_invalid_preference() {
    let temp_dir = create_test_locales();
    let prefs = MemoryPreferenceStore::default();
    prefs.save("xx-YY").unwrap();

    let manager = I18nManager::new(
        BundleLoader::new(temp_dir.path()),
        Box::new(prefs),
        &[],
    )
    .await;

    assert_eq!(manager.current_locale(), Locale::Portuguese);
}

#[tokio::test]
async fn test_session_persists_resolved_locale() {
    let temp_dir = create_test_locales();
    let prefs_dir = TempDir::new().unwrap();
    let manager = I18nManager::new(
        BundleLoader::new(temp_dir.path()),
        Box::new(FilePreferenceStore::new(prefs_dir.path())),
        &["en-US".to_string()],
    )
    .await;

    // The detected locale was written back as the new preference.
    assert_eq!(manager.current_locale(), Locale::English);
    let readback = FilePreferenceStore::new(prefs_dir.path());
    assert_eq!(readback.load(), Some("en-US".to_string()));

    manager.change_locale(Locale::Portuguese).await;
    assert_eq!(manager.current_locale(), Locale::Portuguese);
    assert_eq!(manager.t("ui.navigation.home", None), "Início");
    assert_eq!(readback.load(), Some("pt-BR".to_string()));
}

#[tokio::test]
async fn test_translate_miss_returns_key() {
    let temp_dir = create_test_locales();
    let manager = I18nManager::new(
        BundleLoader::new(temp_dir.path()),
        Box::new(MemoryPreferenceStore::default()),
        &[],
    )
    .await;

    assert_eq!(
        manager.t("ui.navigation.missing", None),
        "ui.navigation.missing"
    );
    assert_eq!(manager.t("", None), "");
    assert_eq!(manager.t("...", None), "...");
}

#[tokio::test]
async fn test_translate_interpolates_and_escapes() {
    let temp_dir = create_test_locales();
    let manager = I18nManager::new(
        BundleLoader::new(temp_dir.path()),
        Box::new(MemoryPreferenceStore::default()),
        &[],
    )
    .await;

    let vars = template_vars!["name" => "Ana"];
    assert_eq!(manager.t("ui.greeting", vars.as_ref()), "Olá, Ana!");

    let vars = template_vars!["name" => "<b>x</b>"];
    assert_eq!(
        manager.t("ui.greeting", vars.as_ref()),
        "Olá, &lt;b&gt;x&lt;/b&gt;!"
    );

    // No vars supplied leaves the template untouched.
    assert_eq!(manager.t("ui.greeting", None), "Olá, {{name}}!");
}

#[tokio::test]
async fn test_session_formatters_follow_current_locale() {
    let temp_dir = create_test_locales();
    let manager = I18nManager::new(
        BundleLoader::new(temp_dir.path()),
        Box::new(MemoryPreferenceStore::default()),
        &[],
    )
    .await;

    assert_eq!(manager.current_locale(), Locale::Portuguese);
    assert_eq!(manager.format_number(1234.5, None), "1.234,5");

    let opts = NumberOptions {
        decimals: Some(2),
        grouping: true,
    };
    assert_eq!(manager.format_number(7.0, Some(&opts)), "7,00");

    manager.change_locale(Locale::English).await;
    assert_eq!(manager.format_number(1234.5, None), "1,234.5");
}

#[tokio::test]
async fn test_failed_locale_falls_back_to_default() {
    let temp_dir = create_test_locales();
    // Remove the English files entirely.
    fs::remove_dir_all(temp_dir.path().join("en")).unwrap();

    let manager = I18nManager::new(
        BundleLoader::new(temp_dir.path()),
        Box::new(MemoryPreferenceStore::default()),
        &[],
    )
    .await;
    assert_eq!(manager.current_locale(), Locale::Portuguese);

    manager.change_locale(Locale::English).await;

    // The fallback adopted the default locale and recorded the failure.
    assert_eq!(manager.current_locale(), Locale::Portuguese);
    assert_eq!(manager.t("ui.navigation.home", None), "Início");
    assert!(manager.last_error().is_some());
    assert!(!manager.is_loading());
}

#[tokio::test]
async fn test_total_failure_installs_error_bundle() {
    let temp_dir = TempDir::new().unwrap();
    let manager = I18nManager::new(
        BundleLoader::new(temp_dir.path()),
        Box::new(MemoryPreferenceStore::default()),
        &[],
    )
    .await;

    // Even with nothing loadable the session stays structurally sound.
    assert!(!manager.is_loading());
    assert!(manager.last_error().is_some());
    let message = manager.t("errors.load_failed", None);
    assert!(message.contains("pt-BR"));
    for category in Category::all() {
        assert!(manager.bundle().category(category).is_object());
    }
    // Unrelated keys still degrade to themselves.
    assert_eq!(manager.t("ui.navigation.home", None), "ui.navigation.home");
}
