//! Generator tests

use super::catalog;
use super::generator::{ComponentGenerator, GenerateError, TemplateGenerator};

#[test]
fn test_generates_known_component() {
    let generator = TemplateGenerator::new();
    let component = generator.generate("welcome", "en").unwrap();

    assert_eq!(component.component_name, "WelcomeComponent");
    assert_eq!(component.language, "en");
    assert_eq!(component.localized_data.len(), 4);
    assert_eq!(
        component.localized_data.get("welcome_title").map(String::as_str),
        Some("Welcome to Our App")
    );
    // Placeholders are rendered, not left in the template.
    assert!(component.template.contains("\"Welcome to Our App\""));
    assert!(!component.template.contains("{l10n.welcome_title}"));
    assert!(component.metadata.component_id.starts_with("welcome_en_"));
}

#[test]
fn test_unknown_component_is_not_found() {
    let generator = TemplateGenerator::new();
    let err = generator.generate("hero", "en").unwrap_err();
    assert!(matches!(err, GenerateError::UnknownComponent(_)));
    assert_eq!(err.to_string(), "component type 'hero' not found");
}

#[test]
fn test_unknown_language_falls_back_to_english() {
    let generator = TemplateGenerator::new();
    let component = generator.generate("footer", "pt").unwrap();
    assert_eq!(component.language, "pt");
    assert_eq!(
        component.localized_data.get("footer_copyright").map(String::as_str),
        Some("© 2024 Our Company. All rights reserved.")
    );
}

#[test]
fn test_localized_rendering() {
    let generator = TemplateGenerator::new();
    let component = generator.generate("navigation", "de").unwrap();
    assert!(component.template.contains("\"Startseite\""));
    assert!(!component.template.contains("{l10n.navigation_home}"));
}

#[test]
fn test_generation_is_deterministic() {
    let generator = TemplateGenerator::new();
    let a = generator.generate("user_profile", "fr").unwrap();
    let b = generator.generate("user_profile", "fr").unwrap();
    assert_eq!(a.template, b.template);
    assert_eq!(a.localized_data, b.localized_data);
}

#[test]
fn test_catalog_lookups() {
    assert!(catalog::is_supported_language("en"));
    assert!(catalog::is_supported_language("de"));
    assert!(!catalog::is_supported_language("xx"));

    let components = catalog::component_keys();
    assert!(components.contains(&"welcome".to_string()));
    assert!(components.contains(&"footer".to_string()));

    let languages = catalog::language_keys();
    assert_eq!(languages, vec!["de", "en", "es", "fr"]);
}

#[test]
fn test_every_template_renders_in_every_language() {
    let generator = TemplateGenerator::new();
    for component_type in catalog::component_keys() {
        for lang in catalog::language_keys() {
            let component = generator.generate(&component_type, &lang).unwrap();
            assert!(!component.template.contains("{l10n."));
        }
    }
}
