//! Component generator trait and template renderer

use super::catalog::{self, FALLBACK_LANGUAGE, TEMPLATES, TRANSLATIONS};
use super::types::{ComponentMetadata, LocalizedComponent};
use std::collections::HashMap;
use thiserror::Error;

/// Generation failure; "unknown component type" is the only error defined
/// at this boundary
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The requested component type is not in the catalog
    #[error("component type '{0}' not found")]
    UnknownComponent(String),
}

/// Produces a localized component for a (type, language) pair
///
/// Implementations must be pure: the same inputs always yield the same
/// rendered template and localized data (metadata timestamps excepted).
pub trait ComponentGenerator: Send + Sync {
    /// Render the component, or report not-found for an unknown type
    fn generate(
        &self,
        component_type: &str,
        lang: &str,
    ) -> Result<LocalizedComponent, GenerateError>;
}

/// The production generator, rendering from the embedded catalog
#[derive(Debug, Default, Clone)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    /// Create a new template generator
    pub fn new() -> Self {
        Self
    }
}

impl ComponentGenerator for TemplateGenerator {
    fn generate(
        &self,
        component_type: &str,
        lang: &str,
    ) -> Result<LocalizedComponent, GenerateError> {
        let template = TEMPLATES
            .get(component_type)
            .ok_or_else(|| GenerateError::UnknownComponent(component_type.to_string()))?;

        // Unknown languages fall back to English rather than failing.
        let strings = TRANSLATIONS
            .get(lang)
            .or_else(|| TRANSLATIONS.get(FALLBACK_LANGUAGE))
            .expect("fallback language missing from catalog");

        let mut localized_data = HashMap::with_capacity(template.required_keys.len());
        for key in &template.required_keys {
            let value = strings
                .get(key.as_str())
                .map(|v| (*v).to_string())
                .unwrap_or_else(|| format!("[{}]", key));
            localized_data.insert(key.clone(), value);
        }

        let rendered = interpolate_template(&template.template, &localized_data);
        let now = chrono::Utc::now();

        Ok(LocalizedComponent {
            component_name: template.component_name.clone(),
            component_type: template.component_type.clone(),
            language: lang.to_string(),
            template: rendered,
            localized_data,
            metadata: ComponentMetadata {
                component_id: format!("{}_{}_{}", component_type, lang, now.timestamp_millis()),
                last_updated: now.to_rfc3339(),
                required_keys: template.required_keys.clone(),
            },
        })
    }
}

/// Supported language codes (for error payloads and validation)
pub fn available_languages() -> Vec<String> {
    catalog::language_keys()
}

/// Known component types (for error payloads)
pub fn available_components() -> Vec<String> {
    catalog::component_keys()
}

const PLACEHOLDER_PREFIX: &str = "{l10n.";

/// Replace `{l10n.key}` placeholders with the quoted localized value
///
/// Single pass over the template bytes. A placeholder with no closing brace
/// is emitted verbatim; a key missing from `localized_data` is left as-is
/// in the output.
fn interpolate_template(template: &str, localized_data: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len() + localized_data.len() * 50);
    let bytes = template.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'{' && template[i..].starts_with(PLACEHOLDER_PREFIX) {
            let key_start = i + PLACEHOLDER_PREFIX.len();
            if let Some(key_len) = template[key_start..].find('}') {
                let key = &template[key_start..key_start + key_len];
                if let Some(value) = localized_data.get(key) {
                    out.push('"');
                    out.push_str(&value.replace('"', "\\\""));
                    out.push('"');
                    i = key_start + key_len + 1;
                    continue;
                }
            }
        }
        // Outside a placeholder, copy one char at a time; `i` stays on a
        // char boundary because placeholders are pure ASCII.
        match template[i..].chars().next() {
            Some(ch) => {
                out.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }

    out
}
