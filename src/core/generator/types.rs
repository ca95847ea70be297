//! Component data model

use serde::{Deserialize, Serialize};

/// A UI component template with the translation keys it needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentTemplate {
    /// Exported component name
    pub component_name: String,
    /// Component kind (currently always "functional")
    pub component_type: String,
    /// Template source with `{l10n.key}` placeholders
    pub template: String,
    /// Translation keys the template references
    pub required_keys: Vec<String>,
}

/// Metadata attached to a generated component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentMetadata {
    /// Unique id: `<type>_<lang>_<unix_millis>`
    pub component_id: String,
    /// Generation time, RFC 3339
    pub last_updated: String,
    /// Translation keys used to render the template
    pub required_keys: Vec<String>,
}

/// A fully rendered, localized component
///
/// Immutable once generated; each cache tier stores its own copy. The wire
/// format is field-named JSON so a distributed-tier entry written by an
/// older build deserializes by field, never by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedComponent {
    /// Exported component name
    pub component_name: String,
    /// Component kind
    pub component_type: String,
    /// Language the component was rendered for
    pub language: String,
    /// Rendered template source
    pub template: String,
    /// The localized strings that were interpolated
    pub localized_data: std::collections::HashMap<String, String>,
    /// Generation metadata
    pub metadata: ComponentMetadata,
}
