//! Generation Options
//!
//! Settings the renderer reads while emitting declarations:
//! - which source adapter produced the schema (drives identity docs, raw payload
//!   type and the adapter import)
//! - field naming, notably the reserved discriminant field
//! - adapter-supplied labels used when a document type has no description

use serde::{Deserialize, Deserializer, Serialize};

/// Options for a single render
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Content source adapter that supplied the schema
    #[serde(default)]
    pub source_plugin_type: SourcePluginType,

    /// Field naming options
    #[serde(default)]
    pub field_options: FieldOptions,

    /// Fallback documentation per document type name
    #[serde(default)]
    pub document_type_labels: Vec<DocumentTypeLabel>,
}

/// Adapter-supplied label for one document type
///
/// Stored as `{ name, label }` entries so type names keep their case through
/// config layers that normalize map keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeLabel {
    pub name: String,
    pub label: String,
}

impl DocumentTypeLabel {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

impl GenerationOptions {
    pub fn new(source_plugin_type: SourcePluginType) -> Self {
        Self {
            source_plugin_type,
            ..Self::default()
        }
    }

    /// Label registered for a document type, matched case-sensitively
    pub fn label_for(&self, type_name: &str) -> Option<&str> {
        self.document_type_labels
            .iter()
            .find(|entry| entry.name == type_name)
            .map(|entry| entry.label.as_str())
    }

    /// Name of the reserved discriminant field
    pub fn type_field_name(&self) -> &str {
        &self.field_options.type_field_name
    }
}

/// Source adapter identity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcePluginType {
    Local,
    Contentful,
    Sanity,
    #[default]
    Unknown,
}

// Unrecognized adapter ids fall back to `Unknown` instead of failing
impl<'de> Deserialize<'de> for SourcePluginType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(SourcePluginType::from_id(&id))
    }
}

impl SourcePluginType {
    /// Parse an adapter id; anything unrecognized maps to `Unknown`
    pub fn from_id(id: &str) -> Self {
        match id {
            "local" => SourcePluginType::Local,
            "contentful" => SourcePluginType::Contentful,
            "sanity" => SourcePluginType::Sanity,
            _ => SourcePluginType::Unknown,
        }
    }
}

/// Field naming configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Field holding the per-type discriminant literal
    #[serde(default = "default_type_field_name")]
    pub type_field_name: String,
}

fn default_type_field_name() -> String {
    "type".to_string()
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            type_field_name: default_type_field_name(),
        }
    }
}
