//! Content schema model
//!
//! The snapshot handed to the renderer: document types, nested types and their
//! field definitions. Everything here is read-only input; rendering never
//! mutates it.
//!
//! The JSON form uses camelCase keys and a `type` tag on every field:
//!
//! ```json
//! {
//!   "documentTypeDefMap": {
//!     "Post": {
//!       "name": "Post",
//!       "fieldDefs": [
//!         { "name": "title", "type": "string", "isRequired": true },
//!         { "name": "tags", "type": "list", "of": { "type": "string" } }
//!       ],
//!       "computedFields": [{ "name": "slug", "type": "string" }]
//!     }
//!   },
//!   "nestedTypeDefMap": {}
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Full schema snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDef {
    /// Document types keyed by their name
    #[serde(default)]
    pub document_type_def_map: HashMap<String, DocumentTypeDef>,
    /// Nested types keyed by their name
    #[serde(default)]
    pub nested_type_def_map: HashMap<String, NestedTypeDef>,
}

impl SchemaDef {
    /// Parse a schema snapshot from JSON text
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a schema snapshot from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    /// Add a document type, keyed by its own name
    pub fn with_document(mut self, def: DocumentTypeDef) -> Self {
        self.document_type_def_map.insert(def.name.clone(), def);
        self
    }

    /// Add a nested type, keyed by its own name
    pub fn with_nested(mut self, def: NestedTypeDef) -> Self {
        self.nested_type_def_map.insert(def.name.clone(), def);
        self
    }
}

/// A top-level content shape with an identity and raw payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTypeDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub field_defs: Vec<FieldDef>,
    #[serde(default)]
    pub computed_fields: Vec<ComputedField>,
}

impl DocumentTypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            field_defs: Vec::new(),
            computed_fields: Vec::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.field_defs.push(field);
        self
    }

    pub fn with_computed(mut self, field: ComputedField) -> Self {
        self.computed_fields.push(field);
        self
    }
}

/// A named, reusable sub-shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedTypeDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub field_defs: Vec<FieldDef>,
}

impl NestedTypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            field_defs: Vec::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.field_defs.push(field);
        self
    }
}

/// Borrowed view over either kind of named type definition
#[derive(Debug, Clone, Copy)]
pub enum TypeDef<'a> {
    Document(&'a DocumentTypeDef),
    Nested(&'a NestedTypeDef),
}

impl<'a> TypeDef<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            TypeDef::Document(def) => &def.name,
            TypeDef::Nested(def) => &def.name,
        }
    }

    pub fn description(&self) -> Option<&'a str> {
        match *self {
            TypeDef::Document(def) => def.description.as_deref(),
            TypeDef::Nested(def) => def.description.as_deref(),
        }
    }

    pub fn field_defs(&self) -> &'a [FieldDef] {
        match *self {
            TypeDef::Document(def) => &def.field_defs,
            TypeDef::Nested(def) => &def.field_defs,
        }
    }

    /// Nested types never carry computed fields
    pub fn computed_fields(&self) -> &'a [ComputedField] {
        match *self {
            TypeDef::Document(def) => &def.computed_fields,
            TypeDef::Nested(_) => &[],
        }
    }
}

/// Field whose type expression is supplied pre-rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedField {
    pub name: String,
    /// Raw type expression, emitted verbatim
    #[serde(rename = "type")]
    pub type_expr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ComputedField {
    pub fn new(name: impl Into<String>, type_expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_expr: type_expr.into(),
            description: None,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single declared field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldDef {
    /// New optional field
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            is_required: false,
            description: None,
            kind,
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Closed set of field kinds, selected by the `type` tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum FieldKind {
    Boolean,
    String,
    Number,
    Json,
    Date,
    Markdown,
    Mdx,
    Nested { nested_type_name: String },
    NestedPolymorphic { nested_type_names: Vec<String> },
    NestedUnnamed { type_def: NestedUnnamedTypeDef },
    Reference { document_type_name: String },
    ReferencePolymorphic { document_type_names: Vec<String> },
    List { of: ListItemDef },
    ListPolymorphic { of: Vec<ListItemDef> },
    Enum { options: Vec<String> },
}

/// Item kinds allowed inside `list` / `list_polymorphic` fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ListItemDef {
    Boolean,
    String,
    Nested { nested_type_name: String },
    Enum { options: Vec<String> },
    NestedUnnamed { type_def: NestedUnnamedTypeDef },
    Reference { document_type_name: String },
}

/// Inline anonymous field set; never registered as a named type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedUnnamedTypeDef {
    #[serde(default)]
    pub field_defs: Vec<FieldDef>,
}

impl NestedUnnamedTypeDef {
    pub fn new(field_defs: Vec<FieldDef>) -> Self {
        Self { field_defs }
    }
}
