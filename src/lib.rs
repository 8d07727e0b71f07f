//! Content Type Generator
//!
//! Renders TypeScript type declarations from a content schema so that content
//! records get compile-time shape checking.
//!
//! ## Pipeline
//!
//! ```text
//! SchemaDef ──► render_field_type (per field)
//!           ──► render_type       (per document / nested type)
//!           ──► render_module     (aggregates + final text)
//! ```
//!
//! Rendering is a pure function of the schema snapshot and the
//! [`GenerationOptions`]; loading the schema and writing the output are left to
//! the caller (see the `content-typegen` binary).
//!
//! ## Example
//!
//! ```
//! use content_typegen::{render_module, DocumentTypeDef, FieldDef, FieldKind, GenerationOptions, SchemaDef};
//!
//! let schema = SchemaDef::default().with_document(
//!     DocumentTypeDef::new("Post").with_field(FieldDef::new("title", FieldKind::String).required()),
//! );
//! let code = render_module(&schema, &GenerationOptions::default()).unwrap();
//! assert!(code.contains("export type Post = {"));
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod output;
pub mod schema;

pub use codegen::{
    render_field_type, render_list_item_field_type, render_module, render_type, AdapterProfile,
    DocumentTypeLabel, FieldOptions, GenerationOptions, SourcePluginType,
};
pub use config::TypegenConfig;
pub use error::{Result, TypegenError};
pub use output::{check_output, write_output, OutputStatus};
pub use schema::{
    ComputedField, DocumentTypeDef, FieldDef, FieldKind, ListItemDef, NestedTypeDef,
    NestedUnnamedTypeDef, SchemaDef, TypeDef,
};
