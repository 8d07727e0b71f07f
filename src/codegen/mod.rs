//! Code Generation
//!
//! Renders a schema snapshot into a single TypeScript declarations module.
//!
//! Architecture:
//! - field: one field definition to one type expression
//! - typedef: one document or nested type to one `export type` block
//! - this module: sorts types, builds the aggregate unions/maps and stitches
//!   everything into the final text
//! - adapter / config: adapter profiles and generation options
//!
//! Rendering is pure: no I/O, no shared state, and the same snapshot always
//! produces byte-identical output.

pub mod adapter;
pub mod config;
pub mod field;
pub mod text;
pub mod typedef;

pub use adapter::AdapterProfile;
pub use config::{DocumentTypeLabel, FieldOptions, GenerationOptions, SourcePluginType};
pub use field::{render_field_type, render_list_item_field_type};
pub use typedef::render_type;

use crate::error::Result;
use crate::schema::{SchemaDef, TypeDef};

use text::{property_key, quote_literal, union};

/// A rendered declaration paired with its type name
#[derive(Debug, Clone)]
struct RenderedType {
    type_name: String,
    declaration: String,
}

// =============================================================================
// Public API
// =============================================================================

/// Render the complete declarations module for a schema snapshot
pub fn render_module(schema: &SchemaDef, options: &GenerationOptions) -> Result<String> {
    for name in schema.document_type_def_map.keys() {
        if schema.nested_type_def_map.contains_key(name) {
            tracing::warn!(type_name = %name, "type name used by both a document and a nested type");
        }
    }

    let mut document_defs: Vec<TypeDef<'_>> = schema
        .document_type_def_map
        .values()
        .map(TypeDef::Document)
        .collect();
    document_defs.sort_by(|a, b| a.name().cmp(b.name()));

    let mut nested_defs: Vec<TypeDef<'_>> = schema
        .nested_type_def_map
        .values()
        .map(TypeDef::Nested)
        .collect();
    nested_defs.sort_by(|a, b| a.name().cmp(b.name()));

    let documents = render_all(&document_defs, options)?;
    let nested = render_all(&nested_defs, options)?;

    let mut blocks: Vec<String> = Vec::new();
    blocks.push(render_header(options));
    blocks.push(render_helper_types(&documents, &nested));
    blocks.push(render_section("Document types", &documents));
    blocks.push(render_section("Nested types", &nested));

    tracing::info!(
        document_types = documents.len(),
        nested_types = nested.len(),
        source_plugin = ?options.source_plugin_type,
        "rendered declarations module"
    );

    let mut output = blocks.join("\n\n");
    output.push('\n');
    Ok(output)
}

fn render_all(defs: &[TypeDef<'_>], options: &GenerationOptions) -> Result<Vec<RenderedType>> {
    defs.iter()
        .map(|def| -> Result<RenderedType> {
            Ok(RenderedType {
                type_name: def.name().to_string(),
                declaration: render_type(*def, options)?,
            })
        })
        .collect()
}

// =============================================================================
// Header
// =============================================================================

fn render_header(options: &GenerationOptions) -> String {
    let mut output = String::new();
    output.push_str("// NOTE This file is generated by content-typegen - DO NOT EDIT\n\n");
    output.push_str("import type { Markdown, MDX } from 'contentlayer/core'\n");
    if let Some(import) = options.source_plugin_type.profile().import {
        output.push_str(import);
        output.push('\n');
    }
    output.push('\n');
    output.push_str("export { isType } from 'contentlayer/client'\n\n");
    output.push_str("export type { Markdown, MDX }");
    output
}

// =============================================================================
// Aggregates
// =============================================================================

fn render_helper_types(documents: &[RenderedType], nested: &[RenderedType]) -> String {
    let mut output = String::new();
    output.push_str("/** Helper types */\n\n");

    output.push_str("export type AllTypes = DocumentTypes | NestedTypes\n");
    output.push_str("export type AllTypeNames = DocumentTypeNames | NestedTypeNames\n\n");

    output.push_str(&format!("export type DocumentTypes = {}\n", type_union(documents)));
    output.push_str(&format!("export type DocumentTypeNames = {}\n\n", name_union(documents)));

    output.push_str(&format!("export type NestedTypes = {}\n", type_union(nested)));
    output.push_str(&format!("export type NestedTypeNames = {}\n\n", name_union(nested)));

    output.push_str(&type_map("DocumentTypeMap", documents));
    output.push_str("\n\n");
    output.push_str(&type_map("NestedTypeMap", nested));
    output.push_str("\n\n");

    // Exported bundle for consumers to import; nothing is merged into globals
    output.push_str("export interface GeneratedTypes {\n");
    output.push_str("  documentTypes: DocumentTypes\n");
    output.push_str("  documentTypeMap: DocumentTypeMap\n");
    output.push_str("  documentTypeNames: DocumentTypeNames\n");
    output.push_str("  nestedTypes: NestedTypes\n");
    output.push_str("  nestedTypeMap: NestedTypeMap\n");
    output.push_str("  nestedTypeNames: NestedTypeNames\n");
    output.push_str("  allTypes: AllTypes\n");
    output.push_str("  allTypeNames: AllTypeNames\n");
    output.push('}');
    output
}

fn type_union(types: &[RenderedType]) -> String {
    union(types.iter().map(|t| t.type_name.as_str()))
}

fn name_union(types: &[RenderedType]) -> String {
    union(types.iter().map(|t| quote_literal(&t.type_name)))
}

fn type_map(map_name: &str, types: &[RenderedType]) -> String {
    let mut output = format!("export type {} = {{\n", map_name);
    for t in types {
        output.push_str(&format!("  {}: {}\n", property_key(&t.type_name), t.type_name));
    }
    output.push('}');
    output
}

// =============================================================================
// Declarations
// =============================================================================

fn render_section(title: &str, types: &[RenderedType]) -> String {
    let mut parts = vec![format!("/** {} */", title)];
    parts.extend(types.iter().map(|t| t.declaration.clone()));
    parts.join("\n\n")
}
