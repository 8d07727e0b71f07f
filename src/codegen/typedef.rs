//! Type Declaration Rendering
//!
//! Renders one document or nested type into an `export type` block. The
//! identity, raw payload and discriminant fields always come first, followed by
//! the declared fields in order and, for document types, the computed fields.

use crate::error::{Result, TypegenError};
use crate::schema::TypeDef;

use super::config::GenerationOptions;
use super::field::render_field_def;
use super::text::{doc_line, indent, property_key, quote_literal};

/// Render a single type declaration block
pub fn render_type(def: TypeDef<'_>, options: &GenerationOptions) -> Result<String> {
    let type_field_name = options.type_field_name();
    let profile = options.source_plugin_type.profile();
    let name = def.name();

    if let Some(field) = def
        .computed_fields()
        .iter()
        .find(|field| field.name == type_field_name)
    {
        return Err(TypegenError::DiscriminantCollision {
            type_name: name.to_string(),
            field: field.name.clone(),
        });
    }

    let mut lines: Vec<String> = Vec::new();

    let description = match def {
        TypeDef::Document(_) => def.description().or_else(|| options.label_for(name)),
        TypeDef::Nested(_) => def.description(),
    };
    if let Some(description) = description {
        lines.push(doc_line(0, description));
    }

    lines.push(format!("export type {} = {{", name));
    lines.push(doc_line(1, profile.id_doc));
    lines.push(format!("{}_id: string", indent(1)));
    lines.push(format!("{}_raw: {}", indent(1), profile.raw_type));
    lines.push(format!(
        "{}{}: {}",
        indent(1),
        property_key(type_field_name),
        quote_literal(name)
    ));

    // The discriminant is emitted once above, never from the field list
    for field in def
        .field_defs()
        .iter()
        .filter(|field| field.name != type_field_name)
    {
        lines.push(render_field_def(field, 1));
    }

    for field in def.computed_fields() {
        if let Some(ref description) = field.description {
            lines.push(doc_line(1, description));
        }
        lines.push(format!(
            "{}{}: {}",
            indent(1),
            property_key(&field.name),
            field.type_expr
        ));
    }

    lines.push("}".to_string());

    tracing::debug!(type_name = name, fields = def.field_defs().len(), "rendered type");

    Ok(lines.join("\n"))
}
