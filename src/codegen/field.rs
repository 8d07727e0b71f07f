//! Field Type Rendering
//!
//! Maps a single field definition to a TypeScript type expression. Both
//! `FieldKind` and `ListItemDef` are matched exhaustively, so a new kind in the
//! schema model does not build until it has a rendering here.

use crate::schema::{FieldDef, FieldKind, ListItemDef};

use super::text::{doc_line, indent, property_key, quote_literal, union};

// =============================================================================
// Public API
// =============================================================================

/// Type expression for a field as it appears directly inside a declaration
///
/// Optional fields are unioned with `undefined`.
pub fn render_field_type(field: &FieldDef) -> String {
    render_field_type_at(field, 1)
}

/// Type expression for a single list item
pub fn render_list_item_field_type(item: &ListItemDef) -> String {
    render_list_item_at(item, 1)
}

// =============================================================================
// Field Lines
// =============================================================================

/// `name: type` line, preceded by its doc line when the field has a description
pub(crate) fn render_field_def(field: &FieldDef, depth: usize) -> String {
    let mut output = String::new();
    if let Some(ref description) = field.description {
        output.push_str(&doc_line(depth, description));
        output.push('\n');
    }
    output.push_str(&format!(
        "{}{}: {}",
        indent(depth),
        property_key(&field.name),
        render_field_type_at(field, depth)
    ));
    output
}

fn render_field_type_at(field: &FieldDef, depth: usize) -> String {
    let expr = render_kind(&field.kind, depth);
    if field.is_required {
        expr
    } else {
        format!("{} | undefined", expr)
    }
}

// =============================================================================
// Kind Dispatch
// =============================================================================

fn render_kind(kind: &FieldKind, depth: usize) -> String {
    match kind {
        FieldKind::Boolean => "boolean".to_string(),
        FieldKind::String => "string".to_string(),
        FieldKind::Number => "number".to_string(),
        FieldKind::Json => "any".to_string(),
        FieldKind::Date => "string".to_string(),
        FieldKind::Markdown => "Markdown".to_string(),
        FieldKind::Mdx => "MDX".to_string(),
        FieldKind::Nested { nested_type_name } => nested_type_name.clone(),
        FieldKind::NestedPolymorphic { nested_type_names } => union(nested_type_names),
        FieldKind::NestedUnnamed { type_def } => render_inline_object(&type_def.field_defs, depth),
        // Only the id of the referenced document is stored
        FieldKind::Reference { .. } | FieldKind::ReferencePolymorphic { .. } => "string".to_string(),
        FieldKind::List { of } => format!("{}[]", render_list_item_at(of, depth)),
        FieldKind::ListPolymorphic { of } => {
            let items = of.iter().map(|item| render_list_item_at(item, depth));
            format!("({})[]", union(items))
        }
        FieldKind::Enum { options } => render_enum(options),
    }
}

fn render_list_item_at(item: &ListItemDef, depth: usize) -> String {
    match item {
        ListItemDef::Boolean => "boolean".to_string(),
        ListItemDef::String => "string".to_string(),
        ListItemDef::Nested { nested_type_name } => nested_type_name.clone(),
        // Parenthesized so `[]` applies to the whole union
        ListItemDef::Enum { options } => format!("({})", render_enum(options)),
        ListItemDef::NestedUnnamed { type_def } => render_inline_object(&type_def.field_defs, depth),
        ListItemDef::Reference { .. } => "string".to_string(),
    }
}

fn render_enum(options: &[String]) -> String {
    union(options.iter().map(|option| quote_literal(option)))
}

/// Anonymous object type, one field per line, closing brace at `depth`
fn render_inline_object(fields: &[FieldDef], depth: usize) -> String {
    let mut output = String::from("{\n");
    for field in fields {
        output.push_str(&render_field_def(field, depth + 1));
        output.push('\n');
    }
    output.push_str(&indent(depth));
    output.push('}');
    output
}
