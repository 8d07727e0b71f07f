//! Golden Tests for the Declarations Module
//!
//! Renders the fixture schemas end to end and checks output stability,
//! ordering and adapter-specific differences.

use std::io::Write;

use content_typegen::{
    render_module, DocumentTypeDef, FieldDef, FieldKind, GenerationOptions, NestedTypeDef,
    SchemaDef, SourcePluginType, TypegenError,
};

fn blog_schema() -> SchemaDef {
    SchemaDef::from_json_str(include_str!("fixtures/blog.json")).unwrap()
}

fn options(plugin: SourcePluginType) -> GenerationOptions {
    GenerationOptions::new(plugin)
}

// =============================================================================
// Golden Output
// =============================================================================

#[test]
fn test_blog_local_golden() {
    let output = render_module(&blog_schema(), &options(SourcePluginType::Local)).unwrap();
    assert_eq!(output, include_str!("fixtures/blog.local.d.ts"));
}

#[test]
fn test_load_schema_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(include_str!("fixtures/blog.json").as_bytes()).unwrap();

    let schema = SchemaDef::from_path(file.path()).unwrap();
    assert_eq!(schema, blog_schema());
}

// =============================================================================
// Determinism and Ordering
// =============================================================================

#[test]
fn test_output_is_deterministic() {
    // Separately parsed snapshots have independent map iteration orders
    let first = render_module(&blog_schema(), &options(SourcePluginType::Local)).unwrap();
    for _ in 0..5 {
        let again = render_module(&blog_schema(), &options(SourcePluginType::Local)).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_types_sorted_by_name() {
    let output = render_module(&blog_schema(), &options(SourcePluginType::Local)).unwrap();

    let author = output.find("export type Author = {").unwrap();
    let post = output.find("export type Post = {").unwrap();
    let cta = output.find("export type Cta = {").unwrap();
    let seo = output.find("export type Seo = {").unwrap();

    assert!(author < post);
    assert!(post < cta, "document types come before nested types");
    assert!(cta < seo);
}

#[test]
fn test_sort_is_case_sensitive() {
    let schema = SchemaDef::default()
        .with_document(DocumentTypeDef::new("apple"))
        .with_document(DocumentTypeDef::new("Zebra"))
        .with_document(DocumentTypeDef::new("Mango"));
    let output = render_module(&schema, &GenerationOptions::default()).unwrap();

    assert!(output.contains("export type DocumentTypes = Mango | Zebra | apple\n"));
    let mango = output.find("export type Mango = {").unwrap();
    let zebra = output.find("export type Zebra = {").unwrap();
    let apple = output.find("export type apple = {").unwrap();
    assert!(mango < zebra && zebra < apple);
}

// =============================================================================
// Aggregates
// =============================================================================

#[test]
fn test_empty_nested_partition_is_never() {
    let schema = SchemaDef::default().with_document(
        DocumentTypeDef::new("Post")
            .with_field(FieldDef::new("title", FieldKind::String).required())
            .with_field(FieldDef::new(
                "tags",
                FieldKind::List { of: content_typegen::ListItemDef::String },
            )),
    );
    let output = render_module(&schema, &options(SourcePluginType::Local)).unwrap();

    assert!(output.contains("  title: string\n"));
    assert!(output.contains("  tags: string[] | undefined\n"));
    assert!(output.contains("export type DocumentTypes = Post\n"));
    assert!(output.contains("export type NestedTypes = never\n"));
    assert!(output.contains("export type NestedTypeNames = never\n"));
}

#[test]
fn test_empty_document_partition_is_never() {
    let schema = SchemaDef::default().with_nested(NestedTypeDef::new("Seo"));
    let output = render_module(&schema, &GenerationOptions::default()).unwrap();

    assert!(output.contains("export type DocumentTypes = never\n"));
    assert!(output.contains("export type DocumentTypeNames = never\n"));
    assert!(output.contains("export type NestedTypes = Seo\n"));
}

#[test]
fn test_discriminant_emitted_once_per_type() {
    let output = render_module(&blog_schema(), &options(SourcePluginType::Local)).unwrap();
    // Post declares its own `type` field; it must not appear as `type: string`
    assert_eq!(output.matches("  type: 'Post'\n").count(), 1);
    assert!(!output.contains("  type: string"));
    assert_eq!(output.matches("  type: '").count(), 4);
}

// =============================================================================
// Adapters
// =============================================================================

#[test]
fn test_adapter_switch_changes_only_adapter_lines() {
    let schema = blog_schema();
    let local = render_module(&schema, &options(SourcePluginType::Local)).unwrap();
    let contentful = render_module(&schema, &options(SourcePluginType::Contentful)).unwrap();

    let local_lines: Vec<&str> = local.lines().collect();
    let contentful_lines: Vec<&str> = contentful.lines().collect();
    assert_eq!(local_lines.len(), contentful_lines.len());

    let changed: Vec<(&str, &str)> = local_lines
        .iter()
        .zip(contentful_lines.iter())
        .filter(|(a, b)| a != b)
        .map(|(a, b)| (*a, *b))
        .collect();

    // One import line plus `_id` docs and `_raw` for each of the four types
    assert_eq!(changed.len(), 1 + 4 * 2);
    for (before, after) in changed {
        let allowed = (before == "import * as Local from 'contentlayer/source-files'"
            && after == "import * as Contentful from '@contentlayer/source-contentful'")
            || (before == "  _raw: Local.RawDocumentData"
                && after == "  _raw: Contentful.RawDocumentData")
            || (before == "  /** File path relative to `contentDirPath` */"
                && after == "  /** Contentful object id */");
        assert!(allowed, "unexpected change: {:?} -> {:?}", before, after);
    }
}

#[test]
fn test_unknown_adapter_has_no_import() {
    let output = render_module(&blog_schema(), &options(SourcePluginType::Unknown)).unwrap();
    assert!(!output.contains("import * as"));
    assert!(output.contains("  _raw: Record<string, any>\n"));
    assert!(output.contains("  /** ID */\n  _id: string\n"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unknown_field_kind_fails_to_load() {
    let err = SchemaDef::from_json_str(
        r#"{ "documentTypeDefMap": { "Post": { "name": "Post", "fieldDefs": [{ "name": "cover", "type": "image" }] } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, TypegenError::Json(_)));
}

#[test]
fn test_computed_discriminant_fails_whole_module() {
    let mut schema = blog_schema();
    schema
        .document_type_def_map
        .get_mut("Author")
        .unwrap()
        .computed_fields
        .push(content_typegen::ComputedField::new("type", "string"));

    let err = render_module(&schema, &options(SourcePluginType::Local)).unwrap_err();
    assert!(matches!(
        err,
        TypegenError::DiscriminantCollision { ref type_name, .. } if type_name == "Author"
    ));
}
