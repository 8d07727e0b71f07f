//! Small TypeScript text helpers shared by the renderers

const INDENT: &str = "  ";

/// Indentation for the given nesting depth
pub(crate) fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// `/** text */` at the given depth; `*/` inside the text is escaped
pub(crate) fn doc_line(depth: usize, text: &str) -> String {
    format!("{}/** {} */", indent(depth), text.replace("*/", "*\\/"))
}

/// Single-quoted string literal type
pub(crate) fn quote_literal(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

/// Join union members; an empty union is `never`
pub(crate) fn union<I, S>(members: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let members: Vec<S> = members.into_iter().collect();
    if members.is_empty() {
        return "never".to_string();
    }
    members
        .iter()
        .map(|m| m.as_ref())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Property key, quoted unless it is a plain identifier
pub(crate) fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let is_ident = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if is_ident {
        name.to_string()
    } else {
        quote_literal(name)
    }
}
