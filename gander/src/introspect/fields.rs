//! Field-usage recovery for destructured reference parameters.

use regex::Regex;
use std::sync::LazyLock;

/// Marker prefix flagging a serialized first parameter as a destructured
/// reference.
///
/// The authoring layer's serializer rebinds a destructured first parameter
/// under a mangled name starting with this prefix (`_ref`, `_ref2`, ...);
/// the spelled-out fields then appear in the body as member accesses against
/// that name.
pub const REF_MARKER: &str = "_ref";

/// The introductory `fn ... ( ... ) {` header text, discarded before the
/// body is scanned.
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fn.*?\(.*?\)\s*\{\s*").expect("valid regex"));

/// Fields of the destructured first parameter that the routine body actually
/// reads.
///
/// Scans the body for `<param>.<field>` member accesses and returns the
/// field names in first-occurrence order, duplicates removed. Returns `None`
/// — the "empty / no match" sentinel — when no recognizable header is found
/// or the body never touches the parameter. The caller decides whether that
/// sentinel is an authoring mistake worth warning about.
///
/// Not understood, on purpose: scoping, shadowing, computed member access
/// (`param[expr]`), or any access spelled differently from the literal
/// parameter name.
pub fn ref_fields(source: &str, param: &str) -> Option<Vec<String>> {
    let header = HEADER.find(source)?;
    let body = &source[header.end()..];

    let member = Regex::new(&format!(
        r"\b{}\.([A-Za-z_][A-Za-z0-9_]*)",
        regex::escape(param)
    ))
    .expect("valid regex");

    let mut fields: Vec<String> = Vec::new();
    for caps in member.captures_iter(body) {
        let field = &caps[1];
        if !fields.iter().any(|seen| seen == field) {
            fields.push(field.to_string());
        }
    }

    if fields.is_empty() { None } else { Some(fields) }
}
