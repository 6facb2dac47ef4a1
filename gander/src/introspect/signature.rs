//! Formal-parameter extraction from a serialized routine header.

use regex::Regex;
use std::sync::LazyLock;

/// Everything between the first `(` after the `fn` keyword and the next `)`.
static PARAM_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfn\b[^(]*\(([^)]*)\)").expect("valid regex"));

/// An inline comment fragment inside a parameter entry.
static INLINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*.*\*/").expect("valid regex"));

/// Ordered formal-parameter names of a serialized routine.
///
/// Comment fragments are stripped, entries trimmed, blanks dropped. Never
/// fails: source with no recognizable `fn ... ( ... )` header yields an
/// empty list, and the caller decides whether that matters.
///
/// Limitation: the parameter list is cut at the first `)` and split on every
/// `,`, so a default-value expression containing either breaks the
/// extraction. Serialized routine headers never contain those.
pub fn arg_names(source: &str) -> Vec<String> {
    let Some(caps) = PARAM_LIST.captures(source) else {
        return Vec::new();
    };
    caps[1]
        .split(',')
        .map(|arg| INLINE_COMMENT.replace(arg, "").trim().to_string())
        .filter(|arg| !arg.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_parameter_list() {
        assert_eq!(
            arg_names("fn relay(one, two, three) { body }"),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn anonymous_header() {
        assert_eq!(arg_names("fn (_ref) { body }"), vec!["_ref"]);
    }

    #[test]
    fn zero_parameters() {
        assert!(arg_names("fn nothing() { body }").is_empty());
    }

    #[test]
    fn comment_fragments_are_stripped() {
        assert_eq!(
            arg_names("fn f(a /* count */, b) { body }"),
            vec!["a", "b"]
        );
    }

    #[test]
    fn blank_entries_are_dropped() {
        assert_eq!(arg_names("fn f(a, , b,) { body }"), vec!["a", "b"]);
    }

    #[test]
    fn unrecognizable_source_degrades_to_empty() {
        assert!(arg_names("not a routine at all").is_empty());
        assert!(arg_names("").is_empty());
    }

    #[test]
    fn fn_must_be_a_whole_word() {
        assert!(arg_names("defn oops(a, b)").is_empty());
    }
}
