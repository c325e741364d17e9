//! Identifier sanitization for effective registry keys

use std::borrow::Cow;

/// Marker appended to keys that collide with a reserved word
pub const RESERVED_SUFFIX: char = '_';

/// Names of the two public operations. They share the top-level namespace
/// with keys, so they are reserved in every [`ReservedWords`] set.
pub const OPERATION_NAMES: [&str; 2] = ["search", "symbols"];

/// Whether `key` is one of [`OPERATION_NAMES`]
pub fn is_operation_name(key: &str) -> bool {
    OPERATION_NAMES.contains(&key)
}

/// A reserved-identifier set for some target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedWords {
    words: &'static [&'static str],
}

impl ReservedWords {
    /// Strict and reserved keywords of Rust 2021
    pub const RUST: Self = Self::new(&[
        "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
        "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if",
        "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
        "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
        "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while",
        "yield",
    ]);

    /// Python 3 keywords, for tables that are also exposed as module attributes
    pub const PYTHON: Self = Self::new(&[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise",
        "return", "try", "while", "with", "yield",
    ]);

    /// No reserved words; keys are used verbatim
    pub const NONE: Self = Self::new(&[]);

    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word)
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::RUST
    }
}

/// Derive the effective key for a declared key.
///
/// Keys equal to a reserved word or an operation name get
/// [`RESERVED_SUFFIX`] appended when `suffix_reserved` is set; everything
/// else is borrowed unchanged.
pub fn sanitize_key(
    key: &'static str,
    reserved: &ReservedWords,
    suffix_reserved: bool,
) -> Cow<'static, str> {
    if suffix_reserved && (reserved.contains(key) || is_operation_name(key)) {
        let mut owned = String::with_capacity(key.len() + 1);
        owned.push_str(key);
        owned.push(RESERVED_SUFFIX);
        Cow::Owned(owned)
    } else {
        Cow::Borrowed(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_python_keywords() {
        let python = ReservedWords::PYTHON;
        assert_eq!(sanitize_key("and", &python, true), "and_");
        assert_eq!(sanitize_key("not", &python, true), "not_");
        assert_eq!(sanitize_key("alpha", &python, true), "alpha");
    }

    #[test]
    fn test_sanitize_rust_keywords() {
        let rust = ReservedWords::RUST;
        assert_eq!(sanitize_key("in", &rust, true), "in_");
        // `and`/`or`/`not` are not reserved in Rust
        assert!(matches!(sanitize_key("and", &rust, true), Cow::Borrowed("and")));
    }

    #[test]
    fn test_sanitize_operation_names() {
        for reserved in [ReservedWords::RUST, ReservedWords::PYTHON, ReservedWords::NONE] {
            assert_eq!(sanitize_key("search", &reserved, true), "search_");
            assert_eq!(sanitize_key("symbols", &reserved, true), "symbols_");
        }
        assert_eq!(sanitize_key("search", &ReservedWords::NONE, false), "search");
        assert_eq!(sanitize_key("searches", &ReservedWords::NONE, true), "searches");
    }

    #[test]
    fn test_sanitize_disabled() {
        assert_eq!(sanitize_key("or", &ReservedWords::PYTHON, false), "or");
        assert_eq!(sanitize_key("or", &ReservedWords::NONE, true), "or");
    }

    #[test]
    fn test_reserved_is_case_sensitive() {
        assert!(ReservedWords::PYTHON.contains("True"));
        assert!(!ReservedWords::PYTHON.contains("true"));
        assert!(ReservedWords::RUST.contains("Self"));
    }
}
