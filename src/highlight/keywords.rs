//! Fixed keyword table
//!
//! The set of identifiers the scanner highlights with the `keyword`
//! class: C/C++ reserved words, built-in type names, and the Grace
//! framework's macro-like identifiers (including the `%format` operator,
//! which is why `%` counts as a word character during matching). The
//! table is built once behind a `Lazy` static and never mutated, so it
//! is safe to consult from anywhere without synchronization.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Every identifier rendered with the `keyword` class.
const KEYWORDS: &[&str] = &[
    "bool",
    "true",
    "false",
    "if",
    "else",
    "return",
    "while",
    "do",
    "for",
    "select",
    "case",
    "default",
    "break",
    "continue",
    "char",
    "short",
    "int",
    "void",
    "double",
    "float",
    "unsigned",
    "long",
    "const",
    "class",
    "public",
    "private",
    "protected",
    "new",
    "extern",
    "value",
    "statstring",
    "string",
    "returnclass",
    "retain",
    "foreach",
    "sharedsection",
    "exclusivesection",
    "breaksection",
    "caseselector",
    "incaseof",
    "defaultcase",
    "appobject",
    "%format",
];

static KEYWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

/// Exact, case-sensitive membership test. No prefix matching: the
/// scanner is responsible for handing in whole word runs.
pub fn is_keyword(candidate: &str) -> bool {
    KEYWORD_SET.contains(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words_are_keywords() {
        assert!(is_keyword("if"));
        assert!(is_keyword("return"));
        assert!(is_keyword("exclusivesection"));
    }

    #[test]
    fn format_operator_is_a_keyword() {
        assert!(is_keyword("%format"));
    }

    #[test]
    fn matching_is_exact_not_prefix() {
        assert!(is_keyword("class"));
        assert!(!is_keyword("classify"));
        assert!(!is_keyword("clas"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!is_keyword("If"));
        assert!(!is_keyword("RETURN"));
    }

    #[test]
    fn empty_candidate_is_not_a_keyword() {
        assert!(!is_keyword(""));
    }
}
