//! Query normalization and per-entry matching

use fancy_regex::Regex;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::registry::Entry;

/// Raw query that selects every entry
pub const MATCH_ALL: &str = "*";

/// Which field of an entry satisfied a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Key,
    Name,
    Category,
    /// Position of the first matching alias
    Alias(usize),
}

/// Inline flag making the whole pattern case-insensitive
const CASE_INSENSITIVE: &str = "(?i)";

/// A compiled, case-insensitive search pattern.
///
/// Patterns may use look-around and backreferences.
#[derive(Debug, Clone)]
pub struct Query {
    raw: String,
    pattern: Regex,
}

impl Query {
    /// Compile `raw` as a regular expression.
    ///
    /// A bare `*` means "match everything" and is rewritten to `.*`.
    pub fn new(raw: &str) -> Result<Self> {
        let normalized = Self::normalize(raw);
        let pattern = Regex::new(&format!("{CASE_INSENSITIVE}{normalized}")).map_err(|source| {
            Error::InvalidQuery {
                query: raw.to_string(),
                source,
            }
        })?;

        trace!("Compiled query '{}' as /{}/i", raw, normalized);

        Ok(Self {
            raw: raw.to_string(),
            pattern,
        })
    }

    fn normalize(raw: &str) -> &str {
        if raw == MATCH_ALL {
            ".*"
        } else {
            raw
        }
    }

    /// The query as given by the caller
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized pattern that is actually matched
    pub fn as_str(&self) -> &str {
        Self::normalize(&self.raw)
    }

    /// Whether the pattern occurs in `text`. A match aborted by the
    /// backtracking limit counts as no match.
    fn find_in(&self, text: &str) -> bool {
        match self.pattern.is_match(text) {
            Ok(found) => found,
            Err(err) => {
                debug!("Query '{}' gave up on '{}': {}", self.raw, text, err);
                false
            }
        }
    }

    /// First field of `entry` the pattern finds a match in, if any.
    ///
    /// Fields are tried as key, canonical name, category, then each alias in
    /// order; checking stops at the first hit.
    pub fn matched_field(&self, entry: &Entry) -> Option<MatchField> {
        if self.find_in(entry.key()) {
            return Some(MatchField::Key);
        }
        if self.find_in(entry.canonical_name()) {
            return Some(MatchField::Name);
        }
        if self.find_in(entry.category()) {
            return Some(MatchField::Category);
        }
        entry
            .aliases()
            .iter()
            .position(|alias| self.find_in(alias))
            .map(MatchField::Alias)
    }

    pub fn is_match(&self, entry: &Entry) -> bool {
        self.matched_field(entry).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::table::{CategoryDef, SymbolDef};

    const CALCULUS: &[SymbolDef] = &[
        SymbolDef::new('∫', "integral", "INTEGRAL", r"\int"),
        SymbolDef::new('∂', "partial", "PARTIAL DIFFERENTIAL", r"\partial"),
        SymbolDef::new('∇', "nabla", "NABLA", r"\varnabla").aliases(&["del", "gradient"]),
    ];

    fn registry() -> Registry {
        Registry::build(&[CategoryDef { name: "calculus", symbols: CALCULUS }]).unwrap()
    }

    #[test]
    fn test_star_is_match_all() {
        let query = Query::new("*").unwrap();
        assert_eq!(query.raw(), "*");
        assert_eq!(query.as_str(), ".*");

        // Only the bare star is special
        assert!(Query::new("**").is_err());
        assert_eq!(Query::new(".*").unwrap().as_str(), ".*");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Query::new("[").unwrap_err();
        assert!(matches!(err, Error::InvalidQuery { ref query, .. } if query == "["));
        assert!(Query::new("(unclosed").is_err());
    }

    #[test]
    fn test_field_order() {
        let registry = registry();
        let nabla = registry.entry("nabla").unwrap();

        assert_eq!(Query::new("nab").unwrap().matched_field(nabla), Some(MatchField::Key));
        // Key wins even though the name also matches
        assert_eq!(Query::new("NABLA").unwrap().matched_field(nabla), Some(MatchField::Key));
        assert_eq!(Query::new("calc").unwrap().matched_field(nabla), Some(MatchField::Category));
        assert_eq!(Query::new("grad").unwrap().matched_field(nabla), Some(MatchField::Alias(1)));
        assert_eq!(Query::new("^del$").unwrap().matched_field(nabla), Some(MatchField::Alias(0)));
        assert_eq!(Query::new("sum").unwrap().matched_field(nabla), None);
    }

    #[test]
    fn test_name_field() {
        let registry = registry();
        let partial = registry.entry("partial").unwrap();
        assert_eq!(Query::new("differential").unwrap().matched_field(partial), Some(MatchField::Name));
        assert_eq!(Query::new("^partial diff").unwrap().matched_field(partial), Some(MatchField::Name));

        let integral = registry.entry("integral").unwrap();
        assert_eq!(Query::new("^INTEGRAL$").unwrap().matched_field(integral), Some(MatchField::Key));
    }

    #[test]
    fn test_case_insensitive() {
        let registry = registry();
        let integral = registry.entry("integral").unwrap();
        assert!(Query::new("InTeGrAl").unwrap().is_match(integral));
        assert!(Query::new("CALCULUS").unwrap().is_match(integral));
    }

    #[test]
    fn test_look_around_and_backreferences() {
        let registry = registry();
        let integral = registry.entry("integral").unwrap();
        let partial = registry.entry("partial").unwrap();
        let nabla = registry.entry("nabla").unwrap();

        let lookahead = Query::new("d(?=e)").unwrap();
        assert_eq!(lookahead.as_str(), "d(?=e)");
        assert_eq!(lookahead.matched_field(nabla), Some(MatchField::Alias(0)));
        assert_eq!(lookahead.matched_field(partial), None);

        let lookbehind = Query::new("(?<=n)t").unwrap();
        assert_eq!(lookbehind.matched_field(integral), Some(MatchField::Key));
        assert_eq!(lookbehind.matched_field(partial), Some(MatchField::Name));

        let not_integral = Query::new("^(?!int)[a-z]+l$").unwrap();
        assert!(!not_integral.is_match(integral));
        assert_eq!(not_integral.matched_field(partial), Some(MatchField::Key));

        let doubled = Query::new(r"(f)\1").unwrap();
        assert_eq!(doubled.matched_field(partial), Some(MatchField::Name));
        assert!(!doubled.is_match(integral));
    }

    #[test]
    fn test_markup_and_references_are_not_searched() {
        let registry = registry();
        let integral = registry.entry("integral").unwrap();
        assert!(!Query::new(r"\\int").unwrap().is_match(integral));
    }
}
