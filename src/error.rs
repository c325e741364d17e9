//! Error types for registry construction, lookup and search

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by the symbol registry and its search engine
#[derive(Debug, Error)]
pub enum Error {
    /// `get`/`entry` called with a key that is not in the flattened index
    #[error("No symbol named '{key}'")]
    KeyNotFound { key: String },

    /// Two entries resolved to the same effective key during build
    #[error("Duplicate symbol key '{key}': {first} conflicts with {second}")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    /// The search query is not a well-formed pattern
    #[error("Invalid query pattern '{query}': {source}")]
    InvalidQuery {
        query: String,
        #[source]
        source: fancy_regex::Error,
    },

    /// An entry's declared Unicode name disagrees with the Unicode database
    #[error("Name mismatch for '{key}': declared {declared}, actual {}", .actual.as_deref().unwrap_or("<unnamed>"))]
    NameMismatch {
        key: String,
        declared: String,
        actual: Option<String>,
    },
}

impl Error {
    /// Stable machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::KeyNotFound { .. } => "key_not_found",
            Error::DuplicateKey { .. } => "duplicate_key",
            Error::InvalidQuery { .. } => "invalid_query",
            Error::NameMismatch { .. } => "name_mismatch",
        }
    }

    pub(crate) fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound {
            key: key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::key_not_found("alhpa");
        assert_eq!(error.to_string(), "No symbol named 'alhpa'");

        let error = Error::DuplicateKey {
            key: "subset_eq".to_string(),
            first: "set_operators/subset_eq (⊆ SUBSET OF OR EQUAL TO)".to_string(),
            second: "set_operators/subset_eq (⊊ SUBSET OF WITH NOT EQUAL TO)".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Duplicate symbol key 'subset_eq': set_operators/subset_eq (⊆ SUBSET OF OR EQUAL TO) \
             conflicts with set_operators/subset_eq (⊊ SUBSET OF WITH NOT EQUAL TO)"
        );

        let error = Error::NameMismatch {
            key: "le".to_string(),
            declared: "LESS-THAN OVER EQUAL TO".to_string(),
            actual: Some("LESS-THAN OR EQUAL TO".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "Name mismatch for 'le': declared LESS-THAN OVER EQUAL TO, actual LESS-THAN OR EQUAL TO"
        );
    }

    #[test]
    fn test_invalid_query_names_pattern() {
        let source = fancy_regex::Regex::new("[").unwrap_err();
        let error = Error::InvalidQuery {
            query: "[".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("Invalid query pattern '['"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::key_not_found("x").error_code(), "key_not_found");
        let error = Error::NameMismatch {
            key: "x".to_string(),
            declared: "X".to_string(),
            actual: None,
        };
        assert_eq!(error.error_code(), "name_mismatch");
        assert!(error.to_string().ends_with("actual <unnamed>"));
    }
}
