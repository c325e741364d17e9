//! mathutf: a curated table of Unicode math symbols
//!
//! Symbols are addressed by short mnemonic keys (`alpha`, `subset_eq`,
//! `nary_sum`) and can be found with a case-insensitive regular expression
//! matched against keys, Unicode names, category names and aliases.
//!
//! ```
//! assert_eq!(mathutf::get("aleph").unwrap(), 'ℵ');
//!
//! let hits: Vec<_> = mathutf::search("beta").unwrap().map(|e| e.key()).collect();
//! assert!(hits.contains(&"sub_beta"));
//! ```

pub mod error;
pub mod format;
pub mod registry;
pub mod search;
pub mod sheet;
pub mod table;
pub mod verify;

use std::sync::LazyLock;

pub use error::{Error, Result};
pub use registry::{BuildOptions, Category, Entry, Registry, ReservedWords};
pub use search::{MatchField, Matches, Query, SearchEngine};

static SYMBOLS: LazyLock<Registry> = LazyLock::new(|| {
    Registry::builtin().expect("built-in symbol table has unique keys")
});

/// The process-wide registry over the built-in table, built on first use
pub fn symbols() -> &'static Registry {
    &SYMBOLS
}

/// Character for `key` in the built-in registry
pub fn get(key: &str) -> Result<char> {
    symbols().get(key)
}

/// Search the built-in registry
pub fn search(query: &str) -> Result<Matches<'static>> {
    symbols().search(query)
}

/// Every top-level name: all keys plus `search` and `symbols`
pub fn names() -> Vec<&'static str> {
    symbols().names()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_global_registry_is_shared() {
        assert!(std::ptr::eq(symbols(), symbols()));
    }

    #[test]
    fn test_global_registry_concurrent_first_access() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| symbols() as *const Registry as usize))
            .collect();
        let addrs: HashSet<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(addrs.len(), 1);
    }

    #[test]
    fn test_every_key_maps_to_one_entry() {
        let registry = symbols();
        let mut seen = HashSet::new();
        for entry in registry.all_entries() {
            assert!(seen.insert(entry.key()), "duplicate key {}", entry.key());
            assert_eq!(get(entry.key()).unwrap(), entry.character());
        }
        assert_eq!(seen.len(), registry.len());
    }

    #[test]
    fn test_names_include_operations() {
        let names = names();
        assert!(names.contains(&"search"));
        assert!(names.contains(&"symbols"));
        assert!(names.contains(&"nary_sum"));
        assert_eq!(names.len(), symbols().len() + 2);
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_get_unknown_key() {
        let err = get("nosuchsymbol").unwrap_err();
        assert_eq!(err.error_code(), "key_not_found");
        assert!(err.to_string().contains("nosuchsymbol"));
    }

    #[test]
    fn test_reverse_lookups() {
        let sums: Vec<&str> = symbols().by_char('∑').map(Entry::category).collect();
        assert_eq!(sums, ["nary"]);
        let integrals: Vec<&str> = symbols().by_markup(r"\int").map(Entry::key).collect();
        assert_eq!(integrals, ["integral"]);
    }
}
