//! Data consistency checks against the Unicode name database

use tracing::warn;

use crate::error::{Error, Result};
use crate::registry::{Entry, Registry};

/// Official Unicode name of `c`, if it has one
pub fn unicode_name(c: char) -> Option<String> {
    unicode_names2::name(c).map(|name| name.to_string())
}

/// Check that an entry's declared name matches its character's Unicode name
pub fn check_entry(entry: &Entry) -> Result<()> {
    let actual = unicode_name(entry.character());
    if actual.as_deref() == Some(entry.canonical_name()) {
        return Ok(());
    }

    Err(Error::NameMismatch {
        key: entry.key().to_string(),
        declared: entry.canonical_name().to_string(),
        actual,
    })
}

/// Check every entry, collecting all mismatches in registry order
pub fn check_registry(registry: &Registry) -> Vec<Error> {
    registry
        .all_entries()
        .filter_map(|entry| check_entry(entry).err())
        .inspect(|err| warn!("{}", err))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CategoryDef, SymbolDef};

    #[test]
    fn test_unicode_name() {
        assert_eq!(unicode_name('ℵ').as_deref(), Some("ALEF SYMBOL"));
        assert_eq!(unicode_name('∑').as_deref(), Some("N-ARY SUMMATION"));
        assert_eq!(unicode_name('\u{E000}'), None);
    }

    #[test]
    fn test_builtin_names_match_unicode() {
        let registry = Registry::builtin().unwrap();
        let mismatches = check_registry(&registry);
        assert!(
            mismatches.is_empty(),
            "mismatched names: {:?}",
            mismatches.iter().map(|e| e.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_mismatch_is_reported() {
        const WRONG: &[SymbolDef] = &[
            SymbolDef::new('≤', "le", "LESS-THAN OVER EQUAL TO", r"\leq"),
            SymbolDef::new('≥', "ge", "GREATER-THAN OR EQUAL TO", r"\geq"),
        ];
        let registry = Registry::build(&[CategoryDef { name: "relational", symbols: WRONG }]).unwrap();

        let mismatches = check_registry(&registry);
        assert_eq!(mismatches.len(), 1);
        match &mismatches[0] {
            Error::NameMismatch { key, declared, actual } => {
                assert_eq!(key, "le");
                assert_eq!(declared, "LESS-THAN OVER EQUAL TO");
                assert_eq!(actual.as_deref(), Some("LESS-THAN OR EQUAL TO"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_check_entry_ok() {
        let registry = Registry::builtin().unwrap();
        assert!(check_entry(registry.entry("aleph").unwrap()).is_ok());
        assert!(check_entry(registry.entry("satisfies").unwrap()).is_ok());
    }
}
