//! Static symbol definitions
//!
//! The built-in table is hand-curated and lives in [`builtin`]. Entries are
//! declared with the `const fn` helpers below so each row stays on one line.

mod builtin;

pub use builtin::BUILTIN;

/// One row of a static symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolDef {
    pub chr: char,
    pub key: &'static str,
    pub name: &'static str,
    pub tex: Option<&'static str>,
    pub aliases: &'static [&'static str],
    pub references: &'static [&'static str],
}

/// A named, ordered group of symbol rows
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub name: &'static str,
    pub symbols: &'static [SymbolDef],
}

impl SymbolDef {
    /// Row with a markup rendering
    pub const fn new(chr: char, key: &'static str, name: &'static str, tex: &'static str) -> Self {
        Self {
            chr,
            key,
            name,
            tex: Some(tex),
            aliases: &[],
            references: &[],
        }
    }

    /// Row without a markup rendering
    pub const fn plain(chr: char, key: &'static str, name: &'static str) -> Self {
        Self {
            chr,
            key,
            name,
            tex: None,
            aliases: &[],
            references: &[],
        }
    }

    pub const fn aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    pub const fn references(self, references: &'static [&'static str]) -> Self {
        Self { references, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_helpers() {
        const ROW: SymbolDef = SymbolDef::new('∇', "nabla", "NABLA", r"\varnabla")
            .aliases(&["del", "gradient"])
            .references(&["https://en.wikipedia.org/wiki/Del"]);
        assert_eq!(ROW.tex, Some(r"\varnabla"));
        assert_eq!(ROW.aliases, &["del", "gradient"]);
        assert_eq!(ROW.references.len(), 1);

        let plain = SymbolDef::plain('=', "eq", "EQUALS SIGN");
        assert_eq!(plain.tex, None);
        assert!(plain.aliases.is_empty());
    }

    #[test]
    fn test_builtin_category_order() {
        let names: Vec<&str> = BUILTIN.iter().map(|c| c.name).collect();
        assert_eq!(names.first(), Some(&"greek_letters"));
        assert_eq!(names.last(), Some(&"transfinite"));
        assert!(names.contains(&"calculus"));
        assert!(BUILTIN.iter().all(|c| !c.symbols.is_empty()));
    }
}
