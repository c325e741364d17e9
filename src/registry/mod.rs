//! Symbol registry
//!
//! Owns the categorized entry table and the flattened key → character index.
//! A [`Registry`] is built once from static [`CategoryDef`]s and is immutable
//! afterwards; every entry carries the category it was declared in.

pub mod keys;

use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, Range};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::search::{Matches, Query, SearchEngine};
use crate::table::{CategoryDef, SymbolDef, BUILTIN};

pub use keys::{is_operation_name, sanitize_key, ReservedWords, OPERATION_NAMES, RESERVED_SUFFIX};

/// One symbol record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    #[serde(rename = "group")]
    category: &'static str,
    key: String,
    #[serde(rename = "chr")]
    character: char,
    #[serde(rename = "utf_name")]
    canonical_name: &'static str,
    #[serde(rename = "tex", skip_serializing_if = "Option::is_none")]
    markup: Option<&'static str>,
    #[serde(rename = "alias", skip_serializing_if = "is_empty")]
    aliases: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    references: &'static [&'static str],
    #[serde(skip)]
    declared_key: &'static str,
}

fn is_empty(list: &&'static [&'static str]) -> bool {
    list.is_empty()
}

impl Entry {
    fn new(category: &'static str, key: String, def: &SymbolDef) -> Self {
        Self {
            category,
            key,
            character: def.chr,
            canonical_name: def.name,
            markup: def.tex,
            aliases: def.aliases,
            references: def.references,
            declared_key: def.key,
        }
    }

    /// Effective key, after reserved-word suffixing
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Key as written in the source table
    pub fn declared_key(&self) -> &'static str {
        self.declared_key
    }

    pub fn character(&self) -> char {
        self.character
    }

    /// Official Unicode name, uppercase
    pub fn canonical_name(&self) -> &'static str {
        self.canonical_name
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Typesetting markup rendering, e.g. `\alpha`
    pub fn markup(&self) -> Option<&'static str> {
        self.markup
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    pub fn references(&self) -> &'static [&'static str] {
        self.references
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({} {})",
            self.category, self.declared_key, self.character, self.canonical_name
        )
    }
}

/// A named, ordered view over the entries of one category
#[derive(Debug, Clone, Copy)]
pub struct Category<'a> {
    name: &'static str,
    entries: &'a [Entry],
}

impl<'a> Category<'a> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'a [Entry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Options controlling how effective keys are derived during build
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Reserved identifiers of the target namespace
    pub reserved: ReservedWords,
    /// Append [`RESERVED_SUFFIX`] to keys equal to a reserved word
    pub suffix_reserved: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            reserved: ReservedWords::default(),
            suffix_reserved: true,
        }
    }
}

/// The full categorized table plus its flattened key index
#[derive(Debug)]
pub struct Registry {
    entries: Vec<Entry>,
    categories: Vec<(&'static str, Range<usize>)>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Build from the built-in table with default options
    pub fn builtin() -> Result<Self> {
        Self::build(BUILTIN)
    }

    /// Build from `categories` with default options
    pub fn build(categories: &[CategoryDef]) -> Result<Self> {
        Self::build_with(categories, BuildOptions::default())
    }

    /// Build from `categories`, iterating them in order.
    ///
    /// Fails with [`Error::DuplicateKey`] naming both entries when two rows
    /// resolve to the same effective key, or naming the entry and the
    /// operation when suffixing is off and a key equals an operation name.
    pub fn build_with(categories: &[CategoryDef], options: BuildOptions) -> Result<Self> {
        let total = categories.iter().map(|c| c.symbols.len()).sum();
        let mut entries: Vec<Entry> = Vec::with_capacity(total);
        let mut ranges = Vec::with_capacity(categories.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(total);

        for category in categories {
            let start = entries.len();
            for def in category.symbols {
                let key = sanitize_key(def.key, &options.reserved, options.suffix_reserved);
                if key != def.key {
                    debug!("Key '{}' is reserved, using '{}'", def.key, key);
                }

                let entry = Entry::new(category.name, key.into_owned(), def);
                if is_operation_name(entry.key()) {
                    return Err(Error::DuplicateKey {
                        key: entry.key().to_string(),
                        first: format!("operation {}", entry.key()),
                        second: entry.to_string(),
                    });
                }
                if let Some(&existing) = index.get(entry.key()) {
                    return Err(Error::DuplicateKey {
                        key: entry.key().to_string(),
                        first: entries[existing].to_string(),
                        second: entry.to_string(),
                    });
                }

                index.insert(entry.key().to_string(), entries.len());
                entries.push(entry);
            }
            ranges.push((category.name, start..entries.len()));
        }

        debug!(
            "Built symbol registry: {} entries in {} categories",
            entries.len(),
            ranges.len()
        );

        Ok(Self {
            entries,
            categories: ranges,
            index,
        })
    }

    /// Exact lookup of a key's character
    pub fn get(&self, key: &str) -> Result<char> {
        self.entry(key).map(Entry::character)
    }

    /// Exact lookup of a key's full record
    pub fn entry(&self, key: &str) -> Result<&Entry> {
        self.index
            .get(key)
            .map(|&pos| &self.entries[pos])
            .ok_or_else(|| Error::key_not_found(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Every entry in category-then-insertion order
    pub fn all_entries(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Categories in declaration order
    pub fn categories(&self) -> impl Iterator<Item = Category<'_>> + '_ {
        self.categories.iter().map(|(name, range)| Category {
            name: *name,
            entries: &self.entries[range.clone()],
        })
    }

    pub fn category(&self, name: &str) -> Option<Category<'_>> {
        self.categories().find(|c| c.name == name)
    }

    /// Every top-level name: all effective keys plus [`OPERATION_NAMES`], sorted.
    ///
    /// Keys never equal an operation name, so every name is listed once.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(Entry::key).collect();
        names.extend_from_slice(&OPERATION_NAMES);
        names.sort_unstable();
        names
    }

    /// Entries whose character is `c`, in iteration order
    pub fn by_char(&self, c: char) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(move |e| e.character == c)
    }

    /// Entries whose markup rendering is exactly `markup`
    pub fn by_markup<'a>(&'a self, markup: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.markup.is_some_and(|m| m == markup))
    }

    /// Search every entry with a raw query; see [`SearchEngine::search`]
    pub fn search(&self, query: &str) -> Result<Matches<'_>> {
        SearchEngine::new(self).search(query)
    }

    /// Search with an already compiled query
    pub fn search_query(&self, query: Query) -> Matches<'_> {
        SearchEngine::new(self).search_query(query)
    }
}

/// Indexing by key.
///
/// Panics when the key is absent; use [`Registry::get`] for a fallible lookup.
impl Index<&str> for Registry {
    type Output = char;

    fn index(&self, key: &str) -> &char {
        match self.index.get(key) {
            Some(&pos) => &self.entries[pos].character,
            None => panic!("No symbol named '{}'", key),
        }
    }
}
