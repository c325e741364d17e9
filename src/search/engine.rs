//! Search Engine
//!
//! Scans a registry's entries in their deterministic order and yields those
//! a compiled [`Query`] matches.

use std::iter::FusedIterator;
use std::slice;

use tracing::debug;

use super::query::Query;
use crate::error::Result;
use crate::registry::{Entry, Registry};

/// Search engine bound to one registry
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    registry: &'a Registry,
}

impl<'a> SearchEngine<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Search with a raw query string.
    ///
    /// The query is compiled before any entry is scanned, so an invalid
    /// pattern fails the whole call with [`crate::Error::InvalidQuery`].
    pub fn search(&self, query: &str) -> Result<Matches<'a>> {
        let query = Query::new(query)?;
        Ok(self.search_query(query))
    }

    /// Search with a compiled query. Each call starts a fresh scan.
    pub fn search_query(&self, query: Query) -> Matches<'a> {
        debug!("Searching {} symbols for '{}'", self.registry.len(), query.raw());
        Matches {
            query,
            entries: self.registry.all_entries(),
        }
    }
}

/// Lazy sequence of entries matching a query, in registry order
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    query: Query,
    entries: slice::Iter<'a, Entry>,
}

impl<'a> Matches<'a> {
    pub fn query(&self) -> &Query {
        &self.query
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let query = &self.query;
        self.entries.by_ref().find(|entry| query.is_match(entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.entries.len()))
    }
}

impl FusedIterator for Matches<'_> {}
