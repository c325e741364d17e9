//! Free-text symbol search
//!
//! A raw query is compiled once into a case-insensitive regular expression
//! ([`Query`]) and matched against each entry's key, canonical name,
//! category and aliases, in that order. Results follow registry order.

pub mod engine;
pub mod query;


pub use engine::{Matches, SearchEngine};
pub use query::{MatchField, Query, MATCH_ALL};
