//! Fuzzy ranking of bucket, prefix and object names.
//!
//! - [`entry`]: candidate normalization ([`Searchable`], [`Candidate`], [`Entry`])
//! - [`fuzzy`]: indexing, scoring and ranked iteration ([`Fuzzy`], [`Match`])

pub mod entry;
pub mod fuzzy;

pub use entry::{Candidate, Entry, Fields, Searchable};
pub use fuzzy::{Fuzzy, Match, Matches, Ranked};
