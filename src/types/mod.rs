//! Corpus types.
//!
//! A [Record] is the flat, persisted form of a cluster.
//! An [Entry] is the same cluster once decoded back into nested sentence lists.
mod entry;
mod record;

pub use entry::Entry;
pub use record::{Record, Table, COLUMNS};

/// Sentences of a single document or summary.
pub type Document = Vec<String>;
