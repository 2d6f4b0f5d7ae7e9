//! Corpus → table pipelines.
//!
//! [cluster] and [summary] turn raw files into sentence lists and flat strings,
//! [CreateTable] walks a whole corpus and provides a [pipeline::Pipeline] returning the [crate::types::Table].
pub mod cluster;
mod create;
pub mod pipeline;
pub mod summary;

pub use cluster::extract_cluster;
pub use create::{create_csv, create_table, CreateTable};
pub use summary::get_summary;
