//! Pipeline trait.
use crate::error::Error;

/// A runnable, one-shot processing step.
///
/// Generic over the return type so that pipelines producing data
/// (a table, a report) and pipelines only producing files share the trait.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
