//! Per-cluster size metrics.
use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use crate::types::{Document, Entry};

/// Size metrics of a single cluster.
///
/// Sentence lengths are counted in Unicode scalar values, not bytes.
/// Extremes are `None` when there is nothing to measure (no document, no sentence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterStats {
    pub nb_docs: usize,
    /// Sentence count of every document.
    pub nb_sents: Vec<usize>,
    pub longest_doc: Option<usize>,
    pub shortest_doc: Option<usize>,
    pub longest_sent: Option<usize>,
    pub shortest_sent: Option<usize>,
}

fn bounds(values: impl Iterator<Item = usize>) -> (Option<usize>, Option<usize>) {
    match values.minmax() {
        MinMaxResult::NoElements => (None, None),
        MinMaxResult::OneElement(v) => (Some(v), Some(v)),
        MinMaxResult::MinMax(min, max) => (Some(max), Some(min)),
    }
}

impl ClusterStats {
    pub fn new(cluster: &[Document]) -> Self {
        let nb_sents: Vec<usize> = cluster.iter().map(Vec::len).collect();
        let (longest_doc, shortest_doc) = bounds(nb_sents.iter().copied());
        let (longest_sent, shortest_sent) =
            bounds(cluster.iter().flatten().map(|s| s.chars().count()));

        Self {
            nb_docs: cluster.len(),
            nb_sents,
            longest_doc,
            shortest_doc,
            longest_sent,
            shortest_sent,
        }
    }
}

impl From<&Entry> for ClusterStats {
    fn from(e: &Entry) -> Self {
        Self::new(&e.cluster)
    }
}
