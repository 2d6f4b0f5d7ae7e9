use serde::Serialize;

use crate::encoding::{decode_cluster, decode_summary};
use crate::error::Error;

use super::{Document, Record};

/// Decoded cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub cluster_id: String,
    pub cluster: Vec<Document>,
    pub summary1: Document,
    pub summary2: Document,
}

impl From<&Record> for Entry {
    fn from(r: &Record) -> Self {
        Self {
            cluster_id: r.cluster_id.clone(),
            cluster: decode_cluster(&r.cluster),
            summary1: decode_summary(&r.summary1),
            summary2: decode_summary(&r.summary2),
        }
    }
}

impl From<Record> for Entry {
    fn from(r: Record) -> Self {
        Entry::from(&r)
    }
}

impl TryFrom<&Entry> for Record {
    type Error = Error;

    fn try_from(e: &Entry) -> Result<Self, Self::Error> {
        Record::encode(e.cluster_id.clone(), &e.cluster, &e.summary1, &e.summary2)
    }
}

impl Entry {
    /// Iterates over every sentence of the cluster, documents flattened.
    pub fn sentences(&self) -> impl Iterator<Item = &String> {
        self.cluster.iter().flatten()
    }
}
