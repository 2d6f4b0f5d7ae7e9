use serde::{Deserialize, Serialize};

use crate::encoding::{encode_cluster, encode_summary};
use crate::error::Error;

use super::Document;

/// Column names, in persisted order.
pub const COLUMNS: [&str; 4] = ["cluster_id", "cluster", "summary1", "summary2"];

/// Flat-encoded cluster, one row of the persisted table.
///
/// Field order matches [COLUMNS] and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub cluster_id: String,
    pub cluster: String,
    pub summary1: String,
    pub summary2: String,
}

/// Rows of the persisted table, in cluster enumeration order.
pub type Table = Vec<Record>;

impl Record {
    /// Encodes a cluster and its two reference summaries.
    pub fn encode(
        cluster_id: impl Into<String>,
        documents: &[Document],
        summary1: &[String],
        summary2: &[String],
    ) -> Result<Self, Error> {
        Ok(Self {
            cluster_id: cluster_id.into(),
            cluster: encode_cluster(documents)?,
            summary1: encode_summary(summary1)?,
            summary2: encode_summary(summary2)?,
        })
    }
}
