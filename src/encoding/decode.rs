//! Flat → nested.
use super::{DOC_SEP, SENT_SEP};

/// Splits a summary into its sentences.
///
/// An empty string is an empty summary.
pub fn decode_summary(summary: &str) -> Vec<String> {
    if summary.is_empty() {
        return Vec::new();
    }
    summary.split(SENT_SEP).map(String::from).collect()
}

/// Splits a cluster into documents, then each document into sentences.
///
/// Empty segments between two [DOC_SEP] are empty documents.
pub fn decode_cluster(cluster: &str) -> Vec<Vec<String>> {
    if cluster.is_empty() {
        return Vec::new();
    }
    cluster.split(DOC_SEP).map(decode_summary).collect()
}
