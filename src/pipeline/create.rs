/*! Table creation

Walks `cluster_root`, encodes every (non-hidden) cluster with its two gold summaries,
and yields one [Record] per cluster, in cluster name order.

The first missing file or directory aborts the whole run: a table is either complete or not written.
!*/
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;
use crate::io::{fs::list_dir, write_table};
use crate::layout::CorpusLayout;
use crate::pipeline::{cluster::read_cluster, pipeline::Pipeline, summary::read_summary};
use crate::segment::{Segmenter, UnicodeSegmenter};
use crate::types::{Record, Table};

/// Corpus → [Table] pipeline.
pub struct CreateTable<S: Segmenter> {
    cluster_root: PathBuf,
    summary_root: PathBuf,
    layout: CorpusLayout,
    segmenter: S,
}

impl CreateTable<UnicodeSegmenter> {
    /// Default layout, Unicode sentence segmentation.
    pub fn new(cluster_root: PathBuf, summary_root: PathBuf) -> Self {
        Self::with_segmenter(cluster_root, summary_root, UnicodeSegmenter)
    }
}

impl<S: Segmenter> CreateTable<S> {
    pub fn with_segmenter(cluster_root: PathBuf, summary_root: PathBuf, segmenter: S) -> Self {
        Self {
            cluster_root,
            summary_root,
            layout: CorpusLayout::default(),
            segmenter,
        }
    }

    pub fn layout(mut self, layout: CorpusLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Encodes a single cluster.
    pub fn record(&self, cluster_id: &str) -> Result<Record, Error> {
        let documents_dir = self.layout.documents_dir(&self.cluster_root, cluster_id);
        let documents = read_cluster(&documents_dir, &self.segmenter, self.layout.header_lines)?;

        let [gold1, gold2] = self.layout.gold_files(&self.summary_root, cluster_id);
        let summary1 = read_summary(&gold1, &self.segmenter)?;
        let summary2 = read_summary(&gold2, &self.segmenter)?;

        debug!(
            "[{}] {} documents, summaries of {} and {} sentences",
            cluster_id,
            documents.len(),
            summary1.len(),
            summary2.len()
        );

        Record::encode(cluster_id, &documents, &summary1, &summary2)
    }
}

impl<S: Segmenter> Pipeline<Table> for CreateTable<S> {
    fn run(&self) -> Result<Table, Error> {
        let clusters = list_dir(&self.cluster_root)?;
        info!("found {} clusters in {:?}", clusters.len(), self.cluster_root);

        clusters
            .iter()
            .map(|cluster| self.record(&cluster.name))
            .collect()
    }
}

/// Builds the table of the corpus at `cluster_root`/`summary_root` with the default layout.
pub fn create_table<S: Segmenter>(
    cluster_root: &Path,
    summary_root: &Path,
    segmenter: S,
) -> Result<Table, Error> {
    CreateTable::with_segmenter(cluster_root.to_path_buf(), summary_root.to_path_buf(), segmenter)
        .run()
}

/// Builds the table and writes it to `dst`.
///
/// Nothing is written if any cluster fails.
pub fn create_csv<S: Segmenter>(
    cluster_root: &Path,
    summary_root: &Path,
    dst: &Path,
    segmenter: S,
) -> Result<Table, Error> {
    let table = create_table(cluster_root, summary_root, segmenter)?;
    write_table(&table, dst)?;
    Ok(table)
}
