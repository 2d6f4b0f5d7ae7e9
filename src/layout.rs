//! On-disk corpus conventions.
//!
//! ```text
//! cluster_root/<cluster_id>/original/<documents>
//! summary_root/<cluster_id>/0.gold.txt
//! summary_root/<cluster_id>/1.gold.txt
//! ```
use std::path::{Path, PathBuf};

/// Number of metadata lines at the top of every source document.
///
/// ViMs documents start with a fixed 8 line header (title, source, date, ...).
/// These lines are dropped without being looked at.
pub const HEADER_LINES: usize = 8;

/// Directory entries starting with this are ignored (`.DS_Store`, `.git`, ...).
pub const HIDDEN_PREFIX: char = '.';

/// Names and constants describing where things are in a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLayout {
    /// Subdirectory of a cluster holding its source documents.
    pub originals: String,
    /// Gold summary file names, first then second annotator.
    pub gold: [String; 2],
    pub header_lines: usize,
}

impl Default for CorpusLayout {
    fn default() -> Self {
        Self {
            originals: "original".to_string(),
            gold: ["0.gold.txt".to_string(), "1.gold.txt".to_string()],
            header_lines: HEADER_LINES,
        }
    }
}

impl CorpusLayout {
    /// `cluster_root/<cluster_id>/original`
    pub fn documents_dir(&self, cluster_root: &Path, cluster_id: &str) -> PathBuf {
        [cluster_root, Path::new(cluster_id), Path::new(&self.originals)]
            .iter()
            .collect()
    }

    /// `summary_root/<cluster_id>/{0,1}.gold.txt`
    pub fn gold_files(&self, summary_root: &Path, cluster_id: &str) -> [PathBuf; 2] {
        let dir = summary_root.join(cluster_id);
        [dir.join(&self.gold[0]), dir.join(&self.gold[1])]
    }
}

/// Whether a directory entry name should be skipped.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_PREFIX)
}
