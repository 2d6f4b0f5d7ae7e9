/*! Corpus statistics

[summarize] computes [ClusterStats] for every decoded cluster, then a [Describe] for each numeric metric:

| column                  | metric                                        |
|-------------------------|-----------------------------------------------|
| `nb_docs`               | number of documents in the cluster            |
| `longest_doc (#sents)`  | sentence count of the longest document        |
| `shortest_doc (#sents)` | sentence count of the shortest document       |
| `longest_sent (#chars)` | character count of the longest sentence       |
| `shortest_sent (#chars)`| character count of the shortest sentence      |

Entries are only read.
!*/
mod cluster;
mod describe;

use std::fmt;
use std::path::Path;

use log::info;

pub use cluster::ClusterStats;
pub use describe::Describe;

use crate::error::Error;
use crate::types::{Entry, COLUMNS};

pub const NB_DOCS: &str = "nb_docs";
pub const NB_SENTS: &str = "nb_sents";
pub const LONGEST_DOC: &str = "longest_doc (#sents)";
pub const SHORTEST_DOC: &str = "shortest_doc (#sents)";
pub const LONGEST_SENT: &str = "longest_sent (#chars)";
pub const SHORTEST_SENT: &str = "shortest_sent (#chars)";

/// Number of rows shown by [Report]'s [fmt::Display] implementation.
pub const DEFAULT_HEAD: usize = 5;

/// Statistics over a whole table.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// (rows, columns) of the loaded table.
    pub shape: (usize, usize),
    /// Cluster ids and their metrics, in table order.
    pub rows: Vec<(String, ClusterStats)>,
    pub describe: Vec<Describe>,
    head: usize,
}

fn column<F>(rows: &[(String, ClusterStats)], name: &str, metric: F) -> Describe
where
    F: Fn(&ClusterStats) -> Option<usize>,
{
    Describe::new(name, rows.iter().map(|(_, s)| metric(s).map(|v| v as f64)))
}

/// Computes per-cluster metrics and their descriptive statistics.
pub fn summarize(entries: &[Entry]) -> Report {
    let rows: Vec<(String, ClusterStats)> = entries
        .iter()
        .map(|e| (e.cluster_id.clone(), ClusterStats::from(e)))
        .collect();

    let describe = vec![
        column(&rows, NB_DOCS, |s| Some(s.nb_docs)),
        column(&rows, LONGEST_DOC, |s| s.longest_doc),
        column(&rows, SHORTEST_DOC, |s| s.shortest_doc),
        column(&rows, LONGEST_SENT, |s| s.longest_sent),
        column(&rows, SHORTEST_SENT, |s| s.shortest_sent),
    ];

    info!("computed statistics over {} clusters", rows.len());
    Report {
        shape: (entries.len(), COLUMNS.len()),
        rows,
        describe,
        head: DEFAULT_HEAD,
    }
}

impl Report {
    /// Sets how many rows are displayed.
    pub fn with_head(mut self, head: usize) -> Self {
        self.head = head;
        self
    }

    /// Writes the descriptive statistics to `dst` as CSV, one row per column.
    pub fn write_describe(&self, dst: &Path) -> Result<(), Error> {
        let mut w = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_path(dst)?;
        for d in &self.describe {
            w.serialize(d)?;
        }
        w.flush()?;
        Ok(())
    }

    fn head_table(&self) -> Vec<Vec<String>> {
        let mut lines: Vec<Vec<String>> = vec![[
            "cluster_id",
            NB_DOCS,
            NB_SENTS,
            LONGEST_DOC,
            SHORTEST_DOC,
            LONGEST_SENT,
            SHORTEST_SENT,
        ]
        .iter()
        .map(|h| h.to_string())
        .collect()];

        for (id, s) in self.rows.iter().take(self.head) {
            lines.push(vec![
                id.clone(),
                s.nb_docs.to_string(),
                format!("{:?}", s.nb_sents),
                opt(s.longest_doc),
                opt(s.shortest_doc),
                opt(s.longest_sent),
                opt(s.shortest_sent),
            ]);
        }
        lines
    }

    fn describe_table(&self) -> Vec<Vec<String>> {
        let mut header = vec![String::new()];
        header.extend(self.describe.iter().map(|d| d.column.clone()));
        let mut lines = vec![header];

        let values: Vec<_> = self.describe.iter().map(Describe::values).collect();
        if let Some(first) = values.first() {
            for (i, (name, _)) in first.iter().enumerate() {
                let mut line = vec![name.to_string()];
                line.extend(values.iter().map(|v| match v[i].1 {
                    Some(x) => format!("{:.6}", x),
                    None => "NaN".to_string(),
                }));
                lines.push(line);
            }
        }
        lines
    }
}

fn opt(v: Option<usize>) -> String {
    v.map_or_else(|| "NaN".to_string(), |v| v.to_string())
}

/// Right-aligned columns, first column left-aligned.
fn render(f: &mut fmt::Formatter<'_>, lines: &[Vec<String>]) -> fmt::Result {
    let nb_cols = lines.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..nb_cols)
        .map(|c| {
            lines
                .iter()
                .filter_map(|l| l.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for line in lines {
        for (c, cell) in line.iter().enumerate() {
            if c == 0 {
                write!(f, "{:<width$}", cell, width = widths[c])?;
            } else {
                write!(f, "  {:>width$}", cell, width = widths[c])?;
            }
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dataset.shape: {:?}", self.shape)?;
        render(f, &self.head_table())?;
        writeln!(f)?;
        render(f, &self.describe_table())
    }
}
