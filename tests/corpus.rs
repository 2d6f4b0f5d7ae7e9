use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vims::encoding::{encode_cluster, SENT_SEP};
use vims::error::Error;
use vims::io::{load_table, read_table, write_table};
use vims::layout::HEADER_LINES;
use vims::pipeline::create_csv;
use vims::segment::UnicodeSegmenter;
use vims::stats::summarize;
use vims::types::{Entry, Record};

fn header(title: &str) -> String {
    let mut h = format!("Title: {}\n", title);
    for i in 1..HEADER_LINES {
        h.push_str(&format!("meta {}\n", i));
    }
    h
}

/// Two clusters with known contents, plus a hidden file at the root.
struct Corpus {
    dir: TempDir,
}

impl Corpus {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let c = Self { dir };

        c.document(
            "cluster_1",
            "a.txt",
            &format!("{}Bão số 3 đổ bộ. Gió mạnh cấp 12.\nNhiều nhà bị tốc mái.\n", header("a")),
        );
        c.document(
            "cluster_1",
            "b.txt",
            &format!("{}Chính quyền sơ tán dân.\n", header("b")),
        );
        c.gold(
            "cluster_1",
            "Bão số 3 gây thiệt hại lớn. Dân được sơ tán.",
            "Bão đổ bộ.\nNhà bị tốc mái.",
        );

        c.document("cluster_2", "only.txt", &header("empty body"));
        c.gold("cluster_2", "Không có gì.", "Trống.");

        fs::write(c.clusters().join(".DS_Store"), [0u8, 159, 146, 150]).unwrap();
        c
    }

    fn clusters(&self) -> PathBuf {
        self.dir.path().join("original")
    }

    fn summaries(&self) -> PathBuf {
        self.dir.path().join("summary")
    }

    fn document(&self, cluster: &str, name: &str, content: &str) {
        let dir = self.clusters().join(cluster).join("original");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    fn gold(&self, cluster: &str, first: &str, second: &str) {
        let dir = self.summaries().join(cluster);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("0.gold.txt"), first).unwrap();
        fs::write(dir.join("1.gold.txt"), second).unwrap();
    }

    fn create(&self, dst: &Path) -> Result<Vec<Record>, Error> {
        create_csv(&self.clusters(), &self.summaries(), dst, UnicodeSegmenter)
    }
}

#[test_log::test]
fn end_to_end() {
    let corpus = Corpus::new();
    let dst = corpus.dir.path().join("ViMs.csv");
    corpus.create(&dst).unwrap();

    let entries = load_table(&dst).unwrap();
    assert_eq!(entries.len(), 2);

    let c1 = &entries[0];
    assert_eq!(c1.cluster_id, "cluster_1");
    assert_eq!(
        c1.cluster,
        vec![
            vec!["Bão số 3 đổ bộ.", "Gió mạnh cấp 12.", "Nhiều nhà bị tốc mái."],
            vec!["Chính quyền sơ tán dân."],
        ]
    );
    assert_eq!(
        c1.summary1,
        vec!["Bão số 3 gây thiệt hại lớn.", "Dân được sơ tán."]
    );
    assert_eq!(c1.summary2, vec!["Bão đổ bộ.", "Nhà bị tốc mái."]);

    let c2 = &entries[1];
    assert_eq!(c2.cluster_id, "cluster_2");
    // a single header-only document encodes to "", which decodes as no documents
    assert!(c2.cluster.is_empty());
    assert_eq!(c2.summary1, vec!["Không có gì."]);
    assert_eq!(c2.summary2, vec!["Trống."]);
}

#[test]
fn deterministic() {
    let corpus = Corpus::new();
    let first = corpus.dir.path().join("first.csv");
    let second = corpus.dir.path().join("second.csv");

    corpus.create(&first).unwrap();
    corpus.create(&second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn flat_fields() {
    let corpus = Corpus::new();
    let dst = corpus.dir.path().join("ViMs.csv");
    let table = corpus.create(&dst).unwrap();

    assert_eq!(read_table(&dst).unwrap(), table);
    assert_eq!(
        table[0].cluster,
        "Bão số 3 đổ bộ.<sent/>Gió mạnh cấp 12.<sent/>Nhiều nhà bị tốc mái.<doc/>Chính quyền sơ tán dân."
    );
    assert_eq!(table[1].cluster, "");
}

#[test]
fn missing_summary_writes_nothing() {
    let corpus = Corpus::new();
    fs::remove_file(corpus.summaries().join("cluster_2").join("0.gold.txt")).unwrap();
    let dst = corpus.dir.path().join("ViMs.csv");

    assert!(matches!(corpus.create(&dst), Err(Error::Path(_, _))));
    assert!(!dst.exists());
}

#[test]
fn table_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("ViMs.csv");

    let entries = vec![
        Entry {
            cluster_id: "001".to_string(),
            cluster: vec![
                vec!["s1, with a comma".to_string(), "s2 \"quoted\"".to_string()],
                vec![],
                vec!["s3\nacross lines".to_string()],
            ],
            summary1: vec!["x".to_string()],
            summary2: vec![],
        },
        Entry {
            cluster_id: "002".to_string(),
            cluster: vec![vec!["only".to_string()]],
            summary1: vec!["y".to_string(), "z".to_string()],
            summary2: vec!["w".to_string()],
        },
    ];
    let table: Vec<Record> = entries
        .iter()
        .map(|e| Record::try_from(e).unwrap())
        .collect();

    write_table(&table, &dst).unwrap();
    assert_eq!(load_table(&dst).unwrap(), entries);
}

#[test]
fn statistics() {
    let corpus = Corpus::new();
    let dst = corpus.dir.path().join("ViMs.csv");
    corpus.create(&dst).unwrap();

    let report = summarize(&load_table(&dst).unwrap());
    let (_, c1) = &report.rows[0];
    assert_eq!(c1.nb_docs, 2);
    assert_eq!(c1.nb_sents, vec![3, 1]);
    assert_eq!(c1.longest_doc, Some(3));
    assert_eq!(c1.shortest_doc, Some(1));
    assert_eq!(
        c1.longest_sent,
        Some("Chính quyền sơ tán dân.".chars().count())
    );
    assert_eq!(c1.shortest_sent, Some("Bão số 3 đổ bộ.".chars().count()));

    let (_, c2) = &report.rows[1];
    assert_eq!(c2.nb_docs, 0);
    assert_eq!(c2.longest_sent, None);

    // cluster_2 has no sentences, only cluster_1 counts
    assert_eq!(report.describe[3].count, 1);
}

#[test]
fn delimiter_in_source_is_rejected() {
    let corpus = Corpus::new();
    corpus.document(
        "cluster_1",
        "c.txt",
        &format!("{}markup{}leak\n", header("c"), SENT_SEP),
    );
    let dst = corpus.dir.path().join("ViMs.csv");
    assert!(matches!(corpus.create(&dst), Err(Error::Delimiter(_))));
    assert!(encode_cluster(&[vec!["a<doc/>"]]).is_err());
}
