/*! Cluster extraction

A cluster directory holds one raw text file per source document.
Each file starts with [crate::layout::HEADER_LINES] header lines that are dropped;
every remaining line is segmented and the sentences are concatenated in line order.

Files are read in file name order.
!*/
use std::path::Path;

use log::{debug, warn};

use crate::encoding::encode_cluster;
use crate::error::Error;
use crate::io::fs::{list_dir, read_lines};
use crate::segment::Segmenter;
use crate::types::Document;

/// Reads a source document, skipping its first `header_lines` lines.
///
/// A file with `header_lines` lines or fewer is an empty document.
pub fn read_document<S>(
    path: &Path,
    segmenter: &S,
    header_lines: usize,
) -> Result<Document, Error>
where
    S: Segmenter + ?Sized,
{
    let lines = read_lines(path)?;
    if lines.len() < header_lines {
        warn!(
            "{:?} has {} lines, less than the {} expected header lines",
            path,
            lines.len(),
            header_lines
        );
    }

    let sentences: Document = lines
        .iter()
        .skip(header_lines)
        .flat_map(|line| segmenter.segment(line))
        .collect();

    debug!("{:?}: {} sentences", path, sentences.len());
    Ok(sentences)
}

/// Reads every document of a cluster directory.
pub fn read_cluster<S>(
    dir: &Path,
    segmenter: &S,
    header_lines: usize,
) -> Result<Vec<Document>, Error>
where
    S: Segmenter + ?Sized,
{
    let documents = list_dir(dir)?
        .iter()
        .map(|entry| read_document(&entry.path, segmenter, header_lines))
        .collect::<Result<Vec<_>, _>>()?;

    if documents.is_empty() {
        warn!("{:?} has no documents", dir);
    }
    Ok(documents)
}

/// Reads and flat-encodes a cluster directory.
pub fn extract_cluster<S>(dir: &Path, segmenter: &S, header_lines: usize) -> Result<String, Error>
where
    S: Segmenter + ?Sized,
{
    encode_cluster(&read_cluster(dir, segmenter, header_lines)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::layout::HEADER_LINES;
    use crate::segment::{LineSegmenter, UnicodeSegmenter};

    fn header() -> String {
        (0..HEADER_LINES).map(|i| format!("meta {}\n", i)).collect()
    }

    #[test]
    fn header_skip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, format!("{}One. Two.\n\nThree.\n", header())).unwrap();

        let doc = read_document(&path, &UnicodeSegmenter, HEADER_LINES).unwrap();
        assert_eq!(doc, vec!["One.", "Two.", "Three."]);
    }

    #[test]
    fn header_only() {
        let dir = tempdir().unwrap();
        let exactly = dir.path().join("exactly.txt");
        let fewer = dir.path().join("fewer.txt");
        fs::write(&exactly, header()).unwrap();
        fs::write(&fewer, "Title.\nSource.\n").unwrap();

        assert!(read_document(&exactly, &UnicodeSegmenter, HEADER_LINES)
            .unwrap()
            .is_empty());
        assert!(read_document(&fewer, &UnicodeSegmenter, HEADER_LINES)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn documents_in_name_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), format!("{}b1\nb2\n", header())).unwrap();
        fs::write(dir.path().join("a.txt"), format!("{}a1\n", header())).unwrap();
        fs::write(dir.path().join("c.txt"), header()).unwrap();

        let encoded = extract_cluster(dir.path(), &LineSegmenter, HEADER_LINES).unwrap();
        assert_eq!(encoded, "a1<doc/>b1<sent/>b2<doc/>");
    }

    #[test]
    fn empty_cluster() {
        let dir = tempdir().unwrap();
        assert_eq!(
            extract_cluster(dir.path(), &UnicodeSegmenter, HEADER_LINES).unwrap(),
            ""
        );
    }

    #[test]
    fn missing_cluster() {
        let dir = tempdir().unwrap();
        let r = extract_cluster(&dir.path().join("original"), &UnicodeSegmenter, HEADER_LINES);
        assert!(matches!(r, Err(Error::Path(_, _))));
    }
}
