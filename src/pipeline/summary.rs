//! Gold summary extraction.
//!
//! Summaries have no header and no document level: all lines are segmented
//! and the sentences are concatenated.
use std::path::Path;

use crate::encoding::encode_summary;
use crate::error::Error;
use crate::io::fs::read_lines;
use crate::segment::Segmenter;
use crate::types::Document;

pub fn read_summary<S>(path: &Path, segmenter: &S) -> Result<Document, Error>
where
    S: Segmenter + ?Sized,
{
    Ok(read_lines(path)?
        .iter()
        .flat_map(|line| segmenter.segment(line))
        .collect())
}

/// Reads and flat-encodes a gold summary file.
pub fn get_summary<S>(path: &Path, segmenter: &S) -> Result<String, Error>
where
    S: Segmenter + ?Sized,
{
    encode_summary(&read_summary(path, segmenter)?)
}
