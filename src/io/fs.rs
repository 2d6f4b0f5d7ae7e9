/*! Filesystem helpers

Directory listings are sorted by file name: corpora produced on different machines
must encode to the same bytes, and `read_dir` order is platform dependent.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::Error;
use crate::layout::is_hidden;

/// A directory entry, keeping its name as a [String].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Lists the entries of `dir` that are not hidden, sorted by name.
///
/// Names that are not valid UTF-8 are an error, since they end up as cluster identifiers.
pub fn list_dir(dir: &Path) -> Result<Vec<DirEntry>, Error> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(Error::with_path(dir))? {
        let entry = entry.map_err(Error::with_path(dir))?;
        let name = entry.file_name().into_string().map_err(|name| {
            Error::Custom(format!("{:?}: non UTF-8 file name {:?}", dir, name))
        })?;

        if is_hidden(&name) {
            debug!("skipping hidden entry {:?}", entry.path());
            continue;
        }

        entries.push(DirEntry {
            name,
            path: entry.path(),
        });
    }

    entries.sort();
    Ok(entries)
}

/// Reads every line of a UTF-8 text file, without line terminators.
///
/// The file is closed before returning, whether reading succeeded or not.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let f = File::open(path).map_err(Error::with_path(path))?;
    BufReader::new(f)
        .lines()
        .collect::<Result<_, _>>()
        .map_err(Error::with_path(path))
}
