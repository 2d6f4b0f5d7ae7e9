/*! Table reading

[TableReader] iterates over the [Record]s of a persisted table, after checking its header.
[load_table] reads a whole table and decodes every record into an [Entry].
!*/
use std::{fs::File, io::Read, path::Path};

use log::info;

use crate::error::Error;
use crate::types::{Entry, Record, Table, COLUMNS};

/// Iterator over the records of a CSV table.
pub struct TableReader<R: Read> {
    records: csv::DeserializeRecordsIntoIter<R, Record>,
}

impl TableReader<File> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let f = File::open(src).map_err(Error::with_path(src))?;
        Self::new(f)
    }
}

impl<R: Read> TableReader<R> {
    /// Fails with [Error::Format] if the header is not exactly [COLUMNS].
    pub fn new(reader: R) -> Result<Self, Error> {
        let mut inner = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = inner.headers()?;
        if headers.iter().ne(COLUMNS.iter().copied()) {
            return Err(Error::Format(format!(
                "expected columns {:?}, got {:?}",
                COLUMNS,
                headers.iter().collect::<Vec<_>>()
            )));
        }

        Ok(Self {
            records: inner.into_deserialize(),
        })
    }
}

impl<R: Read> Iterator for TableReader<R> {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|r| r.map_err(Error::from))
    }
}

/// Reads every flat record of the table at `src`.
pub fn read_table(src: &Path) -> Result<Table, Error> {
    let table: Table = TableReader::from_path(src)?.collect::<Result<_, _>>()?;
    info!("read {} clusters from {:?}", table.len(), src);
    Ok(table)
}

/// Reads and decodes the table at `src`.
pub fn load_table(src: &Path) -> Result<Vec<Entry>, Error> {
    Ok(read_table(src)?.into_iter().map(Entry::from).collect())
}
