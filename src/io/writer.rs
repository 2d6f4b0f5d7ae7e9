/*!
# Table writing

Persists a [Table] as CSV:

- a header row with [COLUMNS], written even if there is no record,
- `,` as delimiter, `\n` as record terminator,
- fields are quoted only when needed (they contain `,`, `"`, `\r` or `\n`), quotes are doubled.

Flat-encoded fields are written as is, so reading the file back yields the same strings.
!*/
use std::{fs::File, io::Write, path::Path};

use log::{debug, info};

use crate::error::Error;
use crate::types::{Record, Table, COLUMNS};

/// CSV writer for [Record]s.
pub struct TableWriter<W: Write> {
    inner: csv::Writer<W>,
    nb_records: usize,
}

impl TableWriter<File> {
    /// Creates (or truncates) the file at `dst`.
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        let f = File::create(dst).map_err(Error::with_path(dst))?;
        Self::new(f)
    }
}

impl<W: Write> TableWriter<W> {
    /// Wraps a writer and writes the header row.
    pub fn new(writer: W) -> Result<Self, Error> {
        let mut inner = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(writer);
        inner.write_record(COLUMNS)?;

        Ok(Self {
            inner,
            nb_records: 0,
        })
    }

    pub fn write_single(&mut self, record: &Record) -> Result<(), Error> {
        debug!("writing cluster {}", record.cluster_id);
        self.inner.serialize(record)?;
        self.nb_records += 1;
        Ok(())
    }

    pub fn write(&mut self, records: &[Record]) -> Result<(), Error> {
        for record in records {
            self.write_single(record)?;
        }
        Ok(())
    }

    /// Number of records written so far.
    pub fn nb_records(&self) -> usize {
        self.nb_records
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flushes and gives back the underlying writer.
    pub fn into_inner(self) -> Result<W, Error> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

/// Writes `table` to `dst`, overwriting any existing file.
pub fn write_table(table: &Table, dst: &Path) -> Result<(), Error> {
    let mut w = TableWriter::from_path(dst)?;
    w.write(table)?;
    w.flush()?;
    info!("wrote {} clusters to {:?}", w.nb_records(), dst);
    Ok(())
}
