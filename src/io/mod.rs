/*!
# IO utilities

Corpus file access and persisted table reading/writing.

- [fs] lists corpus directories in a stable order and reads raw text files,
- [writer] persists a [crate::types::Table] as CSV,
- [reader] loads it back.
!*/
pub mod fs;
pub mod reader;
pub mod writer;

pub use reader::{load_table, read_table, TableReader};
pub use writer::{write_table, TableWriter};
