/*! # vims

Conversion of the ViMs multi-document summarization corpus into a flat csv table, and back.

- [pipeline] reads cluster folders and gold summaries, segments them into sentences and builds the [types::Table],
- [encoding] packs nested sentence lists into flat strings (and unpacks them),
- [io] persists and loads the table,
- [stats] reports size statistics over decoded clusters.

```no_run
use std::path::Path;
use vims::{io::load_table, pipeline::create_csv, segment::UnicodeSegmenter, stats::summarize};

create_csv(Path::new("original"), Path::new("summary"), Path::new("ViMs.csv"), UnicodeSegmenter)?;
let entries = load_table(Path::new("ViMs.csv"))?;
println!("{}", summarize(&entries));
# Ok::<(), vims::error::Error>(())
```
!*/
pub mod encoding;
pub mod error;
pub mod io;
pub mod layout;
pub mod pipeline;
pub mod segment;
pub mod stats;
pub mod types;
