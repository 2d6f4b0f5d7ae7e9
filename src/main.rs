//! # vims
//!
//! Flattens the ViMs multi-document summarization corpus into a single csv table,
//! and reads it back to compute statistics.
//!
//! ```sh
//! USAGE:
//!     vims <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     create     Flatten a corpus into a csv table
//!     help       Prints this message or the help of the given subcommand(s)
//!     inspect    Print a decoded row of a csv table as json
//!     stats      Print statistics about a csv table
//! ```
//!
//! Use `RUST_LOG=info` (or `debug`) to follow progress.
use structopt::StructOpt;

use vims::error::Error;
use vims::io::load_table;
use vims::pipeline::create_csv;
use vims::segment::{LineSegmenter, Segmenter, UnicodeSegmenter};
use vims::stats::summarize;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Vims::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Vims::Create(c) => {
            let segmenter: Box<dyn Segmenter> = if c.line_segmenter {
                Box::new(LineSegmenter)
            } else {
                Box::new(UnicodeSegmenter)
            };
            let table = create_csv(&c.cluster_root, &c.summary_root, &c.dst, segmenter)?;
            info!("{} clusters written to {:?}", table.len(), c.dst);
        }

        cli::Vims::Stats(s) => {
            let entries = load_table(&s.src)?;
            let report = summarize(&entries).with_head(s.head);
            print!("{}", report);
            if let Some(output) = s.output {
                report.write_describe(&output)?;
                info!("descriptive statistics written to {:?}", output);
            }
        }

        cli::Vims::Inspect(i) => {
            let entries = load_table(&i.src)?;
            let entry = entries.get(i.row).ok_or_else(|| {
                Error::Custom(format!(
                    "row {} out of range, {:?} has {} rows",
                    i.row,
                    i.src,
                    entries.len()
                ))
            })?;
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
    };
    Ok(())
}
