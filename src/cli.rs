//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "vims", about = "ViMs corpus flattening and statistics.")]
/// Holds every command that is callable by the `vims` command.
pub enum Vims {
    #[structopt(about = "Flatten a corpus into a csv table")]
    Create(Create),
    #[structopt(about = "Print statistics about a csv table")]
    Stats(Stats),
    #[structopt(about = "Print a decoded row of a csv table as json")]
    Inspect(Inspect),
}

#[derive(Debug, StructOpt)]
/// Create command and parameters.
///
/// ```sh
/// USAGE:
///     vims create [FLAGS] [ARGS]
///
/// FLAGS:
///     -l, --line-segmenter    one sentence per line instead of unicode sentence boundaries
///
/// ARGS:
///     <cluster-root>    cluster folders location [default: original]
///     <summary-root>    gold summary folders location [default: summary]
///     <dst>             destination csv file [default: ViMs.csv]
/// ```
pub struct Create {
    #[structopt(
        parse(from_os_str),
        help = "cluster folders location",
        default_value = "original"
    )]
    pub cluster_root: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "gold summary folders location",
        default_value = "summary"
    )]
    pub summary_root: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "destination csv file",
        default_value = "ViMs.csv"
    )]
    pub dst: PathBuf,
    #[structopt(
        short = "l",
        long = "line-segmenter",
        help = "one sentence per line instead of unicode sentence boundaries"
    )]
    pub line_segmenter: bool,
}

#[derive(Debug, StructOpt)]
/// Stats command and parameters.
pub struct Stats {
    #[structopt(parse(from_os_str), help = "csv table", default_value = "ViMs.csv")]
    pub src: PathBuf,
    #[structopt(long = "head", help = "number of rows to show", default_value = "5")]
    pub head: usize,
    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        help = "also write descriptive statistics to this csv file"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Inspect command and parameters.
pub struct Inspect {
    #[structopt(parse(from_os_str), help = "csv table", default_value = "ViMs.csv")]
    pub src: PathBuf,
    #[structopt(short = "r", long = "row", help = "row index", default_value = "0")]
    pub row: usize,
}
