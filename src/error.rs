//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// I/O error tied to a specific file or directory.
    Path(PathBuf, std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    /// Persisted table does not have the expected shape.
    Format(String),
    /// A sentence contains a reserved delimiter and can't be flat-encoded.
    Delimiter(String),
    EmptySentence,
    Custom(String),
}

impl Error {
    /// Wraps an [std::io::Error] with the path that caused it.
    pub fn with_path(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |e| Error::Path(path, e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::Path(p, e) => write!(f, "{}: {}", p.display(), e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Format(s) => write!(f, "malformed table: {}", s),
            Error::Delimiter(s) => write!(f, "sentence contains a reserved delimiter: {:?}", s),
            Error::EmptySentence => write!(f, "empty sentences can't be encoded"),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) | Error::Path(_, e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
