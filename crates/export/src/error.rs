use std::fmt;

#[derive(Debug)]
pub enum ExportError {
    /// Code book TOML parse / read error.
    CodeBook(String),
    /// Output file error.
    Io(String),
    /// CSV serialization error.
    Csv(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeBook(msg) => write!(f, "code book error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}
