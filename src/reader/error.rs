use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error that can occur while reading the lines of a file
#[derive(Debug)]
pub enum ReadError {
    /// The file could not be opened
    Open { path: PathBuf, source: io::Error },
    /// An I/O error occurred after `line` lines were read
    Read {
        path: PathBuf,
        line: usize,
        source: io::Error,
    },
    /// Line `line` (1-based) is not valid UTF-8
    InvalidEncoding { path: PathBuf, line: usize },
}

impl ReadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ReadError::Open { path, .. }
            | ReadError::Read { path, .. }
            | ReadError::InvalidEncoding { path, .. } => path,
        }
    }

    pub fn is_open_failure(&self) -> bool {
        matches!(self, ReadError::Open { .. })
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Open { path, source } => {
                write!(f, "Cannot open file for reading {path:?}: {source}")
            }
            ReadError::Read { path, line, source } => {
                write!(f, "Read error in {path:?} after line {line}: {source}")
            }
            ReadError::InvalidEncoding { path, line } => {
                write!(f, "Invalid UTF-8 in {path:?} at line {line}")
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Open { source, .. } | ReadError::Read { source, .. } => Some(source),
            ReadError::InvalidEncoding { .. } => None,
        }
    }
}
