use std::path::Path;

pub mod event;
pub mod options;
pub mod reader;
mod tools;

pub use event::ReadEvent;
pub use options::{Encoding, Options};
pub use reader::{LineReader, LineSequence, ReadError};

/// Reads all the lines of the file at `path` with the default reader.
///
/// If the file cannot be opened, a message is written to standard error and the
/// sequence is empty. Use [`try_read_all_lines`] to tell the two apart.
pub fn read_all_lines(path: impl AsRef<Path>) -> LineSequence {
    LineReader::default().read_all_lines(path)
}

pub fn try_read_all_lines(path: impl AsRef<Path>) -> Result<LineSequence, ReadError> {
    LineReader::default().try_read_all_lines(path)
}
