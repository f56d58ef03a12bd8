use crate::event::ReadEvent;
use crate::options::{Encoding, Options};
use crate::tools::misc_tool::{gzip_uncompressed_size_fast, is_gzip, strip_separator};
use flate2::bufread::GzDecoder;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

pub mod error;
pub mod line_sequence;

pub use error::ReadError;
pub use line_sequence::LineSequence;

const PROGRESS_INTERVAL: Duration = Duration::from_millis(50);

/// Reads whole files into a [`LineSequence`].
///
/// A reader holds no state between calls: each read opens its own file handle
/// and drops it before returning.
#[derive(Debug, Clone)]
pub struct LineReader {
    encoding: Encoding,
    decompress: bool,
    sender: Option<Sender<ReadEvent>>,
}

impl Default for LineReader {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            decompress: true,
            sender: None,
        }
    }
}

impl From<&Options> for LineReader {
    fn from(options: &Options) -> Self {
        Self {
            encoding: options.encoding,
            decompress: options.decompress,
            sender: None,
        }
    }
}

impl LineReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_decompression(mut self, decompress: bool) -> Self {
        self.decompress = decompress;
        self
    }

    /// Sends [`ReadEvent`]s while reading. A closed receiver is ignored.
    pub fn with_progress(mut self, sender: Sender<ReadEvent>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Reads all the lines of a file.
    ///
    /// Failures are written to standard error and never returned: an open failure
    /// gives an empty sequence, a failure while reading gives the lines read so far.
    /// Lines that are not valid UTF-8 are decoded lossily instead of ending the read.
    pub fn read_all_lines(&self, path: impl AsRef<Path>) -> LineSequence {
        let path = path.as_ref();
        let mut lines = LineSequence::new();
        if let Err(e) = self.read_file(path, &mut lines, true) {
            eprintln!("{e}");
            debug!("{e:?}");
        }
        lines
    }

    /// Reads all the lines of a file, returning open, read and encoding failures as errors.
    pub fn try_read_all_lines(&self, path: impl AsRef<Path>) -> Result<LineSequence, ReadError> {
        let mut lines = LineSequence::new();
        self.read_lines_into(path.as_ref(), &mut lines)?;
        Ok(lines)
    }

    /// Reads the lines of any buffered reader. `source` only names it in errors and events.
    pub fn read_from(
        &self,
        reader: impl BufRead,
        source: impl Into<PathBuf>,
    ) -> Result<LineSequence, ReadError> {
        let source = source.into();
        let mut lines = LineSequence::new();
        self.load_reader(&source, 0, reader, &mut lines, false)?;
        Ok(lines)
    }

    /// Lenient counterpart of [`LineReader::read_from`], see [`LineReader::read_all_lines`].
    pub fn read_all_from(&self, reader: impl BufRead, source: impl Into<PathBuf>) -> LineSequence {
        let source = source.into();
        let mut lines = LineSequence::new();
        if let Err(e) = self.load_reader(&source, 0, reader, &mut lines, true) {
            eprintln!("{e}");
            debug!("{e:?}");
        }
        lines
    }

    /// Appends the lines of the file to `lines`. On error, `lines` keeps what was read.
    pub fn read_lines_into(&self, path: &Path, lines: &mut LineSequence) -> Result<(), ReadError> {
        self.read_file(path, lines, false)
    }

    fn read_file(
        &self,
        path: &Path,
        lines: &mut LineSequence,
        lenient: bool,
    ) -> Result<(), ReadError> {
        let length_before = lines.len();
        let result = self.load_file(path, lines, lenient);
        match &result {
            Ok(read) => {
                info!(
                    "{read} lines ({}) read from {path:?}",
                    humansize::format_size(lines.len() - length_before, humansize::BINARY)
                );
                self.send(ReadEvent::Finished(path.to_path_buf(), *read));
            }
            Err(_) => self.send(ReadEvent::Failed(path.to_path_buf())),
        }
        result.map(|_| ())
    }

    fn load_file(
        &self,
        path: &Path,
        lines: &mut LineSequence,
        lenient: bool,
    ) -> Result<usize, ReadError> {
        let open_error = |source: std::io::Error| ReadError::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_error)?;
        let file_size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
        let mut buffer_reader = BufReader::new(file);

        if self.decompress && is_gzip(&mut buffer_reader) {
            let file_size = match gzip_uncompressed_size_fast(path) {
                Ok(size) => size as usize,
                Err(_) => file_size,
            };
            debug!("{path:?} is gzip compressed");
            let decoder = BufReader::new(GzDecoder::new(buffer_reader));
            self.load_reader(path, file_size, decoder, lines, lenient)
        } else {
            self.load_reader(path, file_size, buffer_reader, lines, lenient)
        }
    }

    /// Returns the number of lines appended to `lines`.
    fn load_reader(
        &self,
        path: &Path,
        file_size: usize,
        mut buffer_reader: impl BufRead,
        lines: &mut LineSequence,
        lenient: bool,
    ) -> Result<usize, ReadError> {
        self.send(ReadEvent::Started(path.to_path_buf(), file_size));
        let mut start = Instant::now();
        let mut current = 0;
        let mut read_lines = 0;
        let mut replaced = 0;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = match buffer_reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(read) => read,
                Err(source) => {
                    return Err(ReadError::Read {
                        path: path.to_path_buf(),
                        line: read_lines,
                        source,
                    });
                }
            };
            current += read;
            read_lines += 1;
            strip_separator(&mut buf);
            let line = match self.decode(path, read_lines, &buf) {
                Ok(line) => line,
                Err(_) if lenient => {
                    replaced += 1;
                    String::from_utf8_lossy(&buf).into_owned()
                }
                Err(e) => return Err(e),
            };
            lines.push_line(line);

            if self.sender.is_some() && start.elapsed() > PROGRESS_INTERVAL {
                self.send(ReadEvent::Progress(path.to_path_buf(), current, file_size));
                start = Instant::now();
            }
        }
        if replaced > 0 {
            warn!(
                "{replaced} lines of {path:?} are not valid UTF-8, invalid sequences were replaced"
            );
        }
        Ok(read_lines)
    }

    fn decode(&self, path: &Path, line: usize, bytes: &[u8]) -> Result<String, ReadError> {
        match self.encoding {
            Encoding::Utf8 => {
                String::from_utf8(bytes.to_vec()).map_err(|_| ReadError::InvalidEncoding {
                    path: path.to_path_buf(),
                    line,
                })
            }
            Encoding::Utf8Lossy => Ok(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    fn send(&self, event: ReadEvent) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(event);
        }
    }
}
