use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Checks for the gzip magic bytes, then rewinds the reader to where it was.
pub(crate) fn is_gzip<R>(reader: &mut R) -> bool
where
    R: Read + Seek,
{
    let mut magic = [0; GZIP_MAGIC.len()];
    let start_pos = reader.stream_position().unwrap_or(0);
    let is_gzip = if reader.read_exact(&mut magic).is_ok() {
        magic == GZIP_MAGIC
    } else {
        false
    };
    let _ = reader.seek(SeekFrom::Start(start_pos));
    is_gzip
}

/// Reads the ISIZE trailer of a gzip file. Only exact for single member files under 4GiB.
pub(crate) fn gzip_uncompressed_size_fast(path: &Path) -> std::io::Result<u32> {
    let mut f = File::open(path)?;
    f.seek(SeekFrom::End(-4))?;
    let mut buf = [0u8; 4];
    f.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Removes a trailing `\n`, and the `\r` before it if any.
pub(crate) fn strip_separator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use rstest::rstest;
    use std::io::{Cursor, Write};

    #[test]
    fn detects_gzip_and_rewinds() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"hello\n").unwrap();
        let mut cursor = Cursor::new(encoder.finish().unwrap());
        assert!(is_gzip(&mut cursor));
        assert_eq!(cursor.position(), 0);
    }

    #[rstest]
    #[case(b"plain text".as_slice())]
    #[case(b"\x1F".as_slice())]
    #[case(b"".as_slice())]
    fn plain_content_is_not_gzip(#[case] content: &[u8]) {
        let mut cursor = Cursor::new(content);
        assert!(!is_gzip(&mut cursor));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn uncompressed_size_from_trailer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"a\nb\nc\n").unwrap();
        file.write_all(&encoder.finish().unwrap()).unwrap();
        file.flush().unwrap();
        assert_eq!(gzip_uncompressed_size_fast(file.path()).unwrap(), 6);
    }

    #[rstest]
    #[case("abc\n", "abc")]
    #[case("abc\r\n", "abc")]
    #[case("abc", "abc")]
    #[case("abc\r", "abc\r")]
    #[case("\n", "")]
    #[case("", "")]
    fn strips_line_separator(#[case] input: &str, #[case] expected: &str) {
        let mut line = input.as_bytes().to_vec();
        strip_separator(&mut line);
        assert_eq!(line, expected.as_bytes());
    }
}
