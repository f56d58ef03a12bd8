use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    /// Started(path, size)
    Started(PathBuf, usize),
    /// Progress(path, current, size)
    Progress(PathBuf, usize, usize),
    /// Finished(path, line count)
    Finished(PathBuf, usize),
    Failed(PathBuf),
}

impl ReadEvent {
    pub fn path(&self) -> &PathBuf {
        match self {
            ReadEvent::Started(path, _)
            | ReadEvent::Progress(path, _, _)
            | ReadEvent::Finished(path, _)
            | ReadEvent::Failed(path) => path,
        }
    }

    /// Fraction of the file consumed, between 0.0 and 1.0, for progress events.
    ///
    /// The size of a gzip file comes from its trailer, which wraps above 4GiB.
    pub fn percent(&self) -> Option<f32> {
        match self {
            ReadEvent::Progress(_, _, 0) => None,
            ReadEvent::Progress(_, current, size) => {
                Some((*current as f32 / *size as f32).min(1.0))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_progress() {
        let event = ReadEvent::Progress(PathBuf::from("a"), 25, 100);
        assert_eq!(event.percent(), Some(0.25));
        assert_eq!(ReadEvent::Progress(PathBuf::from("a"), 1, 0).percent(), None);
        assert_eq!(ReadEvent::Started(PathBuf::from("a"), 100).percent(), None);
    }

    #[test]
    fn percent_is_capped_when_size_is_underestimated() {
        let event = ReadEvent::Progress(PathBuf::from("big.csv.gz"), 300, 100);
        assert_eq!(event.percent(), Some(1.0));
    }
}
