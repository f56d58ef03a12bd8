use std::ops::Index;

/// The lines of a file, in file order, separators stripped.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LineSequence {
    content: Vec<String>,
    /// sum of the line lengths, plus one separator per line
    length: usize,
}

impl From<&str> for LineSequence {
    fn from(text: &str) -> Self {
        let lines_iterator = text.lines();
        let mut sequence = Self::with_capacity(lines_iterator.size_hint().0);
        lines_iterator.for_each(|line| sequence.push_line(line));
        sequence
    }
}

impl From<Vec<String>> for LineSequence {
    fn from(content: Vec<String>) -> Self {
        let mut sequence = Self { content, length: 0 };
        sequence.compute_length();
        sequence
    }
}

impl LineSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            content: Vec::with_capacity(capacity),
            length: 0,
        }
    }

    pub(crate) fn push_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        debug_assert!(!line.contains('\n'), "line contains a separator");
        self.length += line.len() + 1;
        self.content.push(line);
    }

    pub fn line_text(&self, line: usize) -> &str {
        &self.content[line]
    }

    pub fn get(&self, line: usize) -> Option<&str> {
        self.content.get(line).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Byte length of the text, counting one separator per line.
    pub const fn len(&self) -> usize {
        self.length
    }

    pub fn max_line_length(&self) -> usize {
        self.content
            .iter()
            .map(|line| line.len())
            .max()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.content.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.content
    }

    pub fn into_vec(self) -> Vec<String> {
        self.content
    }

    fn compute_length(&mut self) -> usize {
        self.length = self.content.iter().map(|line| line.len()).sum();
        self.length += self.line_count();
        self.length
    }
}

impl Index<usize> for LineSequence {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        self.line_text(index)
    }
}

impl IntoIterator for LineSequence {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

impl<'a> IntoIterator for &'a LineSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}
