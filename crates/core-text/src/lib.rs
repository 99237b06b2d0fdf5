//! Immutable line document.
//!
//! A `Document` is loaded once at startup and never mutated afterwards. Lines
//! are stored without their terminators; a trailing `\r` is dropped so CRLF
//! files read the same as LF files. No other normalization is applied (tabs,
//! long lines and control bytes pass through untouched).

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to produce a `Document` from its source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("cannot read line {line}: {source}")]
    Read { line: usize, source: io::Error },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Open `path` and read every line eagerly.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            target: "io",
            file = %path.display(),
            line_count = doc.line_count(),
            "document_loaded"
        );
        Ok(doc)
    }

    /// Read all lines from an already opened source, preserving order.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut lines = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Read {
                line: idx + 1,
                source,
            })?;
            lines.push(line);
        }
        Ok(Self { lines })
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line `idx` without its terminator.
    ///
    /// Panics when `idx >= line_count()`; the viewport never asks for rows
    /// past the end of the document.
    pub fn line_at(&self, idx: usize) -> &str {
        &self.lines[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_in_order() {
        let doc = Document::from_reader(Cursor::new("alpha\nbeta\ngamma\n")).unwrap();
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_at(0), "alpha");
        assert_eq!(doc.line_at(2), "gamma");
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let doc = Document::from_reader(Cursor::new("a\nb")).unwrap();
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line_at(1), "b");
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let doc = Document::from_reader(Cursor::new("one\r\ntwo\r\n")).unwrap();
        assert_eq!(doc.line_at(0), "one");
        assert_eq!(doc.line_at(1), "two");
    }

    #[test]
    fn empty_source_yields_empty_document() {
        let doc = Document::from_reader(Cursor::new("")).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.line_count(), 0);
    }

    #[test]
    fn blank_lines_and_long_lines_are_not_normalized() {
        let long = "x".repeat(500);
        let src = format!("\n\t tab\n{long}\n");
        let doc = Document::from_reader(Cursor::new(src)).unwrap();
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_at(0), "");
        assert_eq!(doc.line_at(1), "\t tab");
        assert_eq!(doc.line_at(2).len(), 500);
    }

    #[test]
    fn invalid_utf8_reports_line_number() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n";
        let err = Document::from_reader(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, LoadError::Read { line: 2, .. }), "{err:?}");
    }
}
