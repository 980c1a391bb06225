//! ASCII-art silhouette input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading art input.
#[derive(Error, Debug)]
pub enum ArtError {
    #[error("failed to open art file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read art input: {0}")]
    Read(#[from] io::Error),
}

/// An ASCII-art silhouette.
///
/// Each line is one grid row; any non-space character denotes an
/// occupied cell. Blank lines (or entirely blank input) are legal and
/// simply contribute no cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Art {
    lines: Vec<String>,
}

impl Art {
    /// Build art directly from in-memory lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Read art line-by-line from any buffered reader.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, ArtError> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }
        Ok(Self { lines })
    }

    /// Open and read an art file.
    pub fn load(path: &Path) -> Result<Self, ArtError> {
        let file = File::open(path).map_err(|source| ArtError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read(BufReader::new(file))
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.lines.len()
    }

    /// The raw grid rows, top first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_keeps_rows_in_order() {
        let art = Art::read(Cursor::new(" 1\n1 \n")).unwrap();
        assert_eq!(art.rows(), 2);
        assert_eq!(art.lines(), &[" 1".to_string(), "1 ".to_string()]);
    }

    #[test]
    fn read_accepts_missing_trailing_newline() {
        let art = Art::read(Cursor::new("11")).unwrap();
        assert_eq!(art.lines(), &["11".to_string()]);
    }

    #[test]
    fn empty_input_is_legal() {
        let art = Art::read(Cursor::new("")).unwrap();
        assert_eq!(art.rows(), 0);
    }

    #[test]
    fn load_reports_the_missing_path() {
        let err = Art::load(Path::new("/definitely/not/here/ART")).unwrap_err();
        match err {
            ArtError::Open { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/ART"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
