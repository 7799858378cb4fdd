// Cache store for reading and writing downloaded inputs.
// Writes raw text atomically and reads entries back as lazy line sequences.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Check if a cache entry exists. Existence is the sole cache-hit signal.
pub fn exists(path: &Path) -> bool {
    path.is_file()
}

/// Write raw text to a cache entry, creating parent directories as needed.
///
/// The write goes through a temp file and a rename, so a failure part-way
/// never leaves a truncated entry behind to be mistaken for a cache hit.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Handle to a cached input file.
///
/// Holds only the path. Each [`iter`](InputLines::iter) call opens the file
/// fresh, so the line sequence is restartable, and the file handle is owned
/// by the returned iterator and closed when that iterator is dropped.
#[derive(Debug, Clone)]
pub struct InputLines {
    path: PathBuf,
}

impl InputLines {
    /// Open a handle over an existing cache entry.
    pub(crate) fn open(path: PathBuf) -> Result<Self> {
        if !exists(&path) {
            return Err(Error::MissingCache { path });
        }
        Ok(Self { path })
    }

    /// Path of the underlying cache entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start reading lines from the beginning of the entry.
    pub fn iter(&self) -> Result<Lines> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::MissingCache {
                path: self.path.clone(),
            },
            _ => Error::Io(e),
        })?;

        Ok(Lines {
            reader: BufReader::new(file),
            path: self.path.clone(),
        })
    }
}

/// Lazy iterator over the lines of a cache entry.
///
/// Yields each line with its trailing terminator (`\n` or `\r\n`) stripped,
/// and only the terminator. Non-ASCII content surfaces as
/// [`Error::Encoding`].
pub struct Lines {
    reader: BufReader<File>,
    path: PathBuf,
}

impl Iterator for Lines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if !line.is_ascii() {
                    return Some(Err(Error::Encoding {
                        path: self.path.clone(),
                    }));
                }
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Some(Err(Error::Encoding {
                path: self.path.clone(),
            })),
            Err(e) => Some(Err(e.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry_with(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("2023").join("5.txt");
        write_text(&path, content).unwrap();
        (temp_dir, path)
    }

    fn collect(lines: &InputLines) -> Vec<String> {
        lines.iter().unwrap().map(|l| l.unwrap()).collect()
    }

    #[test]
    fn test_write_text_creates_parent_dirs() {
        let (_temp_dir, path) = entry_with("abc\ndef\n");
        assert!(exists(&path));
        assert_eq!(fs::read_to_string(&path).unwrap(), "abc\ndef\n");
    }

    #[test]
    fn test_write_text_overwrites() {
        let (_temp_dir, path) = entry_with("first\n");
        write_text(&path, "second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_write_text_leaves_no_temp_file() {
        let (_temp_dir, path) = entry_with("abc\n");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_lines_strip_terminator_only() {
        let (_temp_dir, path) = entry_with("1\n2\n3\n");
        let lines = InputLines::open(path).unwrap();
        assert_eq!(collect(&lines), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_lines_preserve_trailing_spaces() {
        let (_temp_dir, path) = entry_with("a \nb\t\n");
        let lines = InputLines::open(path).unwrap();
        assert_eq!(collect(&lines), vec!["a ", "b\t"]);
    }

    #[test]
    fn test_lines_crlf_terminators() {
        let (_temp_dir, path) = entry_with("a\r\nb\r\n");
        let lines = InputLines::open(path).unwrap();
        assert_eq!(collect(&lines), vec!["a", "b"]);
    }

    #[test]
    fn test_lines_missing_final_newline() {
        let (_temp_dir, path) = entry_with("a\nb");
        let lines = InputLines::open(path).unwrap();
        assert_eq!(collect(&lines), vec!["a", "b"]);
    }

    #[test]
    fn test_lines_restartable() {
        let (_temp_dir, path) = entry_with("x\ny\n");
        let lines = InputLines::open(path).unwrap();
        assert_eq!(collect(&lines), vec!["x", "y"]);
        assert_eq!(collect(&lines), vec!["x", "y"]);
    }

    #[test]
    fn test_open_missing_entry_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("2023").join("5.txt");

        let result = InputLines::open(path.clone());
        match result {
            Err(Error::MissingCache { path: p }) => assert_eq!(p, path),
            other => panic!("expected MissingCache, got {other:?}"),
        }
    }

    #[test]
    fn test_non_ascii_line_is_encoding_error() {
        let (_temp_dir, path) = entry_with("ok\nnot ascii: é\n");
        let lines = InputLines::open(path).unwrap();
        let mut iter = lines.iter().unwrap();

        assert_eq!(iter.next().unwrap().unwrap(), "ok");
        match iter.next().unwrap() {
            Err(Error::Encoding { .. }) => {}
            other => panic!("expected Encoding error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_bytes_are_encoding_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("2023").join("5.txt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"ok\n\xff\xfe\n").unwrap();

        let lines = InputLines::open(path).unwrap();
        let mut iter = lines.iter().unwrap();

        assert_eq!(iter.next().unwrap().unwrap(), "ok");
        match iter.next().unwrap() {
            Err(Error::Encoding { .. }) => {}
            other => panic!("expected Encoding error, got {other:?}"),
        }
    }
}
