use std::fs;
use std::io::Read;
use std::path::PathBuf;

use glob::glob;

use crate::{debug, error::*};

/// A raw text read from some source, waiting to be cleaned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub source: String,
    pub text: String,
}

impl Input {
    pub fn new(source: &str, text: &str) -> Self {
        Self {
            source: source.to_string(),
            text: text.to_string(),
        }
    }

    /// Splits the input into records, one per line when `by_line` is set.
    /// Blank lines are not records.
    ///
    /// # Examples
    /// ```
    /// use abstrak::reader::Input;
    ///
    /// let input = Input::new("stdin", "first\n\nsecond\n");
    /// assert_eq!(input.records(true), vec!["first", "second"]);
    /// assert_eq!(input.records(false), vec!["first\n\nsecond\n"]);
    /// ```
    pub fn records(&self, by_line: bool) -> Vec<&str> {
        if by_line {
            self.text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .collect()
        } else {
            vec![self.text.as_str()]
        }
    }
}

pub struct InputReader {}

impl InputReader {
    /// Reads every file matching the given glob patterns, in pattern order.
    ///
    /// # Arguments
    /// * `patterns` - Glob patterns or plain file paths
    ///
    /// # Returns
    /// The inputs read, one per matched file.
    ///
    /// # Errors
    /// * `InputReadError` - If a pattern is invalid, matches nothing, or a file cannot be read
    ///
    /// # Examples
    /// ```
    /// use std::fs;
    /// use abstrak::reader::InputReader;
    ///
    /// let temp_dir = tempfile::tempdir().unwrap();
    /// fs::write(temp_dir.path().join("a.txt"), "Abstrak satu").unwrap();
    /// fs::write(temp_dir.path().join("b.txt"), "Abstrak dua").unwrap();
    ///
    /// let pattern = temp_dir.path().join("*.txt").to_string_lossy().to_string();
    /// let inputs = InputReader::read_patterns(&[pattern]).unwrap();
    /// assert_eq!(inputs.len(), 2);
    /// assert_eq!(inputs[0].text, "Abstrak satu");
    /// ```
    pub fn read_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Input>> {
        let mut inputs = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let paths = InputReader::expand(pattern)?;
            if paths.is_empty() {
                return Err(Error::InputReadError {
                    file: pattern.to_string(),
                    cause: "no file matches the pattern".to_string(),
                });
            }
            for path in paths {
                inputs.push(InputReader::read_file(&path)?);
            }
        }
        Ok(inputs)
    }

    /// Reads a single file, replacing invalid UTF-8 sequences
    pub fn read_file(path: &PathBuf) -> Result<Input> {
        let bytes = fs::read(path).map_err(|e| Error::InputReadError {
            file: path.to_string_lossy().to_string(),
            cause: e.to_string(),
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(Input {
            source: path.to_string_lossy().to_string(),
            text: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// Reads the whole content of a reader (usually stdin)
    pub fn read_stream<R: Read>(source: &str, mut reader: R) -> Result<Input> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Input {
            source: source.to_string(),
            text,
        })
    }

    fn expand(pattern: &str) -> Result<Vec<PathBuf>> {
        let entries = glob(pattern).map_err(|e| Error::InputReadError {
            file: pattern.to_string(),
            cause: e.to_string(),
        })?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        Ok(paths)
    }
}
