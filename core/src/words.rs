//! Word ingestion: one word per line, trimmed and uppercased, blanks dropped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LadderError, Result};

/// Trim and uppercase a raw line. None for blank lines.
pub fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_uppercase())
    }
}

/// Lazily read normalized words from `reader`, skipping blank lines.
pub fn read_words<R: BufRead>(reader: R) -> impl Iterator<Item = std::io::Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(l) => normalize(&l).map(Ok),
        Err(e) => Some(Err(e)),
    })
}

/// Read every normalized word from the file at `path`.
///
/// Duplicates are kept; the graph rejects repeats on insertion.
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let io_err = |source| LadderError::Io {
        source,
        path: path.to_path_buf(),
    };

    let file = File::open(path).map_err(io_err)?;
    read_words(BufReader::new(file))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(io_err)
}
