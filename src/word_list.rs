use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{DoubletError, Result};

/// Which words from a list make it into the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFilter {
    pub length: usize, // letters per word; others are skipped
}

impl Default for WordFilter {
    fn default() -> Self {
        Self { length: 5 }
    }
}

/// Reads a word list file: words separated by spaces and/or newlines.
pub fn load_words(path: impl AsRef<Path>, filter: WordFilter) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DoubletError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_words(file, filter)?;
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

pub fn parse_words<R: Read>(reader: R, filter: WordFilter) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false) // a word list has no column titles
        .delimiter(b' ')
        .flexible(true)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for record in reader.records() {
        let record = record?;
        for word in record.iter().flat_map(str::split_whitespace) {
            let word = word.to_lowercase(); // repeated spaces give empty fields, dropped here
            if word.chars().count() != filter.length {
                debug!(%word, expected = filter.length, "skipping word of wrong length");
                continue;
            }
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
    }
    Ok(words)
}
