pub mod sentences;

use std::{collections::BTreeMap, fs, path::Path};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

/// Document id (file name) to raw document text.
pub type Corpus = BTreeMap<String, String>;

/// Loads every regular file directly inside `dir`, keyed by file name.
///
/// Subdirectories and hidden files are ignored.
pub fn load_corpus(dir: &Path) -> Result<Corpus> {
    let mut corpus = Corpus::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let id = entry.file_name().to_string_lossy().into_owned();
        let text = fs::read_to_string(entry.path())?;
        debug!(document = %id, bytes = text.len(), "Loaded document");

        corpus.insert(id, text);
    }

    if corpus.is_empty() {
        return Err(Error::EmptyCorpus(dir.to_path_buf()));
    }

    Ok(corpus)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
