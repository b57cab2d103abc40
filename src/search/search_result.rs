use serde::Serialize;

use crate::ranking::{ScoredDocument, ScoredSentence};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub query: Vec<String>,
    pub documents: Vec<ScoredDocument>,
    pub sentences: Vec<ScoredSentence>,
}

impl SearchResult {
    pub const fn new(
        query: Vec<String>,
        documents: Vec<ScoredDocument>,
        sentences: Vec<ScoredSentence>,
    ) -> Self {
        Self {
            query,
            documents,
            sentences,
        }
    }

    /// Sentence texts, best match first.
    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|sentence| sentence.text.as_str())
    }
}
