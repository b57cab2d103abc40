mod documents;
mod score;
mod sentences;

use std::collections::HashSet;

use crate::{idf::IdfTable, query::Query};

pub use documents::{rank_documents, rank_documents as top_files, score_documents};
pub use score::{DocumentScore, ScoredDocument, ScoredSentence, SentenceScore};
pub use sentences::{rank_sentences, rank_sentences as top_sentences, score_sentences};

/// Query terms present in `tokens`, compared case-insensitively.
fn matched_terms<'q>(query: &'q Query, tokens: &[String]) -> impl Iterator<Item = &'q str> {
    let present: HashSet<String> = tokens.iter().map(|token| token.to_lowercase()).collect();

    query.iter().filter(move |term| present.contains(*term))
}

fn idf_sum<'q>(terms: impl Iterator<Item = &'q str>, idf: &IdfTable) -> f64 {
    terms.fold(0.0, |sum, term| sum + idf.weight(term))
}
