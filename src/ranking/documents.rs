use tracing::debug;

use super::{idf_sum, matched_terms, DocumentScore, ScoredDocument};
use crate::{idf::IdfTable, query::Query};

/// Scores every document by the IDF sum of the query terms it contains.
///
/// A term counts once per document however often it repeats. Results are ordered by
/// descending score, equal scores by ascending document id.
pub fn score_documents<'a, I, K, S>(
    query: &Query,
    documents: I,
    idf: &IdfTable,
) -> Vec<ScoredDocument>
where
    I: IntoIterator<Item = (&'a K, &'a S)>,
    K: AsRef<str> + ?Sized + 'a,
    S: AsRef<[String]> + ?Sized + 'a,
{
    let mut scored: Vec<ScoredDocument> = documents
        .into_iter()
        .map(|(id, tokens)| ScoredDocument {
            id: id.as_ref().to_string(),
            score: DocumentScore::new(idf_sum(matched_terms(query, tokens.as_ref()), idf)),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
    scored
}

/// Ids of the `n` documents most relevant to `query`, best first.
///
/// Returns every document when there are fewer than `n`.
pub fn rank_documents<'a, I, K, S>(
    query: &Query,
    documents: I,
    idf: &IdfTable,
    n: usize,
) -> Vec<String>
where
    I: IntoIterator<Item = (&'a K, &'a S)>,
    K: AsRef<str> + ?Sized + 'a,
    S: AsRef<[String]> + ?Sized + 'a,
{
    let mut scored = score_documents(query, documents, idf);
    debug!(documents = scored.len(), n, "Ranked documents");

    scored.truncate(n);
    scored.into_iter().map(|document| document.id).collect()
}
