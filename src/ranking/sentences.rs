use tracing::debug;

use super::{idf_sum, matched_terms, ScoredSentence, SentenceScore};
use crate::{idf::IdfTable, query::Query};

/// Scores sentences by matched query-term IDF, breaking ties on query term density.
///
/// Sentences without tokens have no density and are left out. Results are ordered best
/// first; sentences equal on both keys are ordered by text.
pub fn score_sentences<'a, I, K, S>(
    query: &Query,
    sentences: I,
    idf: &IdfTable,
) -> Vec<ScoredSentence>
where
    I: IntoIterator<Item = (&'a K, &'a S)>,
    K: AsRef<str> + ?Sized + 'a,
    S: AsRef<[String]> + ?Sized + 'a,
{
    let mut skipped = 0usize;
    let mut scored = Vec::new();

    for (text, tokens) in sentences {
        let tokens = tokens.as_ref();
        if tokens.is_empty() {
            skipped += 1;
            continue;
        }

        let matched: Vec<&str> = matched_terms(query, tokens).collect();
        let density = matched.len() as f64 / tokens.len() as f64;

        scored.push(ScoredSentence {
            text: text.as_ref().to_string(),
            score: SentenceScore::new(idf_sum(matched.into_iter(), idf), density),
        });
    }

    if skipped > 0 {
        debug!(skipped, "Skipped sentences without terms");
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.text.cmp(&b.text)));
    scored
}

/// The `n` sentences most relevant to `query`, best first.
///
/// Returns every scorable sentence when there are fewer than `n`.
pub fn rank_sentences<'a, I, K, S>(
    query: &Query,
    sentences: I,
    idf: &IdfTable,
    n: usize,
) -> Vec<String>
where
    I: IntoIterator<Item = (&'a K, &'a S)>,
    K: AsRef<str> + ?Sized + 'a,
    S: AsRef<[String]> + ?Sized + 'a,
{
    let mut scored = score_sentences(query, sentences, idf);
    debug!(sentences = scored.len(), n, "Ranked sentences");

    scored.truncate(n);
    scored.into_iter().map(|sentence| sentence.text).collect()
}
