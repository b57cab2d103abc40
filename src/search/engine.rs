use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::search_result::SearchResult;
use crate::{
    constants::{FILE_MATCHES, SENTENCE_MATCHES},
    corpus::{sentences::SentenceSplitter, Corpus},
    error::Result,
    idf::{compute_idf, IdfTable},
    query::Query,
    ranking::{score_documents, score_sentences, ScoredDocument},
    tokenizer::{TokenSequence, Tokenizer},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Documents whose sentences are ranked.
    pub file_matches: usize,
    /// Sentences returned.
    pub sentence_matches: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            file_matches: FILE_MATCHES,
            sentence_matches: SENTENCE_MATCHES,
        }
    }
}

/// Answers queries against a fixed corpus.
///
/// Document terms and document IDF are computed once up front. Each search ranks
/// documents, then builds a fresh sentence-level IDF table from the sentences of the
/// top documents only.
pub struct SearchEngine {
    corpus: Corpus,
    tokenizer: Tokenizer,
    splitter: SentenceSplitter,
    document_tokens: BTreeMap<String, TokenSequence>,
    document_idf: IdfTable,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(corpus: Corpus, tokenizer: Tokenizer, config: SearchConfig) -> Result<Self> {
        let document_tokens: BTreeMap<String, TokenSequence> = corpus
            .iter()
            .map(|(id, text)| (id.clone(), tokenizer.tokenize(text)))
            .collect();

        let document_idf = compute_idf(document_tokens.values())?;
        debug!(
            documents = document_idf.unit_count(),
            terms = document_idf.len(),
            "Computed document IDF"
        );

        Ok(Self {
            corpus,
            tokenizer,
            splitter: SentenceSplitter::new()?,
            document_tokens,
            document_idf,
            config,
        })
    }

    pub fn search(&self, query: &str) -> Result<SearchResult> {
        self.search_query(&Query::parse(query, &self.tokenizer))
    }

    pub fn search_query(&self, query: &Query) -> Result<SearchResult> {
        if query.is_empty() {
            warn!("Query has no searchable terms");
        }

        let mut documents = score_documents(query, &self.document_tokens, &self.document_idf);
        documents.truncate(self.config.file_matches);

        let query_terms = query.iter().map(String::from).collect();

        let sentence_tokens = self.sentence_tokens(&documents);
        if sentence_tokens.is_empty() {
            warn!("Top documents contain no sentences with searchable terms");
            return Ok(SearchResult::new(query_terms, documents, Vec::new()));
        }

        let sentence_idf = compute_idf(sentence_tokens.values())?;
        debug!(
            sentences = sentence_idf.unit_count(),
            terms = sentence_idf.len(),
            "Computed sentence IDF"
        );

        let mut sentences = score_sentences(query, &sentence_tokens, &sentence_idf);
        sentences.truncate(self.config.sentence_matches);

        Ok(SearchResult::new(query_terms, documents, sentences))
    }

    /// Sentences of `documents` that keep at least one term, keyed by their text.
    fn sentence_tokens(&self, documents: &[ScoredDocument]) -> BTreeMap<String, TokenSequence> {
        let mut sentence_tokens = BTreeMap::new();

        for document in documents {
            let Some(text) = self.corpus.get(&document.id) else {
                continue;
            };

            for sentence in self.splitter.split(text) {
                let tokens = self.tokenizer.tokenize(sentence);
                if !tokens.is_empty() {
                    sentence_tokens.insert(sentence.to_string(), tokens);
                }
            }
        }

        sentence_tokens
    }

    pub const fn document_idf(&self) -> &IdfTable {
        &self.document_idf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn corpus(documents: &[(&str, &str)]) -> Corpus {
        documents
            .iter()
            .map(|(id, text)| ((*id).to_string(), (*text).to_string()))
            .collect()
    }

    fn engine(documents: &[(&str, &str)], config: SearchConfig) -> SearchEngine {
        SearchEngine::new(
            corpus(documents),
            Tokenizer::english().expect("Failed to create tokenizer"),
            config,
        )
        .expect("Failed to create search engine")
    }

    fn animals() -> SearchEngine {
        engine(
            &[
                (
                    "cats.txt",
                    "Cats are small carnivorous mammals. A cat sat on the mat.\n\
                     The domestic cat purrs when content.",
                ),
                (
                    "dogs.txt",
                    "Dogs are loyal companions. A dog barked at the mailman.",
                ),
                (
                    "birds.txt",
                    "Birds have feathers. Some birds migrate south in winter.",
                ),
            ],
            SearchConfig {
                file_matches: 1,
                sentence_matches: 2,
            },
        )
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let result = SearchEngine::new(
            Corpus::new(),
            Tokenizer::english().expect("Failed to create tokenizer"),
            SearchConfig::default(),
        );

        assert!(matches!(result, Err(Error::EmptyCollection)));
    }

    #[test]
    fn sentences_come_from_top_documents() {
        let result = animals().search("Where did the cat sit on a mat?").expect("Search failed");

        assert_eq!(result.query, vec!["cat", "mat", "sit"]);
        assert_eq!(result.documents.len(), 1);
        assert_eq!(result.documents[0].id, "cats.txt");
        assert_eq!(
            result.sentence_texts().collect::<Vec<_>>(),
            vec!["A cat sat on the mat.", "The domestic cat purrs when content."]
        );
    }

    #[test]
    fn sentence_matches_are_clamped() {
        let engine = engine(
            &[("only.txt", "Owls hunt at night.")],
            SearchConfig {
                file_matches: 5,
                sentence_matches: 50,
            },
        );
        let result = engine.search("owls").expect("Search failed");

        assert_eq!(result.documents.len(), 1);
        assert_eq!(result.sentence_texts().collect::<Vec<_>>(), vec!["Owls hunt at night."]);
    }

    #[test]
    fn document_without_terms_yields_no_sentences() {
        let engine = engine(
            &[("empty.txt", "The and of 1234."), ("owls.txt", "Owls hunt.")],
            SearchConfig {
                file_matches: 1,
                sentence_matches: 5,
            },
        );
        let result = engine.search("badgers").expect("Search failed");

        assert_eq!(result.documents[0].id, "empty.txt");
        assert!(result.sentences.is_empty());
    }

    #[test]
    fn empty_query_still_returns_ranked_output() {
        let result = animals().search("the of and").expect("Search failed");

        assert!(result.query.is_empty());
        assert_eq!(result.documents.len(), 1);
        assert_eq!(result.sentences.len(), 2);
    }

    #[test]
    fn result_serializes_scores() {
        let result = animals().search("dog").expect("Search failed");
        let json = serde_json::to_value(&result).expect("Failed to serialize result");

        assert_eq!(json["documents"][0]["id"], "dogs.txt");
        assert!(json["documents"][0]["score"]["idf_sum"].as_f64().is_some());
        assert!(json["sentences"][0]["score"]["density"].as_f64().is_some());
    }
}
