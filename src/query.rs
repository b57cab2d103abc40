use std::collections::BTreeSet;

use crate::tokenizer::Tokenizer;

/// Distinct, lower-cased terms of a user query.
///
/// Terms are kept ordered so that score sums are accumulated in the same order on
/// every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: BTreeSet<String>,
}

impl Query {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|term| term.as_ref().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect(),
        }
    }

    /// Tokenizes free text into a query.
    pub fn parse(text: &str, tokenizer: &Tokenizer) -> Self {
        Self::new(tokenizer.tokenize(text))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Query {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let query: Query = ["Cat", "cat", "mat"].into_iter().collect();

        assert_eq!(query.len(), 2);
        assert!(query.contains("cat"));
        assert_eq!(query.iter().collect::<Vec<_>>(), vec!["cat", "mat"]);
    }

    #[test]
    fn parse_uses_tokenizer() {
        let tokenizer = Tokenizer::english().expect("Failed to create tokenizer");
        let query = Query::parse("Where is the cat and the cat's mat?", &tokenizer);

        assert_eq!(query.iter().collect::<Vec<_>>(), vec!["cat", "mat"]);
    }

    #[test]
    fn stop_word_only_query_is_empty() {
        let tokenizer = Tokenizer::english().expect("Failed to create tokenizer");

        assert!(Query::parse("what is the", &tokenizer).is_empty());
    }
}
