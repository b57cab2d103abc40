use std::{collections::HashSet, fs, path::Path};

use crate::error::Result;

const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Immutable set of words the tokenizer discards.
///
/// Entries are stored lower-cased; lookups expect an already lower-cased word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The standard English stop-word list.
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// A set that filters nothing.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Reads one stop word per line. Blank lines and lines starting with `#` are skipped.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        Ok(Self::from_words(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        ))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn english_contains_common_words() {
        let stop_words = StopWords::english();

        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("on"));
        assert!(!stop_words.contains("cat"));
        assert_eq!(stop_words.len(), ENGLISH.len());
    }

    #[test]
    fn from_words_normalizes_case() {
        let stop_words = StopWords::from_words(["Cat", "  DOG ", ""]);

        assert!(stop_words.contains("cat"));
        assert!(stop_words.contains("dog"));
        assert_eq!(stop_words.len(), 2);
    }

    #[test]
    fn from_path_skips_comments() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "# custom list\nfoo\n\nBar").expect("Failed to write stop words");

        let stop_words = StopWords::from_path(file.path()).expect("Failed to load stop words");

        assert!(stop_words.contains("foo"));
        assert!(stop_words.contains("bar"));
        assert!(!stop_words.contains("# custom list"));
        assert_eq!(stop_words.len(), 2);
    }
}
