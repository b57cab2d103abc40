use crate::{
    error::{Error, Result},
    stop_words::StopWords,
};
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

/// Ordered terms of one document or sentence.
pub type TokenSequence = Vec<String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Reduce every kept term to its English stem.
    pub stem: bool,
}

pub struct Tokenizer {
    stop_words: StopWords,
    stemmer: Option<Stemmer>,
    regex: Regex,
}

impl Tokenizer {
    pub fn new(stop_words: StopWords, config: TokenizerConfig) -> Result<Self> {
        Ok(Self {
            stop_words,
            stemmer: config
                .stem
                .then(|| Stemmer::create(Algorithm::English)),
            regex: Regex::new(r"\b\w+\b")
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Tokenizer with the English stop-word list and no stemming.
    pub fn english() -> Result<Self> {
        Self::new(StopWords::english(), TokenizerConfig::default())
    }

    /// Splits `text` into lower-cased alphabetic terms, dropping stop words.
    ///
    /// A word unit holding anything but letters (digits, underscores) is discarded
    /// whole rather than trimmed.
    pub fn tokenize(&self, text: &str) -> TokenSequence {
        self.regex
            .find_iter(text)
            .map(|unit| unit.as_str())
            .filter(|unit| unit.chars().all(char::is_alphabetic))
            .map(str::to_lowercase)
            .filter(|word| !self.stop_words.contains(word))
            .map(|word| match &self.stemmer {
                Some(stemmer) => stemmer.stem(&word).into_owned(),
                None => word,
            })
            .collect()
    }

    pub const fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}
