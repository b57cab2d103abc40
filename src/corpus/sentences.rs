use regex::Regex;

use crate::error::{Error, Result};

/// Splits document text into candidate sentences.
///
/// Text is first cut into passages at line breaks. Within a passage a sentence ends at
/// `.`, `!` or `?` (with any closing quotes or brackets) followed by whitespace.
pub struct SentenceSplitter {
    boundary: Regex,
}

impl SentenceSplitter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            boundary: Regex::new(r#"([.!?]+["'\x{201D}\x{2019})\]]*)\s+"#)
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split('\n')
            .flat_map(|passage| self.split_passage(passage))
            .collect()
    }

    fn split_passage<'t>(&self, passage: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for captures in self.boundary.captures_iter(passage) {
            if let (Some(whole), Some(terminator)) = (captures.get(0), captures.get(1)) {
                sentences.push(&passage[start..terminator.end()]);
                start = whole.end();
            }
        }
        sentences.push(&passage[start..]);

        sentences
            .into_iter()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        SentenceSplitter::new()
            .expect("Failed to create splitter")
            .split(text)
    }

    #[test]
    fn splits_on_terminators() {
        assert_eq!(
            split("The cat sat. Did it? Yes! It did"),
            vec!["The cat sat.", "Did it?", "Yes!", "It did"]
        );
    }

    #[test]
    fn splits_on_line_breaks() {
        assert_eq!(
            split("Heading\n\nFirst line. Second line.\r\n  Indented"),
            vec!["Heading", "First line.", "Second line.", "Indented"]
        );
    }

    #[test]
    fn keeps_closing_quotes() {
        assert_eq!(
            split(r#"He said "stop." Then left..."#),
            vec![r#"He said "stop.""#, "Then left..."]
        );
    }

    #[test]
    fn no_split_inside_numbers() {
        assert_eq!(split("Pi is 3.14 roughly."), vec!["Pi is 3.14 roughly."]);
    }

    #[test]
    fn empty_text() {
        assert!(split("").is_empty());
        assert!(split(" \n \n").is_empty());
    }
}
