use ordered_float::OrderedFloat;
use serde::Serialize;

/// Relevance of a whole document: the IDF sum of the query terms it contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DocumentScore {
    pub idf_sum: OrderedFloat<f64>,
}

impl DocumentScore {
    pub const fn new(idf_sum: f64) -> Self {
        Self {
            idf_sum: OrderedFloat(idf_sum),
        }
    }
}

/// Relevance of a sentence. Compared on `idf_sum` first, then on `density`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SentenceScore {
    pub idf_sum: OrderedFloat<f64>,
    /// Distinct query terms matched per sentence token.
    pub density: OrderedFloat<f64>,
}

impl SentenceScore {
    pub const fn new(idf_sum: f64, density: f64) -> Self {
        Self {
            idf_sum: OrderedFloat(idf_sum),
            density: OrderedFloat(density),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredDocument {
    pub id: String,
    pub score: DocumentScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    pub score: SentenceScore,
}
