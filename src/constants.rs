/// Number of documents whose sentences are considered for the answer.
pub const FILE_MATCHES: usize = 2;

/// Number of sentences returned for a query.
pub const SENTENCE_MATCHES: usize = 20;

pub const QUERY_PROMPT: &str = "Query: ";
