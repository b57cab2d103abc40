pub mod constants;
pub mod corpus;
pub mod error;
pub mod idf;
pub mod query;
pub mod ranking;
pub mod search;
pub mod stop_words;
pub mod tokenizer;
