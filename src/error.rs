use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Cannot compute IDF over an empty collection")]
    EmptyCollection,

    #[error("No documents found in corpus directory {}", .0.display())]
    EmptyCorpus(PathBuf),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
