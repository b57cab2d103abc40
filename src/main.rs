use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use passage_search::{
    constants::{FILE_MATCHES, QUERY_PROMPT, SENTENCE_MATCHES},
    corpus::load_corpus,
    error::Result,
    search::{SearchConfig, SearchEngine},
    stop_words::StopWords,
    tokenizer::{Tokenizer, TokenizerConfig},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Find the corpus sentences that best answer a query", long_about = None)]
struct Args {
    /// Directory holding the corpus documents
    corpus: PathBuf,

    /// Query to answer; prompted for on stdin when omitted
    #[arg(short, long)]
    query: Option<String>,

    /// Number of top documents to draw sentences from
    #[arg(long, default_value_t = FILE_MATCHES)]
    file_matches: usize,

    /// Number of sentences to print
    #[arg(long, default_value_t = SENTENCE_MATCHES)]
    sentence_matches: usize,

    /// File with one stop word per line, replacing the English list
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// Stem terms before matching
    #[arg(long, default_value = "false")]
    stem: bool,

    /// Print the full result, with scores, as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let stop_words = match &args.stop_words {
        Some(path) => StopWords::from_path(path)?,
        None => StopWords::english(),
    };
    let tokenizer = Tokenizer::new(stop_words, TokenizerConfig { stem: args.stem })?;

    let corpus = load_corpus(&args.corpus)?;
    tracing::info!("Loaded {} documents from {}", corpus.len(), args.corpus.display());

    let engine = SearchEngine::new(
        corpus,
        tokenizer,
        SearchConfig {
            file_matches: args.file_matches,
            sentence_matches: args.sentence_matches,
        },
    )?;
    tracing::debug!("Indexed {} distinct terms", engine.document_idf().len());

    let query = match args.query {
        Some(query) => query,
        None => prompt_query()?,
    };

    let start = std::time::Instant::now();
    let result = engine.search(&query)?;
    tracing::info!("Search took {:?}", start.elapsed());

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &result)?;
        writeln!(stdout)?;
    } else {
        for sentence in result.sentence_texts() {
            writeln!(stdout, "{sentence}")?;
        }
    }

    Ok(())
}

fn prompt_query() -> Result<String> {
    print!("{QUERY_PROMPT}");
    io::stdout().flush()?;

    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;

    Ok(buffer.trim().to_string())
}
