use thiserror::Error;

/// Per-document failure to obtain raw text. Absorbed by the corpus
/// processor into an Unclassifiable record; never fatal to the run.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pdf parse error: {0}")]
    PdfParse(String),
}

/// Run-level failure. Anything here aborts the batch.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("embedding failed: {0}")]
    Embedding(String),
}

pub type Result<T, E = PipelineError> = std::result::Result<T, E>;
