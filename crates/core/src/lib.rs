pub mod classify;
pub mod embeddings;
pub mod error;
pub mod extractor;
pub mod fields;
pub mod index;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod search;

pub use classify::classify_document;
pub use embeddings::{Embedder, HashedNgramEmbedder, DEFAULT_EMBEDDING_DIMENSIONS};
pub use error::{ExtractError, PipelineError};
pub use extractor::{FileTextExtractor, TextExtractor};
pub use fields::FieldExtractor;
pub use index::EmbeddingIndex;
pub use models::{DocumentRecord, DocumentType, FieldMap, MatchRecord, SearchHit};
pub use normalize::normalize_whitespace;
pub use pipeline::{
    discover_documents, match_report, CorpusProcessor, CorpusReport, UnreadableDocument,
};
pub use search::{cosine_similarity, semantic_search, DEFAULT_TOP_K};
