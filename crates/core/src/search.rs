use crate::embeddings::Embedder;
use crate::error::Result;
use crate::index::EmbeddingIndex;
use crate::models::SearchHit;

pub const DEFAULT_TOP_K: usize = 5;

/// Ranks every indexed document against a free-text query and returns the
/// top `top_k` hits, highest cosine score first. Ties break lexicographically
/// by document id so results are reproducible. An empty index yields an
/// empty result set.
pub fn semantic_search<E: Embedder>(
    query: &str,
    index: &EmbeddingIndex,
    embedder: &E,
    top_k: usize,
) -> Result<Vec<SearchHit>> {
    let query_vector = embedder.embed(query)?;

    let mut hits: Vec<SearchHit> = index
        .iter()
        .map(|(document_id, vector)| SearchHit {
            document_id: document_id.to_string(),
            score: cosine_similarity(&query_vector, vector),
        })
        .collect();

    hits.sort_by(|left, right| {
        right
            .score
            .total_cmp(&left.score)
            .then_with(|| left.document_id.cmp(&right.document_id))
    });
    hits.truncate(top_k);

    Ok(hits)
}

/// Cosine similarity in [-1, 1]. A zero vector on either side scores 0.0,
/// so documents with empty text rank below any real match.
pub fn cosine_similarity(left: &[f32], right: &[f32]) -> f64 {
    let dot = left
        .iter()
        .zip(right)
        .map(|(a, b)| f64::from(*a) * f64::from(*b))
        .sum::<f64>();
    let left_norm = left.iter().map(|v| f64::from(*v).powi(2)).sum::<f64>().sqrt();
    let right_norm = right.iter().map(|v| f64::from(*v).powi(2)).sum::<f64>().sqrt();

    if left_norm == 0.0 || right_norm == 0.0 {
        return 0.0;
    }

    dot / (left_norm * right_norm)
}
