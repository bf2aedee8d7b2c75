use crate::embeddings::Embedder;
use crate::error::Result;
use crate::models::DocumentRecord;
use std::collections::BTreeMap;

/// In-memory vector index for one run: document id to embedding, held in
/// insertion order. Nothing is persisted across runs.
pub struct EmbeddingIndex {
    entries: Vec<(String, Vec<f32>)>,
}

impl EmbeddingIndex {
    /// Embeds every record's normalized text in a single pass, in record
    /// iteration order. Records with empty text are embedded too, so the
    /// index shape always matches the corpus. An embedding failure aborts
    /// the build.
    pub fn build<E: Embedder>(
        records: &BTreeMap<String, DocumentRecord>,
        embedder: &E,
    ) -> Result<Self> {
        let mut entries = Vec::with_capacity(records.len());
        for (document_id, record) in records {
            let vector = embedder.embed(&record.text)?;
            entries.push((document_id.clone(), vector));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.entries
            .iter()
            .map(|(document_id, vector)| (document_id.as_str(), vector.as_slice()))
    }
}
