use crate::error::PipelineError;

/// Matches the vector width of the sentence-transformer models this stands
/// in for.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

/// Black-box embedding capability. Constructed once per run and passed
/// explicitly to the index and the search engine. Deterministic for the
/// same input and implementation.
pub trait Embedder {
    fn dimensions(&self) -> usize;

    fn embed(&self, text: &str) -> Result<Vec<f32>, PipelineError>;
}

/// Deterministic in-tree embedder: character trigrams hashed into a
/// fixed-width bucket histogram, L2-normalized. Empty text maps to the zero
/// vector.
#[derive(Debug, Clone, Copy)]
pub struct HashedNgramEmbedder {
    dimensions: usize,
}

impl HashedNgramEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }
}

impl Default for HashedNgramEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIMENSIONS)
    }
}

impl Embedder for HashedNgramEmbedder {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, PipelineError> {
        let mut vector = vec![0f32; self.dimensions];
        let chars: Vec<char> = text.to_lowercase().chars().collect();

        for trigram in chars.windows(3) {
            let bucket = (fnv1a(trigram) % self.dimensions as u64) as usize;
            vector[bucket] += 1.0;
        }

        l2_normalize(&mut vector);
        Ok(vector)
    }
}

fn fnv1a(chars: &[char]) -> u64 {
    let mut hash = 0xcbf29ce484222325u64;
    for character in chars {
        let mut buffer = [0u8; 4];
        for byte in character.encode_utf8(&mut buffer).bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x100000001b3);
        }
    }
    hash
}

fn l2_normalize(vector: &mut [f32]) {
    let magnitude = vector.iter().map(|value| value * value).sum::<f32>().sqrt();
    if magnitude > 0.0 {
        for value in vector {
            *value /= magnitude;
        }
    }
}
