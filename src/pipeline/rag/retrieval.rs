use std::sync::{Arc, Mutex};

use super::types::{EmbeddingModel, RetrievalParams};
use super::RagError;
use crate::knowledge::{KnowledgeBase, KnowledgePassage};
use crate::models::RetrievalMode;

/// Passage embeddings, fetched on first use and kept for the process
/// lifetime. A failed fetch leaves the cache empty so a later request
/// retries.
#[derive(Default)]
pub struct PassageEmbeddings {
    vectors: Mutex<Option<Arc<Vec<Vec<f32>>>>>,
}

impl PassageEmbeddings {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn is_loaded(&self) -> bool {
        self.lock().is_some()
    }

    /// Cached vectors, fetching them through `embedder` if needed.
    ///
    /// The lock is never held across the fetch. Concurrent misses each
    /// fetch on their own; the first successful result is kept.
    pub fn get_or_fetch(
        &self,
        knowledge: &KnowledgeBase,
        embedder: &dyn EmbeddingModel,
    ) -> Result<Arc<Vec<Vec<f32>>>, RagError> {
        if let Some(vectors) = self.lock().as_ref() {
            return Ok(Arc::clone(vectors));
        }

        let bodies: Vec<&str> = knowledge.passages().iter().map(|p| p.body).collect();
        let vectors = embedder.embed_batch(&bodies)?;
        if vectors.len() != bodies.len() {
            return Err(RagError::EmbeddingFailed(format!(
                "Expected {} passage embeddings, got {}",
                bodies.len(),
                vectors.len()
            )));
        }

        let mut guard = self.lock();
        if let Some(existing) = guard.as_ref() {
            return Ok(Arc::clone(existing));
        }
        tracing::info!(passages = vectors.len(), "Passage embeddings cached");
        let vectors = Arc::new(vectors);
        *guard = Some(Arc::clone(&vectors));
        Ok(vectors)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Arc<Vec<Vec<f32>>>>> {
        // The cache holds plain data; a panic mid-write cannot leave it half-set.
        self.vectors.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Rank passages by embedding similarity to the symptoms.
pub fn semantic_search<'k>(
    symptoms: &str,
    knowledge: &'k KnowledgeBase,
    embedder: &dyn EmbeddingModel,
    cache: &PassageEmbeddings,
    top_k: usize,
) -> Result<Vec<&'k KnowledgePassage>, RagError> {
    let query = embedder.embed(symptoms)?;
    let passage_vectors = cache.get_or_fetch(knowledge, embedder)?;
    Ok(knowledge
        .search_by_vector(&query, &passage_vectors, top_k)
        .into_iter()
        .map(|s| s.passage)
        .collect())
}

/// Rank passages by the lower-cased whitespace tokens of the symptoms.
pub fn keyword_search<'k>(
    symptoms: &str,
    knowledge: &'k KnowledgeBase,
    top_k: usize,
) -> Vec<&'k KnowledgePassage> {
    let lowered = symptoms.to_lowercase();
    let terms: Vec<&str> = lowered.split_whitespace().collect();
    knowledge.search_by_keywords(&terms, top_k)
}

/// Retrieve context passages according to `params`.
///
/// Embedding mode without an embedder is an error; the caller falls back.
pub fn retrieve<'k>(
    symptoms: &str,
    knowledge: &'k KnowledgeBase,
    embedder: Option<&dyn EmbeddingModel>,
    cache: &PassageEmbeddings,
    params: &RetrievalParams,
) -> Result<Vec<&'k KnowledgePassage>, RagError> {
    match params.mode {
        RetrievalMode::Keywords => Ok(keyword_search(symptoms, knowledge, params.top_k)),
        RetrievalMode::Embedding => {
            let embedder = embedder.ok_or(RagError::MissingCredential)?;
            semantic_search(symptoms, knowledge, embedder, cache, params.top_k)
        }
    }
}
