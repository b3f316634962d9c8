//! Headache knowledge base.
//!
//! A fixed, ordered set of reference passages with two lookup paths:
//! keyword containment counting, and cosine similarity over embeddings
//! the caller obtained from the embedding endpoint. The knowledge base
//! never generates vectors itself.

mod passages;

use serde::Serialize;

use crate::models::PassageTopic;

/// One static prose entry in the reference corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgePassage {
    pub topic: PassageTopic,
    pub body: &'static str,
}

/// A passage with its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPassage<'a> {
    pub passage: &'a KnowledgePassage,
    pub score: f32,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    passages: Vec<KnowledgePassage>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    /// The built-in ten-passage headache corpus.
    pub fn new() -> Self {
        Self {
            passages: passages::PASSAGES.to_vec(),
        }
    }

    /// A knowledge base over an arbitrary passage list (tests, tooling).
    pub fn from_passages(passages: Vec<KnowledgePassage>) -> Self {
        Self { passages }
    }

    pub fn passages(&self) -> &[KnowledgePassage] {
        &self.passages
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    /// Rank passages by how many `terms` occur as substrings of the
    /// lower-cased passage text. Ties keep corpus order.
    pub fn search_by_keywords<S: AsRef<str>>(&self, terms: &[S], top_k: usize) -> Vec<&KnowledgePassage> {
        let terms: Vec<String> = terms
            .iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        let mut scored: Vec<(&KnowledgePassage, usize)> = self
            .passages
            .iter()
            .map(|p| {
                let lower = p.body.to_lowercase();
                let hits = terms.iter().filter(|t| lower.contains(t.as_str())).count();
                (p, hits)
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().take(top_k).map(|(p, _)| p).collect()
    }

    /// Rank passages by cosine similarity between `query` and each entry of
    /// `passage_vectors` (index-aligned with `passages()`). Missing or
    /// incompatible vectors score 0. Ties keep corpus order.
    pub fn search_by_vector(
        &self,
        query: &[f32],
        passage_vectors: &[Vec<f32>],
        top_k: usize,
    ) -> Vec<ScoredPassage<'_>> {
        let mut scored: Vec<ScoredPassage<'_>> = self
            .passages
            .iter()
            .enumerate()
            .map(|(i, passage)| ScoredPassage {
                passage,
                score: passage_vectors
                    .get(i)
                    .map(|v| cosine_similarity(query, v))
                    .unwrap_or(0.0),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_k);
        scored
    }

    /// Join passages into a single context block for the prompt.
    pub fn context_text(passages: &[&KnowledgePassage]) -> String {
        passages
            .iter()
            .map(|p| p.body)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Cosine similarity. Returns 0.0 for empty, mismatched or zero-norm input.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let sim = dot / (norm_a * norm_b);
    if sim.is_nan() {
        0.0
    } else {
        sim
    }
}
