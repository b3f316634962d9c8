//! Deterministic keyword-scoring classifier.
//!
//! Used whenever the LLM path is unavailable or fails. Pure function of
//! its input: same text, same diagnosis, same recommendations.
//!
//! Scoring:
//! 1. lower-case and tokenize on whitespace (edge punctuation trimmed)
//! 2. one point per keyword-list entry present among the tokens
//! 3. phrase bonuses on the raw lowered text
//! 4. emergency short-circuit
//! 5. highest of migraine/tension/cluster/sinus, ties by declared priority

pub mod keywords;
pub mod responses;

use std::collections::HashSet;

use serde::Serialize;

use crate::models::{AnalysisResult, HeadacheCategory};

use keywords::{
    keywords_for, EMERGENCY_TRIGGERS, MIN_WINNING_SCORE, PHRASE_BONUS, PHRASE_BONUSES,
};
pub use responses::DISCLAIMER;

/// Per-category scores for one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub migraine: u32,
    pub tension: u32,
    pub cluster: u32,
    pub sinus: u32,
    pub emergency: u32,
}

impl CategoryScores {
    pub fn get(&self, category: HeadacheCategory) -> u32 {
        match category {
            HeadacheCategory::Migraine => self.migraine,
            HeadacheCategory::Tension => self.tension,
            HeadacheCategory::Cluster => self.cluster,
            HeadacheCategory::Sinus => self.sinus,
            HeadacheCategory::Emergency => self.emergency,
        }
    }

    fn add(&mut self, category: HeadacheCategory, points: u32) {
        let slot = match category {
            HeadacheCategory::Migraine => &mut self.migraine,
            HeadacheCategory::Tension => &mut self.tension,
            HeadacheCategory::Cluster => &mut self.cluster,
            HeadacheCategory::Sinus => &mut self.sinus,
            HeadacheCategory::Emergency => &mut self.emergency,
        };
        *slot += points;
    }
}

/// Classifier verdict. `category` is `None` when nothing reached the
/// winning threshold; `Some(Emergency)` when the short-circuit fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Option<HeadacheCategory>,
    pub scores: CategoryScores,
}

/// Lower-case, split on whitespace, trim ASCII punctuation at token edges.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()).to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Score `symptoms` against every category and pick a verdict.
pub fn classify(symptoms: &str) -> Classification {
    let lowered = symptoms.to_lowercase();
    let tokens = tokenize(symptoms);
    let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    let mut scores = CategoryScores::default();
    for category in HeadacheCategory::RANKED
        .iter()
        .copied()
        .chain([HeadacheCategory::Emergency])
    {
        let hits = keywords_for(category)
            .iter()
            .filter(|kw| token_set.contains(*kw))
            .count() as u32;
        scores.add(category, hits);
    }

    for bonus in PHRASE_BONUSES.iter() {
        if bonus.applies(&lowered, &tokens) {
            tracing::trace!(bonus = bonus.description, category = bonus.category.as_str(), "Phrase bonus");
            scores.add(bonus.category, PHRASE_BONUS);
        }
    }

    let triggered = EMERGENCY_TRIGGERS.iter().any(|t| token_set.contains(t));
    if scores.emergency >= 2 && triggered {
        return Classification {
            category: Some(HeadacheCategory::Emergency),
            scores,
        };
    }

    // Highest score wins; on equal scores the lower rank wins.
    let winner = HeadacheCategory::RANKED
        .iter()
        .copied()
        .max_by(|a, b| {
            scores
                .get(*a)
                .cmp(&scores.get(*b))
                .then_with(|| b.rank().cmp(&a.rank()))
        })
        .filter(|c| scores.get(*c) >= MIN_WINNING_SCORE);

    Classification {
        category: winner,
        scores,
    }
}

/// Full fallback analysis: diagnosis sentence plus recommendations, the
/// last of which is always [`DISCLAIMER`].
pub fn fallback_analysis(symptoms: &str) -> AnalysisResult {
    let classification = classify(symptoms);
    tracing::debug!(
        category = classification.category.map(|c| c.as_str()).unwrap_or("undetermined"),
        scores = ?classification.scores,
        "Fallback classification"
    );

    let diagnosis = responses::diagnosis_for(classification.category);
    let mut recommendations = responses::recommendations_for(classification.category);
    if classification.category != Some(HeadacheCategory::Emergency) {
        recommendations.push(DISCLAIMER.to_string());
    }

    AnalysisResult::from_fallback(diagnosis, recommendations)
}
