//! Keyword lists and phrase bonuses for the fallback classifier.
//!
//! Lists are matched against whole, lower-cased tokens. Each list entry
//! counts at most once, however often it appears in the input.

use crate::models::HeadacheCategory;

pub const MIGRAINE_KEYWORDS: &[&str] = &[
    "migraine",
    "throbbing",
    "pulsing",
    "pulsating",
    "pounding",
    "nausea",
    "nauseous",
    "nauseated",
    "vomiting",
    "aura",
    "flashing",
    "zigzag",
    "light",
    "sensitivity",
    "photophobia",
    "sound",
    "noise",
];

pub const TENSION_KEYWORDS: &[&str] = &[
    "tension",
    "tight",
    "tightness",
    "pressure",
    "band",
    "squeezing",
    "dull",
    "aching",
    "stress",
    "stressed",
    "neck",
    "shoulders",
    "forehead",
    "posture",
];

pub const CLUSTER_KEYWORDS: &[&str] = &[
    "cluster",
    "eye",
    "behind",
    "stabbing",
    "piercing",
    "burning",
    "excruciating",
    "tearing",
    "watery",
    "watering",
    "drooping",
    "restless",
    "agitated",
    "nightly",
];

pub const SINUS_KEYWORDS: &[&str] = &[
    "sinus",
    "sinuses",
    "congestion",
    "congested",
    "stuffy",
    "runny",
    "nose",
    "cheeks",
    "cheekbones",
    "facial",
    "mucus",
    "discharge",
    "bending",
    "allergies",
];

pub const EMERGENCY_KEYWORDS: &[&str] = &[
    "worst",
    "sudden",
    "thunderclap",
    "explosive",
    "confusion",
    "confused",
    "seizure",
    "fainted",
    "unconscious",
    "stiff",
    "numbness",
    "weakness",
    "paralysis",
    "slurred",
    "double",
    "fever",
    "injury",
];

/// Tokens that arm the emergency short-circuit.
pub const EMERGENCY_TRIGGERS: &[&str] = &["worst", "sudden", "severe"];

/// Score added by each phrase bonus.
pub const PHRASE_BONUS: u32 = 2;

/// Minimum score for a category to be named in the diagnosis.
pub const MIN_WINNING_SCORE: u32 = 2;

const LIGHT_SENSITIVITY_PHRASES: &[&str] = &[
    "light sensitive",
    "light sensitivity",
    "sensitive to light",
    "sensitivity to light",
    "worse with light",
];

pub fn keywords_for(category: HeadacheCategory) -> &'static [&'static str] {
    match category {
        HeadacheCategory::Migraine => MIGRAINE_KEYWORDS,
        HeadacheCategory::Tension => TENSION_KEYWORDS,
        HeadacheCategory::Cluster => CLUSTER_KEYWORDS,
        HeadacheCategory::Sinus => SINUS_KEYWORDS,
        HeadacheCategory::Emergency => EMERGENCY_KEYWORDS,
    }
}

/// A phrase-level rule evaluated on the raw lowered text.
pub struct PhraseBonus {
    pub category: HeadacheCategory,
    pub description: &'static str,
    matcher: fn(&str, &[String]) -> bool,
}

impl PhraseBonus {
    pub fn applies(&self, lowered: &str, tokens: &[String]) -> bool {
        (self.matcher)(lowered, tokens)
    }
}

fn has_token(tokens: &[String], word: &str) -> bool {
    tokens.iter().any(|t| t == word)
}

fn one_side(text: &str, tokens: &[String]) -> bool {
    text.contains("one side") || (has_token(tokens, "one") && has_token(tokens, "side"))
}

fn both_sides(text: &str, tokens: &[String]) -> bool {
    text.contains("both sides") || (has_token(tokens, "both") && has_token(tokens, "sides"))
}

fn light_sensitivity(text: &str, _tokens: &[String]) -> bool {
    LIGHT_SENSITIVITY_PHRASES.iter().any(|p| text.contains(p))
}

pub static PHRASE_BONUSES: [PhraseBonus; 3] = [
    PhraseBonus {
        category: HeadacheCategory::Migraine,
        description: "one-sided pain",
        matcher: one_side,
    },
    PhraseBonus {
        category: HeadacheCategory::Tension,
        description: "pain on both sides",
        matcher: both_sides,
    },
    PhraseBonus {
        category: HeadacheCategory::Migraine,
        description: "light sensitivity",
        matcher: light_sensitivity,
    },
];
