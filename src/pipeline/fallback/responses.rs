//! Fixed diagnosis sentences and recommendation lists.

use crate::models::HeadacheCategory;

/// Last element of every fallback recommendation list.
pub const DISCLAIMER: &str =
    "IMPORTANT: This is not a medical diagnosis. Always consult healthcare professionals for proper evaluation.";

const DIAGNOSIS_PREFIX: &str = "Based on the limited analysis available due to system constraints, ";

const CONSULT: &str = "Please consult a healthcare professional for accurate diagnosis.";

pub fn diagnosis_for(category: Option<HeadacheCategory>) -> String {
    let tail = match category {
        Some(HeadacheCategory::Migraine) => "your symptoms suggest a possible migraine.",
        Some(HeadacheCategory::Tension) => "your symptoms are consistent with tension headaches.",
        Some(HeadacheCategory::Cluster) => {
            "your symptoms have some similarities with cluster headaches."
        }
        Some(HeadacheCategory::Sinus) => "your symptoms may be related to a sinus headache.",
        Some(HeadacheCategory::Emergency) => {
            "your symptoms could indicate a serious condition requiring IMMEDIATE medical attention."
        }
        None => "I cannot determine a specific type of headache from the information provided.",
    };
    format!("{DIAGNOSIS_PREFIX}{tail}")
}

/// Recommendation list for a verdict. The emergency list is self-contained
/// and already ends with the disclaimer; every other list gets it appended
/// by the classifier.
pub fn recommendations_for(category: Option<HeadacheCategory>) -> Vec<String> {
    let items: &[&str] = match category {
        Some(HeadacheCategory::Emergency) => &[
            "SEEK EMERGENCY CARE IMMEDIATELY",
            "Call emergency services or go to the nearest emergency room",
            "Do not drive yourself if experiencing severe symptoms",
            DISCLAIMER,
        ],
        Some(HeadacheCategory::Migraine) => &[
            CONSULT,
            "Rest in a quiet, dark room",
            "Apply cold or warm compress",
            "Stay hydrated",
            "Over-the-counter pain medication may help (follow package instructions)",
        ],
        Some(HeadacheCategory::Tension) => &[
            CONSULT,
            "Stress management techniques like meditation",
            "Gentle neck and shoulder stretches",
            "Regular breaks from screen time",
            "Over-the-counter pain relievers if needed",
        ],
        Some(HeadacheCategory::Cluster) => &[
            CONSULT,
            "Consult a doctor immediately as cluster headaches often need prescription medication",
            "Oxygen therapy might help (requires medical supervision)",
            "Avoid alcohol during headache periods",
        ],
        Some(HeadacheCategory::Sinus) => &[
            CONSULT,
            "Try steam inhalation or saline nasal irrigation",
            "Apply a warm compress over the sinuses",
            "Stay hydrated to help thin mucus",
            "See a doctor if symptoms last more than 10 days or you develop a fever",
        ],
        None => &[
            CONSULT,
            "Track your symptoms and potential triggers",
            "Stay hydrated and get adequate sleep",
            "Consider over-the-counter pain relief if appropriate",
        ],
    };
    items.iter().map(|s| s.to_string()).collect()
}
