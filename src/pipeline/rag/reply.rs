use serde::Deserialize;

use super::RagError;

/// Diagnosis and recommendations extracted from a chat reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    pub diagnosis: String,
    pub recommendations: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Recommendations {
    List(Vec<String>),
    Single(String),
}

#[derive(Deserialize)]
struct RawReply {
    diagnosis: Option<String>,
    recommendations: Option<Recommendations>,
}

/// Parse the model's JSON reply.
///
/// A ```json fenced block is unwrapped when present. A bare string in
/// `recommendations` becomes a one-element list; blank entries are dropped.
pub fn parse_analysis_reply(reply: &str) -> Result<ParsedReply, RagError> {
    let json_str = extract_json(reply);
    let raw: RawReply = serde_json::from_str(json_str)
        .map_err(|e| RagError::MalformedResponse(format!("Invalid JSON: {e}")))?;

    let diagnosis = raw
        .diagnosis
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .ok_or_else(|| RagError::MalformedResponse("Missing diagnosis".into()))?;

    let recommendations: Vec<String> = match raw.recommendations {
        Some(Recommendations::List(items)) => items,
        Some(Recommendations::Single(item)) => vec![item],
        None => Vec::new(),
    }
    .into_iter()
    .map(|r| r.trim().to_string())
    .filter(|r| !r.is_empty())
    .collect();

    if recommendations.is_empty() {
        return Err(RagError::MalformedResponse("Missing recommendations".into()));
    }

    Ok(ParsedReply {
        diagnosis,
        recommendations,
    })
}

fn extract_json(reply: &str) -> &str {
    let Some(start) = reply.find("```json") else {
        return reply.trim();
    };
    let content_start = start + 7;
    match reply[content_start..].find("```") {
        Some(end) => reply[content_start..content_start + end].trim(),
        None => reply[content_start..].trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json_object() {
        let reply = r#"{"diagnosis": "Likely tension-type headache", "recommendations": ["Rest", "Hydrate"]}"#;
        let parsed = parse_analysis_reply(reply).unwrap();
        assert_eq!(parsed.diagnosis, "Likely tension-type headache");
        assert_eq!(parsed.recommendations, vec!["Rest", "Hydrate"]);
    }

    #[test]
    fn unwraps_fenced_json() {
        let reply = "Here you go:\n```json\n{\"diagnosis\": \"Migraine\", \"recommendations\": [\"Dark room\"]}\n```\nTake care.";
        let parsed = parse_analysis_reply(reply).unwrap();
        assert_eq!(parsed.diagnosis, "Migraine");
        assert_eq!(parsed.recommendations, vec!["Dark room"]);
    }

    #[test]
    fn single_string_recommendation_becomes_list() {
        let reply = r#"{"diagnosis": "Sinus headache", "recommendations": "Use saline rinse"}"#;
        let parsed = parse_analysis_reply(reply).unwrap();
        assert_eq!(parsed.recommendations, vec!["Use saline rinse"]);
    }

    #[test]
    fn missing_diagnosis_is_malformed() {
        let err = parse_analysis_reply(r#"{"recommendations": ["Rest"]}"#).unwrap_err();
        assert!(matches!(err, RagError::MalformedResponse(_)));

        let err = parse_analysis_reply(r#"{"diagnosis": "  ", "recommendations": ["Rest"]}"#)
            .unwrap_err();
        assert!(matches!(err, RagError::MalformedResponse(_)));
    }

    #[test]
    fn empty_recommendations_are_malformed() {
        let err = parse_analysis_reply(r#"{"diagnosis": "Migraine", "recommendations": []}"#)
            .unwrap_err();
        assert!(matches!(err, RagError::MalformedResponse(_)));

        let err = parse_analysis_reply(r#"{"diagnosis": "Migraine", "recommendations": ["", " "]}"#)
            .unwrap_err();
        assert!(matches!(err, RagError::MalformedResponse(_)));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = parse_analysis_reply("I think it is a migraine.").unwrap_err();
        assert!(matches!(err, RagError::MalformedResponse(_)));
    }
}
